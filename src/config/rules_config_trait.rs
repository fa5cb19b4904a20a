// ==========================================
// Concurso Radar - trait de configuração de regras documentais
// ==========================================
// Interface de leitura usada pelo DocumentEligibilityEngine.
// ==========================================

use async_trait::async_trait;
use std::error::Error;

// ==========================================
// RulesConfigReader Trait
// ==========================================
#[async_trait]
pub trait RulesConfigReader: Send + Sync {
    /// Intervalo mínimo entre doses da vacina DT (dias)
    ///
    /// # Padrão
    /// - 60
    async fn get_dt_dose_gap_days(&self) -> Result<i64, Box<dyn Error>>;

    /// Janela do reforço da DT (anos): última dose mais antiga que isso
    /// exige reforço e invalida o esquema
    ///
    /// # Padrão
    /// - 10
    async fn get_dt_booster_years(&self) -> Result<u32, Box<dyn Error>>;

    /// Intervalo mínimo da 2ª dose de Hepatite B após a 1ª (meses)
    ///
    /// # Padrão
    /// - 1
    async fn get_hep_b_second_dose_months(&self) -> Result<u32, Box<dyn Error>>;

    /// Intervalo mínimo da 3ª dose de Hepatite B após a 1ª (meses)
    ///
    /// # Padrão
    /// - 6
    async fn get_hep_b_third_dose_months(&self) -> Result<u32, Box<dyn Error>>;

    /// Dias de tolerância no aviso de vencimento próximo
    ///
    /// # Padrão
    /// - 30
    async fn get_expiry_grace_days(&self) -> Result<i64, Box<dyn Error>>;
}
