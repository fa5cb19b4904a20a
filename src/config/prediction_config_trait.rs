// ==========================================
// Concurso Radar - trait de configuração de previsão
// ==========================================
// Define a interface de leitura usada pelo PredictionEngine
// (sem escrita, sem lógica de negócio).
// ==========================================

use async_trait::async_trait;
use std::error::Error;

// ==========================================
// PredictionConfigReader Trait
// ==========================================
// Implementador: ConfigManager (lê da tabela config_kv)
#[async_trait]
pub trait PredictionConfigReader: Send + Sync {
    /// Janela curta em dias úteis
    ///
    /// # Padrão
    /// - 30
    async fn get_short_window_days(&self) -> Result<i64, Box<dyn Error>>;

    /// Janela longa em dias úteis
    ///
    /// # Padrão
    /// - 90
    async fn get_long_window_days(&self) -> Result<i64, Box<dyn Error>>;

    /// Peso da janela curta na taxa dinâmica (a longa recebe 1 − peso)
    ///
    /// # Padrão
    /// - 0.7
    async fn get_short_window_weight(&self) -> Result<f64, Box<dyn Error>>;

    /// Piso da taxa dinâmica
    ///
    /// Evita projeções absurdas quando não há atividade recente.
    ///
    /// # Padrão
    /// - 0.1
    async fn get_min_rate_floor(&self) -> Result<f64, Box<dyn Error>>;

    /// Fator do cenário pessimista
    ///
    /// # Padrão
    /// - 0.6
    async fn get_pessimistic_factor(&self) -> Result<f64, Box<dyn Error>>;

    /// Fator do cenário otimista
    ///
    /// # Padrão
    /// - 1.5
    async fn get_optimistic_factor(&self) -> Result<f64, Box<dyn Error>>;

    /// Mínimo de datas com chamada para confiança alta
    ///
    /// # Padrão
    /// - 5
    async fn get_high_confidence_min_dates(&self) -> Result<usize, Box<dyn Error>>;

    /// Datas com chamada devem exceder este valor para confiança média
    ///
    /// # Padrão
    /// - 2
    async fn get_medium_confidence_min_dates(&self) -> Result<usize, Box<dyn Error>>;
}
