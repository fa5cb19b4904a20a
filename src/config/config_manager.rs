// ==========================================
// Concurso Radar - gerenciador de configuração
// ==========================================
// Armazenamento: tabela config_kv (key-value, scope_id='global')
// Chave ausente cai no valor padrão documentado no trait.
// ==========================================

use crate::config::prediction_config_trait::PredictionConfigReader;
use crate::config::rules_config_trait::RulesConfigReader;
use crate::db::open_sqlite_connection;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Abre o banco e cria o gerenciador
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Cria a partir de uma conexão existente
    ///
    /// Reaplica os PRAGMA unificados (idempotente).
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let guard = conn
                .lock()
                .map_err(|e| format!("falha ao obter lock: {}", e))?;
            crate::db::configure_sqlite_connection(&guard)?;
        }
        Ok(Self { conn })
    }

    /// Lê um valor da config_kv (scope global)
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("falha ao obter lock: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// Grava um valor na config_kv (scope global)
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("falha ao obter lock: {}", e))?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn get_parsed_or<T: std::str::FromStr>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, Box<dyn Error>> {
        match self.get_config_value(key)? {
            Some(raw) => match raw.parse::<T>() {
                Ok(v) => Ok(v),
                // valor corrompido não derruba o cálculo: usa o padrão
                Err(_) => Ok(default),
            },
            None => Ok(default),
        }
    }
}

#[async_trait]
impl PredictionConfigReader for ConfigManager {
    async fn get_short_window_days(&self) -> Result<i64, Box<dyn Error>> {
        self.get_parsed_or("prediction/short_window_days", 30)
    }

    async fn get_long_window_days(&self) -> Result<i64, Box<dyn Error>> {
        self.get_parsed_or("prediction/long_window_days", 90)
    }

    async fn get_short_window_weight(&self) -> Result<f64, Box<dyn Error>> {
        self.get_parsed_or("prediction/short_window_weight", 0.7)
    }

    async fn get_min_rate_floor(&self) -> Result<f64, Box<dyn Error>> {
        self.get_parsed_or("prediction/min_rate_floor", 0.1)
    }

    async fn get_pessimistic_factor(&self) -> Result<f64, Box<dyn Error>> {
        self.get_parsed_or("prediction/pessimistic_factor", 0.6)
    }

    async fn get_optimistic_factor(&self) -> Result<f64, Box<dyn Error>> {
        self.get_parsed_or("prediction/optimistic_factor", 1.5)
    }

    async fn get_high_confidence_min_dates(&self) -> Result<usize, Box<dyn Error>> {
        self.get_parsed_or("prediction/high_confidence_min_dates", 5)
    }

    async fn get_medium_confidence_min_dates(&self) -> Result<usize, Box<dyn Error>> {
        self.get_parsed_or("prediction/medium_confidence_min_dates", 2)
    }
}

#[async_trait]
impl RulesConfigReader for ConfigManager {
    async fn get_dt_dose_gap_days(&self) -> Result<i64, Box<dyn Error>> {
        self.get_parsed_or("rules/dt_dose_gap_days", 60)
    }

    async fn get_dt_booster_years(&self) -> Result<u32, Box<dyn Error>> {
        self.get_parsed_or("rules/dt_booster_years", 10)
    }

    async fn get_hep_b_second_dose_months(&self) -> Result<u32, Box<dyn Error>> {
        self.get_parsed_or("rules/hep_b_second_dose_months", 1)
    }

    async fn get_hep_b_third_dose_months(&self) -> Result<u32, Box<dyn Error>> {
        self.get_parsed_or("rules/hep_b_third_dose_months", 6)
    }

    async fn get_expiry_grace_days(&self) -> Result<i64, Box<dyn Error>> {
        self.get_parsed_or("rules/expiry_grace_days", 30)
    }
}
