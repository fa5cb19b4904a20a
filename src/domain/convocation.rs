// ==========================================
// Concurso Radar - modelo de convocação
// ==========================================
// Alinhado à tabela convocation_event
// ==========================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// ConvocationEvent - evento de convocação
// ==========================================
// Semântica de dia de calendário: hora do dia não é significativa.
// Invariante frouxa: has_called=false ⇒ lista vazia; has_called=true
// com lista vazia é tolerado pelo agregador (contribui zero chamadas).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvocationEvent {
    // ===== Chave =====
    pub id: String,
    pub competition_id: String,

    // ===== Dados =====
    pub date: NaiveDate,
    pub has_called: bool,
    pub called_candidate_ids: Vec<String>, // ordem irrelevante; duplicatas não rejeitadas
    pub notes: Option<String>,

    // ===== Auditoria =====
    pub created_at: DateTime<Utc>,
}

impl ConvocationEvent {
    /// Evento com chamadas em uma data
    pub fn with_calls(
        competition_id: &str,
        date: NaiveDate,
        called_candidate_ids: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            competition_id: competition_id.to_string(),
            date,
            has_called: true,
            called_candidate_ids,
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// Evento registrando dia sem chamadas (carga histórica)
    pub fn without_calls(competition_id: &str, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            competition_id: competition_id.to_string(),
            date,
            has_called: false,
            called_candidate_ids: Vec::new(),
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// Quantidade de chamadas que o evento contribui para a série
    pub fn call_count(&self) -> usize {
        if self.has_called {
            self.called_candidate_ids.len()
        } else {
            0
        }
    }
}

// ==========================================
// CallDay - elemento da série agregada
// ==========================================
// Saída do CallSeriesAggregator: uma entrada por data distinta
// com pelo menos um evento com chamada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallDay {
    pub date: NaiveDate,
    pub called_that_day: u32,
    pub cumulative_total: u32,
}
