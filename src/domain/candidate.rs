// ==========================================
// Concurso Radar - modelo de candidato
// ==========================================
// Alinhado à tabela candidate
// ==========================================

use crate::domain::types::CandidateStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// Candidate - candidato classificado
// ==========================================
// Invariante (não imposta pelo sistema): posição única entre
// candidatos ativos de um mesmo concurso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    // ===== Chave =====
    pub id: String,
    pub competition_id: String, // namespace explícito do concurso

    // ===== Dados =====
    pub name: String,
    pub position: i64,           // ordem de classificação
    pub status: CandidateStatus,

    // ===== Auditoria =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Candidate {
    /// Cria um candidato classificado em uma posição
    pub fn new(competition_id: &str, name: &str, position: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            competition_id: competition_id.to_string(),
            name: name.to_string(),
            position,
            status: CandidateStatus::Classified,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Maior posição já alcançada pela convocação
///
/// # Regra
/// - max(position) entre candidatos CALLED ou APPOINTED
/// - 0 quando ninguém foi chamado
pub fn highest_called_position(candidates: &[Candidate]) -> i64 {
    candidates
        .iter()
        .filter(|c| c.status.counts_as_called())
        .map(|c| c.position)
        .max()
        .unwrap_or(0)
}
