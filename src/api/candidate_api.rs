// ==========================================
// Concurso Radar - API de candidatos
// ==========================================
// CRUD fino sobre o repositório, com validação de entrada.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::types::CandidateStatus;
use crate::domain::Candidate;
use crate::repository::CandidateRepository;
use std::sync::Arc;
use tracing::info;

// ==========================================
// CandidateApi
// ==========================================
pub struct CandidateApi {
    candidate_repo: Arc<CandidateRepository>,
}

impl CandidateApi {
    pub fn new(candidate_repo: Arc<CandidateRepository>) -> Self {
        Self { candidate_repo }
    }

    fn validate_competition(competition_id: &str) -> ApiResult<()> {
        if competition_id.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "competition_id não pode ser vazio".to_string(),
            ));
        }
        Ok(())
    }

    /// Insere um candidato em uma posição
    pub fn register(
        &self,
        competition_id: &str,
        name: &str,
        position: i64,
    ) -> ApiResult<Candidate> {
        Self::validate_competition(competition_id)?;
        if name.trim().is_empty() {
            return Err(ApiError::InvalidInput("nome não pode ser vazio".to_string()));
        }
        if position < 1 {
            return Err(ApiError::InvalidInput(format!(
                "posição inválida: {}",
                position
            )));
        }
        let candidate = Candidate::new(competition_id, name, position);
        self.candidate_repo.insert(&candidate)?;
        Ok(candidate)
    }

    /// Carga em lote da classificação: nomes em ordem, a partir de
    /// uma posição inicial
    pub fn register_batch(
        &self,
        competition_id: &str,
        names: &[String],
        start_position: i64,
    ) -> ApiResult<Vec<Candidate>> {
        Self::validate_competition(competition_id)?;
        if start_position < 1 {
            return Err(ApiError::InvalidInput(format!(
                "posição inicial inválida: {}",
                start_position
            )));
        }
        let candidates: Vec<Candidate> = names
            .iter()
            .enumerate()
            .map(|(i, name)| Candidate::new(competition_id, name, start_position + i as i64))
            .collect();
        self.candidate_repo.insert_bulk(&candidates)?;
        info!(
            competition_id,
            total = candidates.len(),
            start_position,
            "classificação carregada em lote"
        );
        Ok(candidates)
    }

    /// Atualiza a situação de um candidato
    pub fn update_status(
        &self,
        competition_id: &str,
        candidate_id: &str,
        status: CandidateStatus,
    ) -> ApiResult<()> {
        Self::validate_competition(competition_id)?;
        self.candidate_repo
            .update_status(competition_id, candidate_id, status)?;
        Ok(())
    }

    /// Lista os candidatos do concurso em ordem de classificação
    pub fn list_candidates(&self, competition_id: &str) -> ApiResult<Vec<Candidate>> {
        Self::validate_competition(competition_id)?;
        Ok(self.candidate_repo.list(competition_id)?)
    }
}
