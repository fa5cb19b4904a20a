// ==========================================
// Concurso Radar - API de previsão
// ==========================================
// Composição: repositórios (snapshot) → engines (cálculo puro).
// Uma previsão completa é uma unidade requisição-resposta atômica;
// não há resultado parcial significativo.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::PredictionConfigReader;
use crate::domain::{highest_called_position, PredictionResult};
use crate::engine::{call_progress, PredictionEngine};
use crate::repository::{CandidateRepository, ConvocationRepository};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::info;

// ==========================================
// PredictionApi
// ==========================================
pub struct PredictionApi<C>
where
    C: PredictionConfigReader,
{
    candidate_repo: Arc<CandidateRepository>,
    convocation_repo: Arc<ConvocationRepository>,
    engine: PredictionEngine<C>,
}

impl<C> PredictionApi<C>
where
    C: PredictionConfigReader,
{
    pub fn new(
        candidate_repo: Arc<CandidateRepository>,
        convocation_repo: Arc<ConvocationRepository>,
        config: Arc<C>,
    ) -> Self {
        Self {
            candidate_repo,
            convocation_repo,
            engine: PredictionEngine::new(config),
        }
    }

    fn validate(competition_id: &str, position: i64) -> ApiResult<()> {
        if competition_id.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "competition_id não pode ser vazio".to_string(),
            ));
        }
        if position < 1 {
            return Err(ApiError::InvalidInput(format!(
                "posição inválida: {}",
                position
            )));
        }
        Ok(())
    }

    /// Previsão de chamada para uma posição, com "hoje" explícito
    pub async fn predict_call_date_at(
        &self,
        competition_id: &str,
        position: i64,
        today: NaiveDate,
    ) -> ApiResult<PredictionResult> {
        Self::validate(competition_id, position)?;

        let candidates = self.candidate_repo.list(competition_id)?;
        let events = self.convocation_repo.list(competition_id)?;

        let result = self
            .engine
            .predict(&candidates, &events, position, today)
            .await?;

        info!(
            competition_id,
            position,
            remaining = result.remaining_calls,
            confidence = %result.confidence,
            "previsão calculada"
        );
        Ok(result)
    }

    /// Previsão de chamada para uma posição (hoje = data local)
    pub async fn predict_call_date(
        &self,
        competition_id: &str,
        position: i64,
    ) -> ApiResult<PredictionResult> {
        self.predict_call_date_at(competition_id, position, Local::now().date_naive())
            .await
    }

    /// Percentual de avanço da convocação até uma posição
    pub fn call_progress(&self, competition_id: &str, position: i64) -> ApiResult<u32> {
        Self::validate(competition_id, position)?;
        let candidates = self.candidate_repo.list(competition_id)?;
        Ok(call_progress(
            highest_called_position(&candidates),
            position,
        ))
    }
}
