// ==========================================
// Concurso Radar - API de documentos
// ==========================================
// Composição: repositório de documentos → engine de elegibilidade.
// Também cuida da semeadura do checklist padrão e da rederivação
// de expiration_date/kind nas atualizações.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::RulesConfigReader;
use crate::domain::{Document, DocumentStatus, DocumentSummary, DEFAULT_DOCUMENTS};
use crate::engine::DocumentEligibilityEngine;
use crate::repository::DocumentRepository;
use chrono::{Local, NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;

// ==========================================
// DocumentApi
// ==========================================
pub struct DocumentApi<C>
where
    C: RulesConfigReader,
{
    document_repo: Arc<DocumentRepository>,
    engine: DocumentEligibilityEngine<C>,
}

impl<C> DocumentApi<C>
where
    C: RulesConfigReader,
{
    pub fn new(document_repo: Arc<DocumentRepository>, config: Arc<C>) -> Self {
        Self {
            document_repo,
            engine: DocumentEligibilityEngine::new(config),
        }
    }

    fn validate_competition(competition_id: &str) -> ApiResult<()> {
        if competition_id.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "competition_id não pode ser vazio".to_string(),
            ));
        }
        Ok(())
    }

    /// Semeia o checklist padrão no primeiro acesso (idempotente)
    ///
    /// # Retorno
    /// - quantidade de documentos criados (0 se já semeado)
    pub fn ensure_default_documents(&self, competition_id: &str) -> ApiResult<usize> {
        Self::validate_competition(competition_id)?;

        if self.document_repo.count(competition_id)? > 0 {
            return Ok(0);
        }
        for (name, _) in DEFAULT_DOCUMENTS {
            self.document_repo
                .insert(&Document::new(competition_id, name))?;
        }
        info!(
            competition_id,
            total = DEFAULT_DOCUMENTS.len(),
            "checklist padrão semeado"
        );
        Ok(DEFAULT_DOCUMENTS.len())
    }

    /// Avalia um documento (completo/vencido/problema de vacina)
    pub async fn evaluate_document(
        &self,
        competition_id: &str,
        document_id: &str,
        today: NaiveDate,
    ) -> ApiResult<DocumentStatus> {
        Self::validate_competition(competition_id)?;
        let doc = self.document_repo.get(competition_id, document_id)?;
        Ok(self.engine.evaluate(&doc, today).await?)
    }

    /// Situação agregada do checklist
    pub async fn status_summary(&self, competition_id: &str) -> ApiResult<DocumentSummary> {
        self.status_summary_at(competition_id, Local::now().date_naive())
            .await
    }

    /// Situação agregada com "hoje" explícito
    pub async fn status_summary_at(
        &self,
        competition_id: &str,
        today: NaiveDate,
    ) -> ApiResult<DocumentSummary> {
        Self::validate_competition(competition_id)?;
        let documents = self.document_repo.list(competition_id)?;
        Ok(self.engine.summarize(&documents, today).await?)
    }

    /// Documentos com alguma pendência
    pub async fn documents_with_problems(
        &self,
        competition_id: &str,
        today: NaiveDate,
    ) -> ApiResult<Vec<Document>> {
        Self::validate_competition(competition_id)?;
        let documents = self.document_repo.list(competition_id)?;
        Ok(self
            .engine
            .documents_with_problems(&documents, today)
            .await?)
    }

    /// Documentos vencendo até uma data-limite
    ///
    /// grace_days=None usa a tolerância configurada.
    pub async fn documents_expiring_before(
        &self,
        competition_id: &str,
        today: NaiveDate,
        deadline: NaiveDate,
        grace_days: Option<i64>,
    ) -> ApiResult<Vec<Document>> {
        Self::validate_competition(competition_id)?;
        let documents = self.document_repo.list(competition_id)?;
        Ok(self
            .engine
            .documents_expiring_before(&documents, today, deadline, grace_days)
            .await?)
    }

    /// Atualiza um documento, rederivando campos dependentes
    ///
    /// expiration_date nunca é aceita como entrada: é sempre recalculada
    /// a partir de issue_date + validity_period. O kind é rederivado do
    /// nome, para o caso de renomeação.
    pub fn update_document(&self, mut doc: Document) -> ApiResult<Document> {
        Self::validate_competition(&doc.competition_id)?;
        doc.refresh_kind();
        doc.refresh_expiration();
        doc.updated_at = Utc::now();
        self.document_repo.update(&doc)?;
        Ok(doc)
    }

    /// Lista os documentos do concurso
    pub fn list_documents(&self, competition_id: &str) -> ApiResult<Vec<Document>> {
        Self::validate_competition(competition_id)?;
        Ok(self.document_repo.list(competition_id)?)
    }
}
