// ==========================================
// Concurso Radar - engine de elegibilidade documental
// ==========================================
// Decide se cada documento está completo, vencido ou com problema,
// e agrega os totais do checklist.
// Não escreve em banco: só calcula e retorna.
// ==========================================
// Entrada: Document (snapshot em memória)
// Saída: DocumentStatus { complete, expired, vaccine_problem, reasons }
// ==========================================

use crate::config::RulesConfigReader;
use crate::domain::types::DocumentKind;
use crate::domain::{Document, DocumentStatus, DocumentSummary};
use crate::engine::EligibilityCore;
use chrono::{Duration, NaiveDate};
use std::error::Error;
use std::sync::Arc;
use tracing::instrument;

// ==========================================
// DocumentEligibilityEngine
// ==========================================
pub struct DocumentEligibilityEngine<C>
where
    C: RulesConfigReader,
{
    config: Arc<C>,
}

impl<C> DocumentEligibilityEngine<C>
where
    C: RulesConfigReader,
{
    /// Cria o engine com um leitor de configuração de regras
    pub fn new(config: Arc<C>) -> Self {
        Self { config }
    }

    /// Avalia um único documento
    ///
    /// # Retorno
    /// - DocumentStatus com razões de decisão (explicabilidade)
    #[instrument(skip(self, doc), fields(document = %doc.name))]
    pub async fn evaluate(
        &self,
        doc: &Document,
        today: NaiveDate,
    ) -> Result<DocumentStatus, Box<dyn Error>> {
        let mut reasons = Vec::new();

        // === Regra 1: vencimento ===
        let expired = EligibilityCore::is_expired(doc.expiration_date, today);
        if expired {
            reasons.push("EXPIRED: expiration_date não está no futuro".to_string());
        }

        // === Regra 2: posse do documento ===
        if !doc.has_document {
            reasons.push("MISSING: has_document=false".to_string());
        }

        // === Regra 3: esquema vacinal (quando aplicável) ===
        let dt_gap_days = self.config.get_dt_dose_gap_days().await?;
        let dt_booster_years = self.config.get_dt_booster_years().await?;
        let hep_b_second = self.config.get_hep_b_second_dose_months().await?;
        let hep_b_third = self.config.get_hep_b_third_dose_months().await?;

        let schedule_valid = EligibilityCore::vaccine_schedule_valid(
            doc,
            today,
            dt_gap_days,
            dt_booster_years,
            hep_b_second,
            hep_b_third,
        );
        // problema de vacina: sinal distinto de "incompleto", usado pela
        // UI para o aviso laranja
        let vaccine_problem = doc.kind.is_vaccine() && doc.has_document && !schedule_valid;
        if vaccine_problem {
            reasons.push("VACCINE_PROBLEM: esquema de doses inválido".to_string());
        }

        // === Regra 4: predicado específico do tipo ===
        let kind_satisfied = match doc.kind {
            DocumentKind::Generic => {
                let ok = EligibilityCore::has_reference_link(doc.drive_link.as_deref());
                if !ok {
                    reasons.push("LINK_MISSING: documento sem link de referência".to_string());
                }
                ok
            }
            DocumentKind::StateRegistration => {
                let ok = EligibilityCore::state_registration_complete(
                    &doc.states,
                    &doc.state_links,
                    &doc.state_issue_dates,
                );
                if !ok {
                    reasons.push(
                        "STATE_INCOMPLETE: UF sem link ou sem data de emissão".to_string(),
                    );
                }
                ok
            }
            DocumentKind::VaccineHepB => {
                // Hepatite B exige o esquema e o link do cartão
                let link_ok = EligibilityCore::has_reference_link(doc.drive_link.as_deref());
                if !link_ok {
                    reasons.push("LINK_MISSING: cartão de vacina sem link".to_string());
                }
                schedule_valid && link_ok
            }
            DocumentKind::VaccineDt | DocumentKind::VaccineMmr => schedule_valid,
            DocumentKind::NotarizedDeclaration => {
                let link_ok = EligibilityCore::has_reference_link(doc.drive_link.as_deref());
                if !link_ok {
                    reasons.push("LINK_MISSING: declaração sem link de referência".to_string());
                }
                if !doc.has_notarized_copy {
                    reasons.push("NOTARIZATION_MISSING: sem firma reconhecida".to_string());
                }
                link_ok && doc.has_notarized_copy
            }
        };

        let complete = doc.has_document && !expired && kind_satisfied;
        if complete {
            reasons.push("COMPLETE".to_string());
        }

        Ok(DocumentStatus {
            complete,
            expired,
            vaccine_problem,
            reasons,
        })
    }

    /// Agrega a situação de todo o checklist
    pub async fn summarize(
        &self,
        documents: &[Document],
        today: NaiveDate,
    ) -> Result<DocumentSummary, Box<dyn Error>> {
        let mut completed = 0;
        let mut expired = 0;
        let mut missing = 0;
        let mut vaccine_problem = 0;

        for doc in documents {
            let status = self.evaluate(doc, today).await?;
            if status.complete {
                completed += 1;
            }
            if status.expired {
                expired += 1;
            }
            if !doc.has_document {
                missing += 1;
            }
            if status.vaccine_problem {
                vaccine_problem += 1;
            }
        }

        let total = documents.len();
        let percentage = if total == 0 {
            0
        } else {
            (100.0 * completed as f64 / total as f64).round() as u32
        };

        Ok(DocumentSummary {
            total,
            completed,
            expired,
            missing,
            vaccine_problem,
            percentage,
        })
    }

    /// Documentos com alguma pendência
    ///
    /// União de: faltante, vencido, esquema vacinal inválido, sem link
    /// (não vacina), certidão estadual incompleta, firma faltando.
    pub async fn documents_with_problems(
        &self,
        documents: &[Document],
        today: NaiveDate,
    ) -> Result<Vec<Document>, Box<dyn Error>> {
        let mut flagged = Vec::new();
        for doc in documents {
            let status = self.evaluate(doc, today).await?;
            if !status.complete {
                flagged.push(doc.clone());
            }
        }
        Ok(flagged)
    }

    /// Documentos vencendo até uma data (com dias de tolerância)
    ///
    /// # Regra
    /// - Tem vencimento, ele cai em [hoje, limite + tolerância] e o
    ///   documento ainda não está vencido.
    pub async fn documents_expiring_before(
        &self,
        documents: &[Document],
        today: NaiveDate,
        deadline: NaiveDate,
        grace_days: Option<i64>,
    ) -> Result<Vec<Document>, Box<dyn Error>> {
        let grace = match grace_days {
            Some(days) => days,
            None => self.config.get_expiry_grace_days().await?,
        };
        let limit = deadline + Duration::days(grace);

        Ok(documents
            .iter()
            .filter(|doc| match doc.expiration_date {
                Some(expiration) => expiration > today && expiration <= limit,
                None => false,
            })
            .cloned()
            .collect())
    }
}
