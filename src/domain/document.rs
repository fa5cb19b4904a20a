// ==========================================
// Concurso Radar - modelo de documento
// ==========================================
// Alinhado à tabela document
// ==========================================
// O tipo (DocumentKind) é resolvido na criação/renomeação a partir do
// nome de exibição, via tabela DEFAULT_DOCUMENTS; o engine de regras
// nunca ramifica sobre strings de nome.
// ==========================================

use crate::domain::types::{DocumentKind, ValidityPeriod};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

// ==========================================
// Checklist padrão de posse
// ==========================================
// Semeado no primeiro acesso de cada concurso.
pub const DEFAULT_DOCUMENTS: &[(&str, DocumentKind)] = &[
    ("RG", DocumentKind::Generic),
    ("CPF", DocumentKind::Generic),
    ("Título de Eleitor", DocumentKind::Generic),
    ("Certidão de Quitação Eleitoral", DocumentKind::Generic),
    ("Certificado de Reservista", DocumentKind::Generic),
    ("Comprovante de Residência", DocumentKind::Generic),
    ("Certidão de Nascimento ou Casamento", DocumentKind::Generic),
    ("Diploma de Graduação", DocumentKind::Generic),
    ("Histórico Escolar", DocumentKind::Generic),
    ("Carteira de Trabalho", DocumentKind::Generic),
    ("PIS/PASEP", DocumentKind::Generic),
    ("Foto 3x4", DocumentKind::Generic),
    ("Certidão Negativa Criminal", DocumentKind::Generic),
    ("Certidão Negativa Cível", DocumentKind::Generic),
    ("Atestado de Saúde Ocupacional", DocumentKind::Generic),
    (
        "Certidão Negativa Ético-Disciplinar do Conselho",
        DocumentKind::StateRegistration,
    ),
    (
        "Comprovante de Regularidade no Conselho de Classe",
        DocumentKind::StateRegistration,
    ),
    ("Vacina Hepatite B", DocumentKind::VaccineHepB),
    ("Vacina DT", DocumentKind::VaccineDt),
    ("Vacina Tríplice Viral", DocumentKind::VaccineMmr),
    (
        "Declaração de Não Acúmulo de Cargos",
        DocumentKind::NotarizedDeclaration,
    ),
    (
        "Declaração de Bens e Valores",
        DocumentKind::NotarizedDeclaration,
    ),
    (
        "Declaração de Não Penalidades Disciplinares",
        DocumentKind::NotarizedDeclaration,
    ),
];

/// Resolve o tipo de um documento a partir do nome de exibição
///
/// Nomes fora da tabela caem na regra genérica.
pub fn kind_for_name(name: &str) -> DocumentKind {
    DEFAULT_DOCUMENTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, k)| *k)
        .unwrap_or(DocumentKind::Generic)
}

// ==========================================
// Document - item do checklist
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    // ===== Chave =====
    pub id: String,
    pub competition_id: String,

    // ===== Identificação =====
    pub name: String,
    pub kind: DocumentKind,

    // ===== Situação física =====
    pub has_document: bool,
    pub has_physical_copy: bool,
    pub has_notarized_copy: bool,

    // ===== Referência digital =====
    pub drive_link: Option<String>,

    // ===== Validade =====
    pub validity_period: ValidityPeriod,
    pub issue_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>, // sempre derivada; nunca digitada

    // ===== Campos de vacina =====
    pub vaccine_doses: Vec<NaiveDate>, // datas de dose, em ordem
    pub user_age: Option<u32>,         // só a Tríplice Viral usa

    // ===== Campos de certidão estadual =====
    pub states: Vec<String>, // UFs selecionadas
    pub state_links: HashMap<String, String>,
    pub state_issue_dates: HashMap<String, NaiveDate>,
    pub state_expiration_dates: HashMap<String, NaiveDate>,

    // ===== Auditoria =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Cria um documento vazio; o tipo é resolvido pelo nome
    pub fn new(competition_id: &str, name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            competition_id: competition_id.to_string(),
            name: name.to_string(),
            kind: kind_for_name(name),
            has_document: false,
            has_physical_copy: false,
            has_notarized_copy: false,
            drive_link: None,
            validity_period: ValidityPeriod::None,
            issue_date: None,
            expiration_date: None,
            vaccine_doses: Vec::new(),
            user_age: None,
            states: Vec::new(),
            state_links: HashMap::new(),
            state_issue_dates: HashMap::new(),
            state_expiration_dates: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rederiva expiration_date a partir de issue_date + validity_period
    ///
    /// Deve ser chamada após qualquer alteração de emissão/validade.
    pub fn refresh_expiration(&mut self) {
        self.expiration_date = self
            .issue_date
            .and_then(|issue| self.validity_period.expiration_from(issue));
    }

    /// Rederiva o tipo após renomeação
    pub fn refresh_kind(&mut self) {
        self.kind = kind_for_name(&self.name);
    }
}

// ==========================================
// DocumentStatus - avaliação de um documento
// ==========================================
// Saída do DocumentEligibilityEngine, com razões explicativas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub complete: bool,
    pub expired: bool,
    pub vaccine_problem: bool,
    pub reasons: Vec<String>,
}

// ==========================================
// DocumentSummary - agregado do checklist
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub total: usize,
    pub completed: usize,
    pub expired: usize,
    pub missing: usize,
    pub vaccine_problem: usize,
    pub percentage: u32, // round(100 * completed / total); 0 quando total = 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for_name_table() {
        assert_eq!(kind_for_name("Vacina DT"), DocumentKind::VaccineDt);
        assert_eq!(kind_for_name("Vacina Hepatite B"), DocumentKind::VaccineHepB);
        assert_eq!(kind_for_name("Vacina Tríplice Viral"), DocumentKind::VaccineMmr);
        assert_eq!(
            kind_for_name("Certidão Negativa Ético-Disciplinar do Conselho"),
            DocumentKind::StateRegistration
        );
        assert_eq!(
            kind_for_name("Declaração de Bens e Valores"),
            DocumentKind::NotarizedDeclaration
        );
        assert_eq!(kind_for_name("RG"), DocumentKind::Generic);
        // nome desconhecido cai na regra genérica
        assert_eq!(kind_for_name("Qualquer Outro"), DocumentKind::Generic);
    }

    #[test]
    fn test_refresh_expiration_derives_from_issue() {
        let mut doc = Document::new("pref-sp-2024", "Certidão Negativa Criminal");
        doc.issue_date = chrono::NaiveDate::from_ymd_opt(2024, 3, 1);
        doc.validity_period = ValidityPeriod::Days90;
        doc.refresh_expiration();
        assert_eq!(
            doc.expiration_date,
            chrono::NaiveDate::from_ymd_opt(2024, 5, 30)
        );

        // sem emissão, não há vencimento
        doc.issue_date = None;
        doc.refresh_expiration();
        assert_eq!(doc.expiration_date, None);
    }

    #[test]
    fn test_default_checklist_size() {
        assert_eq!(DEFAULT_DOCUMENTS.len(), 23);
        let vaccines = DEFAULT_DOCUMENTS
            .iter()
            .filter(|(_, k)| k.is_vaccine())
            .count();
        assert_eq!(vaccines, 3);
    }
}
