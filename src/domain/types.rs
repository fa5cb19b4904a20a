// ==========================================
// Concurso Radar - tipos de domínio
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Situação do candidato na classificação
// ==========================================
// Transições na prática são unidirecionais
// (classificado → convocado → nomeado, ou classificado → desistente/eliminado),
// mas o sistema não impõe monotonicidade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CandidateStatus {
    Classified, // classificado, aguardando chamada
    Called,     // convocado
    Withdrawn,  // desistente
    Eliminated, // eliminado
    Appointed,  // nomeado
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl CandidateStatus {
    /// Constrói a partir de string (valor desconhecido vira Classified)
    pub fn from_db_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "CALLED" => CandidateStatus::Called,
            "WITHDRAWN" => CandidateStatus::Withdrawn,
            "ELIMINATED" => CandidateStatus::Eliminated,
            "APPOINTED" => CandidateStatus::Appointed,
            _ => CandidateStatus::Classified,
        }
    }

    /// String para persistência
    pub fn to_db_str(&self) -> &'static str {
        match self {
            CandidateStatus::Classified => "CLASSIFIED",
            CandidateStatus::Called => "CALLED",
            CandidateStatus::Withdrawn => "WITHDRAWN",
            CandidateStatus::Eliminated => "ELIMINATED",
            CandidateStatus::Appointed => "APPOINTED",
        }
    }

    /// O candidato já foi alcançado pela fila de convocação?
    pub fn counts_as_called(&self) -> bool {
        matches!(self, CandidateStatus::Called | CandidateStatus::Appointed)
    }
}

// ==========================================
// Nível de confiança da previsão
// ==========================================
// Rótulo qualitativo: quanto histórico sustenta a previsão.
// Política canônica única (ver PredictionEngine):
// High ⇔ ≥5 datas com chamada e taxa > 0; Medium ⇔ >2 datas e taxa > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceTier::Low => write!(f, "LOW"),
            ConfidenceTier::Medium => write!(f, "MEDIUM"),
            ConfidenceTier::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// Tipo do documento (variante explícita)
// ==========================================
// O legado ramificava nas strings de nome do documento; aqui o tipo é
// resolvido uma única vez na criação/renomeação, via tabela de nomes
// (ver domain::document::kind_for_name), e o engine de regras casa
// somente sobre esta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    Generic,              // documento comum: link + não vencido
    VaccineHepB,          // vacina Hepatite B (3 doses, 1/6 meses)
    VaccineMmr,           // vacina Tríplice Viral (doses por faixa etária)
    VaccineDt,            // vacina DT (3 doses, 60 dias, reforço decenal)
    StateRegistration,    // certidão por estado (link + data por UF)
    NotarizedDeclaration, // declaração com firma reconhecida
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl DocumentKind {
    pub fn from_db_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "VACCINE_HEP_B" => DocumentKind::VaccineHepB,
            "VACCINE_MMR" => DocumentKind::VaccineMmr,
            "VACCINE_DT" => DocumentKind::VaccineDt,
            "STATE_REGISTRATION" => DocumentKind::StateRegistration,
            "NOTARIZED_DECLARATION" => DocumentKind::NotarizedDeclaration,
            _ => DocumentKind::Generic,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            DocumentKind::Generic => "GENERIC",
            DocumentKind::VaccineHepB => "VACCINE_HEP_B",
            DocumentKind::VaccineMmr => "VACCINE_MMR",
            DocumentKind::VaccineDt => "VACCINE_DT",
            DocumentKind::StateRegistration => "STATE_REGISTRATION",
            DocumentKind::NotarizedDeclaration => "NOTARIZED_DECLARATION",
        }
    }

    pub fn is_vaccine(&self) -> bool {
        matches!(
            self,
            DocumentKind::VaccineHepB | DocumentKind::VaccineMmr | DocumentKind::VaccineDt
        )
    }
}

// ==========================================
// Prazo de validade do documento
// ==========================================
// expiration_date é sempre derivada de issue_date + validity_period;
// nunca é informada diretamente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidityPeriod {
    None,
    Days30,
    Days90,
    Months3,
    Years1,
    Years5,
    Years10,
}

impl fmt::Display for ValidityPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl ValidityPeriod {
    pub fn from_db_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "DAYS_30" => ValidityPeriod::Days30,
            "DAYS_90" => ValidityPeriod::Days90,
            "MONTHS_3" => ValidityPeriod::Months3,
            "YEARS_1" => ValidityPeriod::Years1,
            "YEARS_5" => ValidityPeriod::Years5,
            "YEARS_10" => ValidityPeriod::Years10,
            _ => ValidityPeriod::None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            ValidityPeriod::None => "NONE",
            ValidityPeriod::Days30 => "DAYS_30",
            ValidityPeriod::Days90 => "DAYS_90",
            ValidityPeriod::Months3 => "MONTHS_3",
            ValidityPeriod::Years1 => "YEARS_1",
            ValidityPeriod::Years5 => "YEARS_5",
            ValidityPeriod::Years10 => "YEARS_10",
        }
    }

    /// Data de vencimento a partir da data de emissão
    pub fn expiration_from(&self, issue_date: chrono::NaiveDate) -> Option<chrono::NaiveDate> {
        use chrono::{Duration, Months};
        match self {
            ValidityPeriod::None => None,
            ValidityPeriod::Days30 => Some(issue_date + Duration::days(30)),
            ValidityPeriod::Days90 => Some(issue_date + Duration::days(90)),
            ValidityPeriod::Months3 => issue_date.checked_add_months(Months::new(3)),
            ValidityPeriod::Years1 => issue_date.checked_add_months(Months::new(12)),
            ValidityPeriod::Years5 => issue_date.checked_add_months(Months::new(60)),
            ValidityPeriod::Years10 => issue_date.checked_add_months(Months::new(120)),
        }
    }
}
