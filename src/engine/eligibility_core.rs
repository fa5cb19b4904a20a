// ==========================================
// Concurso Radar - Eligibility Core (funções puras)
// ==========================================
// Predicados de completude/validade documental.
// Sem estado, sem efeitos, sem I/O. Total sobre o domínio de entrada:
// campo faltante significa "requisito não atendido", nunca erro.
// ==========================================

use crate::domain::Document;
use chrono::{Duration, Months, NaiveDate};
use std::collections::HashMap;

// ==========================================
// EligibilityCore
// ==========================================
pub struct EligibilityCore;

impl EligibilityCore {
    /// Documento vencido?
    ///
    /// # Regra
    /// - Vencido ⇔ tem expiration_date e ela não está estritamente
    ///   no futuro. Documento vencido nunca é completo.
    pub fn is_expired(expiration_date: Option<NaiveDate>, today: NaiveDate) -> bool {
        match expiration_date {
            Some(expiration) => expiration <= today,
            None => false,
        }
    }

    /// Documento genérico: precisa de link de referência não vazio
    pub fn has_reference_link(drive_link: Option<&str>) -> bool {
        drive_link.map(|l| !l.trim().is_empty()).unwrap_or(false)
    }

    /// Certidão estadual: ao menos uma UF, e toda UF selecionada com
    /// link e data de emissão registrados
    pub fn state_registration_complete(
        states: &[String],
        state_links: &HashMap<String, String>,
        state_issue_dates: &HashMap<String, NaiveDate>,
    ) -> bool {
        if states.is_empty() {
            return false;
        }
        states.iter().all(|uf| {
            state_links
                .get(uf)
                .map(|l| !l.trim().is_empty())
                .unwrap_or(false)
                && state_issue_dates.contains_key(uf)
        })
    }

    /// Esquema da Hepatite B
    ///
    /// # Regra
    /// - Exatamente 3 doses
    /// - 2ª dose ≥ second_dose_months meses (calendário) após a 1ª
    /// - 3ª dose ≥ third_dose_months meses após a 1ª
    pub fn hep_b_schedule_valid(
        doses: &[NaiveDate],
        second_dose_months: u32,
        third_dose_months: u32,
    ) -> bool {
        if doses.len() != 3 {
            return false;
        }
        let mut sorted = doses.to_vec();
        sorted.sort();

        let second_min = match sorted[0].checked_add_months(Months::new(second_dose_months)) {
            Some(date) => date,
            None => return false,
        };
        let third_min = match sorted[0].checked_add_months(Months::new(third_dose_months)) {
            Some(date) => date,
            None => return false,
        };
        sorted[1] >= second_min && sorted[2] >= third_min
    }

    /// Esquema da DT (difteria-tétano)
    ///
    /// # Regra
    /// - Pelo menos 3 doses
    /// - 2ª dose ≥ gap_days dias após a 1ª; 3ª ≥ gap_days após a 2ª
    /// - Reforço: dose mais recente há mais de booster_years anos
    ///   invalida o esquema, mesmo com as 3 doses originais em dia
    pub fn dt_schedule_valid(
        doses: &[NaiveDate],
        gap_days: i64,
        booster_years: u32,
        today: NaiveDate,
    ) -> bool {
        if doses.len() < 3 {
            return false;
        }
        let mut sorted = doses.to_vec();
        sorted.sort();

        if sorted[1] < sorted[0] + Duration::days(gap_days) {
            return false;
        }
        if sorted[2] < sorted[1] + Duration::days(gap_days) {
            return false;
        }

        // reforço decenal sobre a dose mais recente
        let booster_deadline = match today.checked_sub_months(Months::new(booster_years * 12)) {
            Some(date) => date,
            None => return false,
        };
        match sorted.last() {
            Some(most_recent) => *most_recent >= booster_deadline,
            None => false,
        }
    }

    /// Esquema da Tríplice Viral, por faixa etária
    ///
    /// # Regra
    /// - 20–29 anos: ≥ 2 doses
    /// - 30–59 anos: ≥ 1 dose
    /// - Demais idades: 0 doses exigidas
    /// - Idade ausente: não é possível determinar o requisito → false
    pub fn mmr_schedule_valid(doses: &[NaiveDate], user_age: Option<u32>) -> bool {
        match user_age {
            None => false,
            Some(20..=29) => doses.len() >= 2,
            Some(30..=59) => !doses.is_empty(),
            Some(_) => true,
        }
    }

    /// Esquema de vacina válido, despachado pela tag do documento
    ///
    /// Documentos que não são vacina retornam true (sem esquema a violar).
    pub fn vaccine_schedule_valid(
        doc: &Document,
        today: NaiveDate,
        dt_gap_days: i64,
        dt_booster_years: u32,
        hep_b_second_months: u32,
        hep_b_third_months: u32,
    ) -> bool {
        use crate::domain::types::DocumentKind;
        match doc.kind {
            DocumentKind::VaccineHepB => Self::hep_b_schedule_valid(
                &doc.vaccine_doses,
                hep_b_second_months,
                hep_b_third_months,
            ),
            DocumentKind::VaccineDt => {
                Self::dt_schedule_valid(&doc.vaccine_doses, dt_gap_days, dt_booster_years, today)
            }
            DocumentKind::VaccineMmr => Self::mmr_schedule_valid(&doc.vaccine_doses, doc.user_age),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_is_expired_boundaries() {
        let today = d(2024, 6, 15);
        assert!(EligibilityCore::is_expired(Some(d(2024, 6, 14)), today));
        // vencimento hoje não está estritamente no futuro
        assert!(EligibilityCore::is_expired(Some(d(2024, 6, 15)), today));
        assert!(!EligibilityCore::is_expired(Some(d(2024, 6, 16)), today));
        assert!(!EligibilityCore::is_expired(None, today));
    }

    #[test]
    fn test_has_reference_link() {
        assert!(EligibilityCore::has_reference_link(Some("https://drive/x")));
        assert!(!EligibilityCore::has_reference_link(Some("   ")));
        assert!(!EligibilityCore::has_reference_link(None));
    }

    #[test]
    fn test_state_registration_requires_all_states() {
        let states = vec!["SP".to_string(), "SC".to_string()];
        let mut links = HashMap::new();
        links.insert("SP".to_string(), "https://drive/sp".to_string());
        let mut issues = HashMap::new();
        issues.insert("SP".to_string(), d(2024, 1, 10));
        issues.insert("SC".to_string(), d(2024, 1, 12));

        // SC sem link → incompleto
        assert!(!EligibilityCore::state_registration_complete(
            &states, &links, &issues
        ));

        links.insert("SC".to_string(), "https://drive/sc".to_string());
        assert!(EligibilityCore::state_registration_complete(
            &states, &links, &issues
        ));

        // nenhuma UF selecionada → incompleto
        assert!(!EligibilityCore::state_registration_complete(
            &[],
            &links,
            &issues
        ));
    }

    #[test]
    fn test_hep_b_schedule() {
        // 2ª dose 1 mês depois, 3ª dose 6 meses depois
        let ok = vec![d(2023, 1, 10), d(2023, 2, 10), d(2023, 7, 10)];
        assert!(EligibilityCore::hep_b_schedule_valid(&ok, 1, 6));

        // 3ª dose cedo demais
        let early_third = vec![d(2023, 1, 10), d(2023, 2, 10), d(2023, 5, 1)];
        assert!(!EligibilityCore::hep_b_schedule_valid(&early_third, 1, 6));

        // exatamente 3 doses: 2 ou 4 falham
        assert!(!EligibilityCore::hep_b_schedule_valid(
            &[d(2023, 1, 10), d(2023, 2, 10)],
            1,
            6
        ));
        assert!(!EligibilityCore::hep_b_schedule_valid(
            &[d(2023, 1, 1), d(2023, 2, 1), d(2023, 7, 1), d(2023, 8, 1)],
            1,
            6
        ));
    }

    #[test]
    fn test_dt_schedule_gaps() {
        let today = d(2024, 6, 1);
        let ok = vec![d(2022, 1, 1), d(2022, 3, 15), d(2022, 6, 1)];
        assert!(EligibilityCore::dt_schedule_valid(&ok, 60, 10, today));

        // 2ª dose a 30 dias da 1ª
        let tight = vec![d(2022, 1, 1), d(2022, 1, 31), d(2022, 6, 1)];
        assert!(!EligibilityCore::dt_schedule_valid(&tight, 60, 10, today));
    }

    #[test]
    fn test_dt_booster_rule() {
        // esquema de 2020 satisfeito, mas cenário com "hoje" em 2035:
        // dose mais recente há mais de 10 anos → reforço pendente
        let doses = vec![d(2020, 1, 1), d(2020, 3, 15), d(2020, 6, 1)];
        assert!(EligibilityCore::dt_schedule_valid(
            &doses,
            60,
            10,
            d(2024, 6, 1)
        ));
        assert!(!EligibilityCore::dt_schedule_valid(
            &doses,
            60,
            10,
            d(2035, 1, 1)
        ));
    }

    #[test]
    fn test_mmr_age_bands() {
        let one = vec![d(2023, 1, 1)];
        let two = vec![d(2023, 1, 1), d(2023, 2, 1)];

        assert!(!EligibilityCore::mmr_schedule_valid(&one, Some(25)));
        assert!(EligibilityCore::mmr_schedule_valid(&two, Some(25)));
        assert!(EligibilityCore::mmr_schedule_valid(&one, Some(45)));
        assert!(!EligibilityCore::mmr_schedule_valid(&[], Some(45)));
        // fora das faixas: nada exigido
        assert!(EligibilityCore::mmr_schedule_valid(&[], Some(65)));
        assert!(EligibilityCore::mmr_schedule_valid(&[], Some(18)));
        // idade ausente: requisito indeterminável
        assert!(!EligibilityCore::mmr_schedule_valid(&two, None));
    }
}
