// ==========================================
// Concurso Radar - calendário de dias úteis
// ==========================================
// Dia útil = segunda a sexta; feriados não são modelados.
// As contagens são laços dia a dia, não fórmulas fechadas, para que
// semanas parciais sejam tratadas corretamente.
// ==========================================

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Dia útil (segunda a sexta)?
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Dias úteis estritamente entre duas datas
///
/// # Regra
/// - Itera da data anterior até a posterior, um dia por vez,
///   contando cada dia útil encontrado.
/// - Datas invertidas ou iguais retornam 0.
pub fn business_days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    if later <= earlier {
        return 0;
    }
    let mut count = 0;
    let mut current = earlier;
    while current < later {
        current += Duration::days(1);
        if is_business_day(current) {
            count += 1;
        }
    }
    count
}

/// Avança uma data em n dias úteis, pulando fins de semana
pub fn add_business_days(date: NaiveDate, n: i64) -> NaiveDate {
    let mut remaining = n;
    let mut current = date;
    while remaining > 0 {
        current += Duration::days(1);
        if is_business_day(current) {
            remaining -= 1;
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_is_business_day() {
        assert!(is_business_day(d(2024, 1, 1))); // segunda
        assert!(is_business_day(d(2024, 1, 5))); // sexta
        assert!(!is_business_day(d(2024, 1, 6))); // sábado
        assert!(!is_business_day(d(2024, 1, 7))); // domingo
    }

    #[test]
    fn test_business_days_between_same_week() {
        // seg 2024-01-01 a sex 2024-01-05: ter, qua, qui, sex = 4
        assert_eq!(business_days_between(d(2024, 1, 5), d(2024, 1, 1)), 4);
    }

    #[test]
    fn test_business_days_between_across_weekend() {
        // sex 2024-01-05 a seg 2024-01-08: apenas a segunda = 1
        assert_eq!(business_days_between(d(2024, 1, 8), d(2024, 1, 5)), 1);
    }

    #[test]
    fn test_business_days_between_degenerate() {
        assert_eq!(business_days_between(d(2024, 1, 1), d(2024, 1, 1)), 0);
        assert_eq!(business_days_between(d(2024, 1, 1), d(2024, 1, 8)), 0);
    }

    #[test]
    fn test_add_business_days_skips_weekend() {
        // qui 2024-01-04 + 2 dias úteis = seg 2024-01-08
        assert_eq!(add_business_days(d(2024, 1, 4), 2), d(2024, 1, 8));
        assert_eq!(add_business_days(d(2024, 1, 4), 0), d(2024, 1, 4));
    }

    #[test]
    fn test_round_trip_add_then_between() {
        // add_business_days seguido de business_days_between devolve n
        for start_day in 1..=14 {
            let start = d(2024, 1, start_day);
            for n in 0..25 {
                let end = add_business_days(start, n);
                assert_eq!(business_days_between(end, start), n, "start={start} n={n}");
            }
        }
    }
}
