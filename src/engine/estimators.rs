// ==========================================
// Concurso Radar - estimadores de taxa de chamada
// ==========================================
// Operam sobre a série agregada expressa como pares
// (x = dias úteis desde o primeiro evento, y = total acumulado).
// Funções puras: sem estado, sem efeitos, sem I/O.
// ==========================================

use crate::domain::CallDay;
use crate::engine::calendar::business_days_between;
use chrono::NaiveDate;

// ==========================================
// RateEstimator - funções puras
// ==========================================
pub struct RateEstimator;

impl RateEstimator {
    /// Inclinação por mínimos quadrados de toda a série
    ///
    /// # Regra
    /// - slope = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)
    /// - Denominador zero (todos os x iguais ou série curta) → 0.
    ///
    /// Representa a taxa média de chamadas por dia útil no longo prazo.
    pub fn overall_slope(series: &[CallDay]) -> f64 {
        if series.len() < 2 {
            return 0.0;
        }
        let first_date = series[0].date;
        let n = series.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_x2 = 0.0;
        for day in series {
            let x = business_days_between(day.date, first_date) as f64;
            let y = day.cumulative_total as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_x2 += x * x;
        }
        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator == 0.0 {
            return 0.0;
        }
        (n * sum_xy - sum_x * sum_y) / denominator
    }

    /// Média de chamadas por dia útil em uma janela recente
    ///
    /// # Regra
    /// - Soma as chamadas das datas a até `window_days` dias úteis de hoje.
    /// - Divide pelos dias úteis efetivamente cobertos pela série,
    ///   limitado ao tamanho da janela e com piso 1 (evita divisão por zero).
    ///
    /// Reage mais rápido a tendências recentes do que a inclinação total.
    pub fn windowed_average(series: &[CallDay], today: NaiveDate, window_days: i64) -> f64 {
        let first = match series.first() {
            Some(day) => day,
            None => return 0.0,
        };

        let sum: u32 = series
            .iter()
            .filter(|day| business_days_between(today, day.date) <= window_days)
            .map(|day| day.called_that_day)
            .sum();

        let covered = business_days_between(today, first.date)
            .min(window_days)
            .max(1);

        sum as f64 / covered as f64
    }

    /// Mistura ponderada das janelas de 30 e 90 dias úteis
    ///
    /// # Regra
    /// - Ambas positivas → weight_short·last30 + (1−weight_short)·last90
    /// - Uma zerada → usa a outra
    /// - Ambas zeradas → max(inclinação total, floor)
    ///
    /// O piso (0.1 por padrão) existe apenas para evitar projeções
    /// infinitas ou absurdas quando não há atividade recente de chamada;
    /// é uma decisão de política, não uma constante estatística.
    pub fn dynamic_rate(
        overall: f64,
        last_30: f64,
        last_90: f64,
        weight_short: f64,
        floor: f64,
    ) -> f64 {
        if last_30 > 0.0 && last_90 > 0.0 {
            weight_short * last_30 + (1.0 - weight_short) * last_90
        } else if last_30 > 0.0 {
            last_30
        } else if last_90 > 0.0 {
            last_90
        } else {
            overall.max(floor)
        }
    }

    /// Arredonda para 2 casas decimais (valores exibidos)
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn series(entries: &[(NaiveDate, u32, u32)]) -> Vec<CallDay> {
        entries
            .iter()
            .map(|&(date, called_that_day, cumulative_total)| CallDay {
                date,
                called_that_day,
                cumulative_total,
            })
            .collect()
    }

    #[test]
    fn test_overall_slope_linear_series() {
        // 1 chamada por dia útil: seg a sex
        let s = series(&[
            (d(2024, 1, 1), 1, 1),
            (d(2024, 1, 2), 1, 2),
            (d(2024, 1, 3), 1, 3),
            (d(2024, 1, 4), 1, 4),
            (d(2024, 1, 5), 1, 5),
        ]);
        let slope = RateEstimator::overall_slope(&s);
        assert!((slope - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_slope_degenerate() {
        assert_eq!(RateEstimator::overall_slope(&[]), 0.0);
        // ponto único: sem variância em x
        let s = series(&[(d(2024, 1, 1), 3, 3)]);
        assert_eq!(RateEstimator::overall_slope(&s), 0.0);
    }

    #[test]
    fn test_windowed_average_filters_old_events() {
        let s = series(&[
            (d(2024, 1, 1), 10, 10),  // fora da janela de 30 a partir de jun
            (d(2024, 6, 3), 2, 12),
            (d(2024, 6, 10), 3, 15),
        ]);
        let today = d(2024, 6, 14);
        let avg30 = RateEstimator::windowed_average(&s, today, 30);
        // só os 5 de junho entram; cobertura limitada a 30 dias úteis
        assert!((avg30 - 5.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_windowed_average_short_coverage() {
        // série começou há 4 dias úteis: divide por 4, não por 30
        let s = series(&[(d(2024, 1, 1), 2, 2), (d(2024, 1, 3), 2, 4)]);
        let today = d(2024, 1, 5);
        let avg = RateEstimator::windowed_average(&s, today, 30);
        assert!((avg - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_windowed_average_floor_one() {
        // hoje = primeira data: cobertura 0 vira 1
        let s = series(&[(d(2024, 1, 1), 3, 3)]);
        let avg = RateEstimator::windowed_average(&s, d(2024, 1, 1), 30);
        assert!((avg - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_windowed_average_shift_forward_never_increases() {
        let s = series(&[
            (d(2024, 1, 2), 2, 2),
            (d(2024, 1, 9), 3, 5),
            (d(2024, 2, 6), 1, 6),
        ]);
        let mut today = d(2024, 2, 7);
        let mut previous_sum_estimate = f64::MAX;
        for _ in 0..60 {
            let avg = RateEstimator::windowed_average(&s, today, 30);
            let covered = business_days_between(today, s[0].date).min(30).max(1);
            let sum = avg * covered as f64;
            assert!(sum <= previous_sum_estimate + 1e-9);
            previous_sum_estimate = sum;
            today = crate::engine::calendar::add_business_days(today, 1);
        }
    }

    #[test]
    fn test_dynamic_rate_blend() {
        let rate = RateEstimator::dynamic_rate(0.5, 1.0, 2.0, 0.7, 0.1);
        assert!((rate - (0.7 + 0.6)).abs() < 1e-9);
    }

    #[test]
    fn test_dynamic_rate_fallbacks() {
        // só a janela longa tem sinal
        assert_eq!(RateEstimator::dynamic_rate(0.5, 0.0, 2.0, 0.7, 0.1), 2.0);
        // só a janela curta tem sinal
        assert_eq!(RateEstimator::dynamic_rate(0.5, 1.5, 0.0, 0.7, 0.1), 1.5);
        // ambas zeradas: inclinação total com piso
        assert_eq!(RateEstimator::dynamic_rate(0.5, 0.0, 0.0, 0.7, 0.1), 0.5);
        assert_eq!(RateEstimator::dynamic_rate(0.02, 0.0, 0.0, 0.7, 0.1), 0.1);
    }

    #[test]
    fn test_round2() {
        assert_eq!(RateEstimator::round2(0.123456), 0.12);
        assert_eq!(RateEstimator::round2(0.125), 0.13);
    }
}
