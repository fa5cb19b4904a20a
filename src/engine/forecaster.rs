// ==========================================
// Concurso Radar - forecaster AR(1) de primeira diferença
// ==========================================
// O legado chamava este modelo de "ARIMA(1,1,0)"; na prática é um
// AR(1) sobre os incrementos diários (primeira diferença), com busca
// linear limitada para projeção multi-passo. O nome aqui reflete o
// que o modelo realmente é.
// ==========================================
// Algoritmo:
// - d_t = cumulative_t − cumulative_{t−1}
// - φ ajustado por mínimos quadrados sobre pares consecutivos
// - previsão de 1 passo: φ·d_n; se ≤ 0, média dos últimos
//   min(5, disponíveis) incrementos
// - projeção de h passos: d_n·φ·(1−φ^h)/(1−φ), ou h·d_n quando φ = 1
// - busca h = 1.. até alcançar o alvo, com teto de 1000 iterações
//   para garantir término (φ ≤ 0 pode deixar a projeção plana).
//   A busca é linear de propósito: a fórmula da série geométrica não é
//   monotônica nem inversível em forma fechada nos casos de borda.
// ==========================================

use crate::domain::CallDay;

/// Teto da busca multi-passo
pub const MAX_HORIZON: i64 = 1000;

/// Tolerância para tratar φ como 1 (denominador singular)
const PHI_ONE_EPS: f64 = 1e-9;

// ==========================================
// DiffAr1Forecaster
// ==========================================
#[derive(Debug, Clone)]
pub struct DiffAr1Forecaster {
    increments: Vec<f64>,
    phi: f64,
    last_cumulative: f64,
}

impl DiffAr1Forecaster {
    /// Ajusta o modelo sobre a série agregada
    ///
    /// # Retorno
    /// - None quando há menos de 3 pontos (menos de 2 incrementos):
    ///   dados insuficientes não são erro, são ausência de previsão.
    pub fn fit(series: &[CallDay]) -> Option<Self> {
        if series.len() < 3 {
            return None;
        }

        let increments: Vec<f64> = series
            .windows(2)
            .map(|pair| pair[1].cumulative_total as f64 - pair[0].cumulative_total as f64)
            .collect();

        // d_t ≈ φ·d_{t−1} por mínimos quadrados pela origem
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for pair in increments.windows(2) {
            numerator += pair[1] * pair[0];
            denominator += pair[0] * pair[0];
        }
        let phi = if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        };

        Some(Self {
            increments,
            phi,
            last_cumulative: series.last()?.cumulative_total as f64,
        })
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Previsão do próximo incremento (1 passo)
    ///
    /// # Regra
    /// - φ·d_n; se não positivo, média dos últimos min(5, n) incrementos
    pub fn one_step_forecast(&self) -> f64 {
        let last = *self.increments.last().unwrap_or(&0.0);
        let forecast = self.phi * last;
        if forecast > 0.0 {
            return forecast;
        }
        let k = self.increments.len().min(5);
        let tail = &self.increments[self.increments.len() - k..];
        tail.iter().sum::<f64>() / k as f64
    }

    /// Soma dos incrementos previstos para h passos à frente
    ///
    /// # Regra
    /// - d_n·φ·(1−φ^h)/(1−φ); com φ = 1 usa h·d_n (denominador singular)
    pub fn cumulative_forecast(&self, horizon: i64) -> f64 {
        let last = *self.increments.last().unwrap_or(&0.0);
        if (self.phi - 1.0).abs() < PHI_ONE_EPS {
            return horizon as f64 * last;
        }
        last * self.phi * (1.0 - self.phi.powi(horizon as i32)) / (1.0 - self.phi)
    }

    /// Dias úteis projetados até o acumulado alcançar o alvo
    ///
    /// # Regra
    /// - Busca linear h = 1..=1000; estourar o teto devolve o último h,
    ///   não um erro (melhor estimativa encontrada).
    pub fn business_days_to_reach(&self, target: f64) -> i64 {
        if self.last_cumulative >= target {
            return 0;
        }
        let mut horizon = 1;
        while horizon < MAX_HORIZON {
            if self.last_cumulative + self.cumulative_forecast(horizon) >= target {
                return horizon;
            }
            horizon += 1;
        }
        MAX_HORIZON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series_from_cumulative(values: &[u32]) -> Vec<CallDay> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut previous = 0;
        values
            .iter()
            .enumerate()
            .map(|(i, &cumulative_total)| {
                let called = cumulative_total - previous;
                previous = cumulative_total;
                CallDay {
                    date: start + chrono::Duration::days(i as i64),
                    called_that_day: called,
                    cumulative_total,
                }
            })
            .collect()
    }

    #[test]
    fn test_fit_requires_three_points() {
        assert!(DiffAr1Forecaster::fit(&[]).is_none());
        assert!(DiffAr1Forecaster::fit(&series_from_cumulative(&[1, 2])).is_none());
        assert!(DiffAr1Forecaster::fit(&series_from_cumulative(&[1, 2, 3])).is_some());
    }

    #[test]
    fn test_phi_one_for_constant_increments() {
        // incrementos constantes (2,2,2,2) → φ = 1
        let model = DiffAr1Forecaster::fit(&series_from_cumulative(&[2, 4, 6, 8, 10])).unwrap();
        assert!((model.phi() - 1.0).abs() < 1e-9);
        // com φ = 1 a projeção é h·d_n
        assert!((model.cumulative_forecast(5) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_step_fallback_to_tail_mean() {
        // último incremento 0 → previsão φ·0 = 0, cai na média da cauda
        let model = DiffAr1Forecaster::fit(&series_from_cumulative(&[2, 4, 6, 6])).unwrap();
        let forecast = model.one_step_forecast();
        // incrementos: 2, 2, 0 → média dos últimos 3 = 4/3
        assert!((forecast - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_business_days_to_reach_linear() {
        // 2 por dia, acumulado 10; alvo 20 → 5 passos
        let model = DiffAr1Forecaster::fit(&series_from_cumulative(&[2, 4, 6, 8, 10])).unwrap();
        assert_eq!(model.business_days_to_reach(20.0), 5);
        assert_eq!(model.business_days_to_reach(10.0), 0);
        assert_eq!(model.business_days_to_reach(3.0), 0);
    }

    #[test]
    fn test_search_caps_at_1000() {
        // último incremento zero deixa a projeção geométrica plana
        let model = DiffAr1Forecaster::fit(&series_from_cumulative(&[10, 16, 17, 22, 22])).unwrap();
        let horizon = model.business_days_to_reach(1_000_000.0);
        assert_eq!(horizon, MAX_HORIZON);
    }
}
