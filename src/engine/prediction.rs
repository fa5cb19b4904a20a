// ==========================================
// Concurso Radar - engine de previsão de chamada
// ==========================================
// Combina os estimadores de taxa em uma data prevista de convocação
// para uma posição, com confiança e cenários.
// Não escreve em banco: recebe snapshots em memória e retorna.
// ==========================================
// Passos:
// 1. maior posição chamada (CALLED/APPOINTED)
// 2. remaining = position − highest; ≤ 0 → já alcançado
// 3. sem série de chamadas → previsão nula, confiança baixa,
//    remaining = position − 1 (fallback reproduzido do legado)
// 4. taxa dinâmica → dias por cenário → datas via dias úteis
// 5. confiança: política canônica única (High ≥5 datas, Medium >2)
// ==========================================

use crate::config::PredictionConfigReader;
use crate::domain::{
    highest_called_position, Candidate, ConvocationEvent, PredictionResult, RateBreakdown,
    Scenario, ScenarioRange,
};
use crate::domain::types::ConfidenceTier;
use crate::engine::calendar::add_business_days;
use crate::engine::{CallSeriesAggregator, DiffAr1Forecaster, RateEstimator};
use chrono::NaiveDate;
use std::error::Error;
use std::sync::Arc;
use tracing::instrument;

// ==========================================
// PredictionEngine
// ==========================================
pub struct PredictionEngine<C>
where
    C: PredictionConfigReader,
{
    config: Arc<C>,
}

impl<C> PredictionEngine<C>
where
    C: PredictionConfigReader,
{
    /// Cria o engine com um leitor de configuração de previsão
    pub fn new(config: Arc<C>) -> Self {
        Self { config }
    }

    /// Prevê a data de chamada de uma posição
    ///
    /// # Parâmetros
    /// - candidates: snapshot dos candidatos do concurso
    /// - events: snapshot dos eventos de convocação
    /// - position: posição alvo na classificação
    /// - today: data de referência
    #[instrument(skip(self, candidates, events), fields(position = position))]
    pub async fn predict(
        &self,
        candidates: &[Candidate],
        events: &[ConvocationEvent],
        position: i64,
        today: NaiveDate,
    ) -> Result<PredictionResult, Box<dyn Error>> {
        // === Passo 1: posição mais alta já chamada ===
        let highest = highest_called_position(candidates);

        // === Passo 2: posição já alcançada ===
        let remaining = position - highest;
        if remaining <= 0 {
            return Ok(PredictionResult::already_reached(today));
        }

        // === Passo 3: série agregada ===
        let series = CallSeriesAggregator::aggregate(events);
        if series.is_empty() {
            // sem histórico algum: fallback do legado (position − 1),
            // que confunde "sem dados" com "ninguém chamado" — mantido
            // deliberadamente até decisão de produto em contrário
            return Ok(PredictionResult::insufficient_data(position - 1));
        }

        // === Passo 4: estimadores de taxa ===
        let short_window = self.config.get_short_window_days().await?;
        let long_window = self.config.get_long_window_days().await?;
        let weight_short = self.config.get_short_window_weight().await?;
        let floor = self.config.get_min_rate_floor().await?;

        let overall = RateEstimator::overall_slope(&series);
        let last_30 = RateEstimator::windowed_average(&series, today, short_window);
        let last_90 = RateEstimator::windowed_average(&series, today, long_window);
        let dynamic = RateEstimator::dynamic_rate(overall, last_30, last_90, weight_short, floor);

        // === Passo 5: cenários ===
        // o piso vale para os três cenários, preservando a ordem
        // otimista ≤ realista ≤ pessimista
        let pessimistic_factor = self.config.get_pessimistic_factor().await?;
        let optimistic_factor = self.config.get_optimistic_factor().await?;
        let effective_rate = dynamic.max(floor);

        let realistic_days = Self::days_for_rate(remaining, effective_rate);
        let pessimistic_days = Self::days_for_rate(remaining, effective_rate * pessimistic_factor);
        let optimistic_days = Self::days_for_rate(remaining, effective_rate * optimistic_factor);

        // base de projeção: último evento com chamada, se estiver no
        // futuro em relação a hoje; caso contrário, hoje
        let last_call_date = series.last().map(|day| day.date).unwrap_or(today);
        let base_date = if last_call_date > today {
            last_call_date
        } else {
            today
        };

        let scenarios = ScenarioRange {
            pessimistic: Scenario {
                date: add_business_days(base_date, pessimistic_days),
                business_days: pessimistic_days,
            },
            realistic: Scenario {
                date: add_business_days(base_date, realistic_days),
                business_days: realistic_days,
            },
            optimistic: Scenario {
                date: add_business_days(base_date, optimistic_days),
                business_days: optimistic_days,
            },
        };

        // === Passo 6: projeção alternativa AR(1) de primeira diferença ===
        let target_cumulative =
            series.last().map(|d| d.cumulative_total as f64).unwrap_or(0.0) + remaining as f64;
        let diff_ar1_days = DiffAr1Forecaster::fit(&series)
            .map(|model| model.business_days_to_reach(target_cumulative));

        // === Passo 7: confiança ===
        let confidence = self.classify_confidence(series.len(), dynamic).await?;

        Ok(PredictionResult {
            predicted_date: Some(scenarios.realistic.date),
            estimated_business_days: realistic_days,
            diff_ar1_days,
            rates: RateBreakdown {
                overall: RateEstimator::round2(overall),
                last_30: RateEstimator::round2(last_30),
                last_90: RateEstimator::round2(last_90),
                dynamic: RateEstimator::round2(dynamic),
            },
            remaining_calls: remaining,
            confidence,
            scenarios: Some(scenarios),
        })
    }

    /// ceil(remaining / rate), com taxa já garantidamente positiva
    fn days_for_rate(remaining: i64, rate: f64) -> i64 {
        (remaining as f64 / rate).ceil() as i64
    }

    /// Política canônica de confiança
    ///
    /// O legado tinha dois conjuntos de limiares divergentes entre os
    /// caminhos de média e de forecaster; aqui vale um só, uniforme.
    async fn classify_confidence(
        &self,
        call_dates: usize,
        dynamic_rate: f64,
    ) -> Result<ConfidenceTier, Box<dyn Error>> {
        let high_min = self.config.get_high_confidence_min_dates().await?;
        let medium_min = self.config.get_medium_confidence_min_dates().await?;

        if call_dates >= high_min && dynamic_rate > 0.0 {
            Ok(ConfidenceTier::High)
        } else if call_dates > medium_min && dynamic_rate > 0.0 {
            Ok(ConfidenceTier::Medium)
        } else {
            Ok(ConfidenceTier::Low)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CandidateStatus;
    use async_trait::async_trait;

    // ==========================================
    // Mock PredictionConfigReader
    // ==========================================
    struct MockPredictionConfig;

    #[async_trait]
    impl PredictionConfigReader for MockPredictionConfig {
        async fn get_short_window_days(&self) -> Result<i64, Box<dyn Error>> {
            Ok(30)
        }
        async fn get_long_window_days(&self) -> Result<i64, Box<dyn Error>> {
            Ok(90)
        }
        async fn get_short_window_weight(&self) -> Result<f64, Box<dyn Error>> {
            Ok(0.7)
        }
        async fn get_min_rate_floor(&self) -> Result<f64, Box<dyn Error>> {
            Ok(0.1)
        }
        async fn get_pessimistic_factor(&self) -> Result<f64, Box<dyn Error>> {
            Ok(0.6)
        }
        async fn get_optimistic_factor(&self) -> Result<f64, Box<dyn Error>> {
            Ok(1.5)
        }
        async fn get_high_confidence_min_dates(&self) -> Result<usize, Box<dyn Error>> {
            Ok(5)
        }
        async fn get_medium_confidence_min_dates(&self) -> Result<usize, Box<dyn Error>> {
            Ok(2)
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn called_candidate(position: i64) -> Candidate {
        let mut c = Candidate::new("pref-sp-2024", &format!("cand-{position}"), position);
        c.status = CandidateStatus::Called;
        c
    }

    fn event(date: NaiveDate, count: usize) -> ConvocationEvent {
        let ids = (0..count).map(|i| format!("id-{i}")).collect();
        ConvocationEvent::with_calls("pref-sp-2024", date, ids)
    }

    fn engine() -> PredictionEngine<MockPredictionConfig> {
        PredictionEngine::new(Arc::new(MockPredictionConfig))
    }

    #[tokio::test]
    async fn test_already_reached_position() {
        let engine = engine();
        let today = d(2024, 6, 3);
        let candidates = vec![called_candidate(10)];
        let events = vec![event(d(2024, 5, 1), 10)];

        let result = engine.predict(&candidates, &events, 8, today).await.unwrap();
        assert_eq!(result.remaining_calls, 0);
        assert_eq!(result.predicted_date, Some(today));
        assert_eq!(result.confidence, ConfidenceTier::High);
        let scenarios = result.scenarios.unwrap();
        assert_eq!(scenarios.realistic.date, today);
        assert_eq!(scenarios.realistic.business_days, 0);
    }

    #[tokio::test]
    async fn test_no_history_gives_null_prediction() {
        let engine = engine();
        let result = engine
            .predict(&[], &[], 40, d(2024, 6, 3))
            .await
            .unwrap();
        assert_eq!(result.predicted_date, None);
        assert_eq!(result.confidence, ConfidenceTier::Low);
        // fallback do legado: position − 1
        assert_eq!(result.remaining_calls, 39);
        assert!(result.scenarios.is_none());
    }

    #[tokio::test]
    async fn test_concrete_three_event_scenario() {
        // eventos em 2024-01-01 (2), 2024-01-15 (3), 2024-02-01 (5);
        // maior posição chamada = 10; alvo = 20
        let engine = engine();
        let today = d(2024, 2, 5);
        let candidates = vec![called_candidate(10)];
        let events = vec![
            event(d(2024, 1, 1), 2),
            event(d(2024, 1, 15), 3),
            event(d(2024, 2, 1), 5),
        ];

        let result = engine
            .predict(&candidates, &events, 20, today)
            .await
            .unwrap();
        assert_eq!(result.remaining_calls, 10);
        let predicted = result.predicted_date.unwrap();
        assert!(predicted > d(2024, 2, 1));
        // menos de 5 datas distintas: nunca High
        assert!(matches!(
            result.confidence,
            ConfidenceTier::Low | ConfidenceTier::Medium
        ));
    }

    #[tokio::test]
    async fn test_scenario_ordering() {
        let engine = engine();
        let today = d(2024, 6, 3);
        let candidates = vec![called_candidate(5)];
        let events = vec![
            event(d(2024, 5, 6), 2),
            event(d(2024, 5, 13), 1),
            event(d(2024, 5, 20), 2),
        ];

        let result = engine
            .predict(&candidates, &events, 30, today)
            .await
            .unwrap();
        let scenarios = result.scenarios.unwrap();
        assert!(scenarios.optimistic.business_days <= scenarios.realistic.business_days);
        assert!(scenarios.realistic.business_days <= scenarios.pessimistic.business_days);
        assert!(scenarios.optimistic.date <= scenarios.realistic.date);
        assert!(scenarios.realistic.date <= scenarios.pessimistic.date);
    }

    #[tokio::test]
    async fn test_high_confidence_with_five_dates() {
        let engine = engine();
        let today = d(2024, 3, 4);
        let candidates = vec![called_candidate(10)];
        let events = vec![
            event(d(2024, 2, 5), 2),
            event(d(2024, 2, 12), 2),
            event(d(2024, 2, 19), 2),
            event(d(2024, 2, 26), 2),
            event(d(2024, 3, 4), 2),
        ];

        let result = engine
            .predict(&candidates, &events, 25, today)
            .await
            .unwrap();
        assert_eq!(result.confidence, ConfidenceTier::High);
        assert!(result.rates.dynamic > 0.0);
        assert!(result.diff_ar1_days.is_some());
    }

    #[tokio::test]
    async fn test_future_event_becomes_projection_base() {
        // convocação já publicada para data futura: base da projeção
        let engine = engine();
        let today = d(2024, 5, 31);
        let candidates = vec![called_candidate(4)];
        let future = d(2024, 6, 10);
        let events = vec![
            event(d(2024, 5, 20), 2),
            event(d(2024, 5, 27), 2),
            event(future, 2),
        ];

        let result = engine
            .predict(&candidates, &events, 10, today)
            .await
            .unwrap();
        let scenarios = result.scenarios.unwrap();
        assert!(scenarios.optimistic.date > future);
    }
}
