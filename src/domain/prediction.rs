// ==========================================
// Concurso Radar - resultado de previsão
// ==========================================
// Valores computados, não persistidos.
// ==========================================

use crate::domain::types::ConfidenceTier;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// RateBreakdown - taxas de chamada por dia útil
// ==========================================
// Todos os valores arredondados para 2 casas decimais.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateBreakdown {
    pub overall: f64,  // inclinação OLS de toda a série
    pub last_30: f64,  // média dos últimos 30 dias úteis
    pub last_90: f64,  // média dos últimos 90 dias úteis
    pub dynamic: f64,  // mistura ponderada 0.7/0.3 com fallbacks
}

// ==========================================
// Scenario - um cenário de chamada
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub date: NaiveDate,
    pub business_days: i64,
}

/// Faixa pessimista/realista/otimista
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRange {
    pub pessimistic: Scenario,
    pub realistic: Scenario,
    pub optimistic: Scenario,
}

// ==========================================
// PredictionResult - previsão para uma posição
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Data prevista de chamada (None = sem dados suficientes)
    pub predicted_date: Option<NaiveDate>,
    /// Dias úteis estimados até a chamada (cenário realista)
    pub estimated_business_days: i64,
    /// Projeção alternativa do forecaster AR(1) de primeira diferença
    pub diff_ar1_days: Option<i64>,
    /// Taxas de chamada usadas no cálculo
    pub rates: RateBreakdown,
    /// Chamadas restantes até a posição alvo
    pub remaining_calls: i64,
    /// Confiança da previsão
    pub confidence: ConfidenceTier,
    /// Cenários (None quando não há dados de taxa)
    pub scenarios: Option<ScenarioRange>,
}

impl PredictionResult {
    /// Previsão nula: sem histórico de chamadas
    pub fn insufficient_data(remaining_calls: i64) -> Self {
        Self {
            predicted_date: None,
            estimated_business_days: 0,
            diff_ar1_days: None,
            rates: RateBreakdown {
                overall: 0.0,
                last_30: 0.0,
                last_90: 0.0,
                dynamic: 0.0,
            },
            remaining_calls,
            confidence: ConfidenceTier::Low,
            scenarios: None,
        }
    }

    /// Posição já alcançada: chamada prevista para hoje
    pub fn already_reached(today: NaiveDate) -> Self {
        let now_scenario = Scenario {
            date: today,
            business_days: 0,
        };
        Self {
            predicted_date: Some(today),
            estimated_business_days: 0,
            diff_ar1_days: Some(0),
            rates: RateBreakdown {
                overall: 0.0,
                last_30: 0.0,
                last_90: 0.0,
                dynamic: 0.0,
            },
            remaining_calls: 0,
            confidence: ConfidenceTier::High,
            scenarios: Some(ScenarioRange {
                pessimistic: now_scenario.clone(),
                realistic: now_scenario.clone(),
                optimistic: now_scenario,
            }),
        }
    }
}
