// ==========================================
// Concurso Radar - camada de engines
// ==========================================
// Regras de negócio puras: os engines recebem snapshots em memória,
// calculam e retornam. Nenhum engine escreve em banco.
// ==========================================

pub mod aggregator;
pub mod calendar;
pub mod eligibility;
pub mod eligibility_core;
pub mod estimators;
pub mod forecaster;
pub mod prediction;
pub mod progress;

pub use aggregator::CallSeriesAggregator;
pub use eligibility::DocumentEligibilityEngine;
pub use eligibility_core::EligibilityCore;
pub use estimators::RateEstimator;
pub use forecaster::{DiffAr1Forecaster, MAX_HORIZON};
pub use prediction::PredictionEngine;
pub use progress::call_progress;
