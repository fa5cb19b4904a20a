// ==========================================
// Concurso Radar - camada de domínio
// ==========================================

pub mod candidate;
pub mod convocation;
pub mod document;
pub mod prediction;
pub mod types;

pub use candidate::{highest_called_position, Candidate};
pub use convocation::{CallDay, ConvocationEvent};
pub use document::{kind_for_name, Document, DocumentStatus, DocumentSummary, DEFAULT_DOCUMENTS};
pub use prediction::{PredictionResult, RateBreakdown, Scenario, ScenarioRange};
