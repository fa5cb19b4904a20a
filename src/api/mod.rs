// ==========================================
// Concurso Radar - camada de API
// ==========================================
// Interface de negócio consumida pela UI colaboradora.
// ==========================================

pub mod candidate_api;
pub mod document_api;
pub mod error;
pub mod prediction_api;

pub use candidate_api::CandidateApi;
pub use document_api::DocumentApi;
pub use error::{ApiError, ApiResult};
pub use prediction_api::PredictionApi;
