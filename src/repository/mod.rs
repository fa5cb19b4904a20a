// ==========================================
// Concurso Radar - camada de repositório
// ==========================================
// Regra: repositórios não contêm lógica de negócio.
// ==========================================

pub mod candidate_repo;
pub mod convocation_repo;
pub mod document_repo;
pub mod error;

pub use candidate_repo::CandidateRepository;
pub use convocation_repo::ConvocationRepository;
pub use document_repo::DocumentRepository;
pub use error::{RepositoryError, RepositoryResult};
