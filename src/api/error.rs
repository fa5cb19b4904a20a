// ==========================================
// Concurso Radar - erros da camada de API
// ==========================================
// Converte erros de repositório/engine em mensagens para a UI.
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// Erros da camada de API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("entrada inválida: {0}")]
    InvalidInput(String),

    #[error("recurso não encontrado: {0}")]
    NotFound(String),

    #[error("erro de banco de dados: {0}")]
    DatabaseError(String),

    #[error("erro interno: {0}")]
    InternalError(String),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} id={}", entity, id))
            }
            RepositoryError::ValidationError(msg) => ApiError::InvalidInput(msg),
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}

impl From<Box<dyn std::error::Error>> for ApiError {
    fn from(err: Box<dyn std::error::Error>) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

/// Alias de resultado da camada
pub type ApiResult<T> = Result<T, ApiError>;
