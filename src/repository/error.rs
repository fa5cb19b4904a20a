// ==========================================
// Concurso Radar - erros da camada de repositório
// ==========================================
// Ferramenta: macro derive do thiserror
// ==========================================

use thiserror::Error;

/// Erros da camada de repositório
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Banco de dados =====
    #[error("registro não encontrado: {entity} id={id}")]
    NotFound { entity: String, id: String },

    #[error("falha de conexão com o banco: {0}")]
    DatabaseConnectionError(String),

    #[error("falha ao obter lock do banco: {0}")]
    LockError(String),

    #[error("falha na consulta: {0}")]
    DatabaseQueryError(String),

    #[error("violação de unicidade: {0}")]
    UniqueConstraintViolation(String),

    // ===== Qualidade de dados =====
    #[error("falha de validação: {0}")]
    ValidationError(String),

    #[error("falha de serialização (campo {field}): {message}")]
    SerializationError { field: String, message: String },

    // ===== Genérico =====
    #[error("erro interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            other => RepositoryError::DatabaseQueryError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::SerializationError {
            field: "json".to_string(),
            message: err.to_string(),
        }
    }
}

/// Alias de resultado da camada
pub type RepositoryResult<T> = Result<T, RepositoryError>;
