// ==========================================
// Concurso Radar - repositório de candidatos
// ==========================================
// Regra: repositório não contém lógica de negócio.
// Todo acesso leva competition_id explícito (namespace do concurso).
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::types::CandidateStatus;
use crate::domain::Candidate;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// CandidateRepository
// ==========================================
pub struct CandidateRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CandidateRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn row_to_candidate(row: &Row<'_>) -> rusqlite::Result<Candidate> {
        Ok(Candidate {
            id: row.get(0)?,
            competition_id: row.get(1)?,
            name: row.get(2)?,
            position: row.get(3)?,
            status: CandidateStatus::from_db_str(&row.get::<_, String>(4)?),
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    /// Insere um candidato
    pub fn insert(&self, candidate: &Candidate) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO candidate
                (id, competition_id, name, position, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                candidate.id,
                candidate.competition_id,
                candidate.name,
                candidate.position,
                candidate.status.to_db_str(),
                candidate.created_at,
                candidate.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Inserção em lote (carga inicial da classificação)
    pub fn insert_bulk(&self, candidates: &[Candidate]) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(RepositoryError::from)?;
        for candidate in candidates {
            tx.execute(
                "INSERT INTO candidate
                    (id, competition_id, name, position, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    candidate.id,
                    candidate.competition_id,
                    candidate.name,
                    candidate.position,
                    candidate.status.to_db_str(),
                    candidate.created_at,
                    candidate.updated_at,
                ],
            )?;
        }
        tx.commit().map_err(RepositoryError::from)?;
        Ok(candidates.len())
    }

    /// Lista os candidatos de um concurso, em ordem de classificação
    pub fn list(&self, competition_id: &str) -> RepositoryResult<Vec<Candidate>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, competition_id, name, position, status, created_at, updated_at
             FROM candidate WHERE competition_id = ?1 ORDER BY position",
        )?;
        let rows = stmt.query_map(params![competition_id], Self::row_to_candidate)?;
        let mut candidates = Vec::new();
        for row in rows {
            candidates.push(row?);
        }
        Ok(candidates)
    }

    /// Busca um candidato por id
    pub fn get(&self, competition_id: &str, id: &str) -> RepositoryResult<Candidate> {
        let conn = self.get_conn()?;
        conn.query_row(
            "SELECT id, competition_id, name, position, status, created_at, updated_at
             FROM candidate WHERE competition_id = ?1 AND id = ?2",
            params![competition_id, id],
            Self::row_to_candidate,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "candidate".to_string(),
                id: id.to_string(),
            },
            other => other.into(),
        })
    }

    /// Atualiza a situação de um candidato
    ///
    /// Qualquer transição é permitida (o sistema não impõe
    /// monotonicidade de status).
    pub fn update_status(
        &self,
        competition_id: &str,
        id: &str,
        status: CandidateStatus,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            "UPDATE candidate SET status = ?1, updated_at = ?2
             WHERE competition_id = ?3 AND id = ?4",
            params![status.to_db_str(), Utc::now(), competition_id, id],
        )?;
        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "candidate".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Remove um candidato
    pub fn delete(&self, competition_id: &str, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "DELETE FROM candidate WHERE competition_id = ?1 AND id = ?2",
            params![competition_id, id],
        )?;
        Ok(())
    }
}
