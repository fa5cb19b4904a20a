// ==========================================
// Concurso Radar - repositório de convocações
// ==========================================
// Regra: repositório não contém lógica de negócio.
// called_candidate_ids é coluna JSON.
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::ConvocationEvent;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// ConvocationRepository
// ==========================================
pub struct ConvocationRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ConvocationRepository {
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

    fn row_to_event(row: &Row<'_>) -> rusqlite::Result<(ConvocationEvent, String)> {
        let ids_json: String = row.get(4)?;
        Ok((
            ConvocationEvent {
                id: row.get(0)?,
                competition_id: row.get(1)?,
                date: row.get(2)?,
                has_called: row.get(3)?,
                called_candidate_ids: Vec::new(), // preenchido após o parse do JSON
                notes: row.get(5)?,
                created_at: row.get(6)?,
            },
            ids_json,
        ))
    }

    fn parse_event(pair: (ConvocationEvent, String)) -> RepositoryResult<ConvocationEvent> {
        let (mut event, ids_json) = pair;
        event.called_candidate_ids = serde_json::from_str(&ids_json)?;
        Ok(event)
    }

    /// Insere um evento de convocação
    pub fn insert(&self, event: &ConvocationEvent) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO convocation_event
                (id, competition_id, event_date, has_called, called_candidate_ids, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                event.id,
                event.competition_id,
                event.date,
                event.has_called,
                serde_json::to_string(&event.called_candidate_ids)
                    .map_err(RepositoryError::from)?,
                event.notes,
                event.created_at,
            ],
        )?;
        Ok(())
    }

    /// Inserção em lote (carga de dias históricos sem chamada)
    pub fn insert_bulk(&self, events: &[ConvocationEvent]) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction().map_err(RepositoryError::from)?;
        for event in events {
            tx.execute(
                "INSERT INTO convocation_event
                    (id, competition_id, event_date, has_called, called_candidate_ids, notes, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    event.id,
                    event.competition_id,
                    event.date,
                    event.has_called,
                    serde_json::to_string(&event.called_candidate_ids)
                        .map_err(RepositoryError::from)?,
                    event.notes,
                    event.created_at,
                ],
            )?;
        }
        tx.commit().map_err(RepositoryError::from)?;
        Ok(events.len())
    }

    /// Lista os eventos de um concurso, em ordem de data
    pub fn list(&self, competition_id: &str) -> RepositoryResult<Vec<ConvocationEvent>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, competition_id, event_date, has_called, called_candidate_ids, notes, created_at
             FROM convocation_event WHERE competition_id = ?1 ORDER BY event_date",
        )?;
        let rows = stmt.query_map(params![competition_id], Self::row_to_event)?;
        let mut events = Vec::new();
        for row in rows {
            events.push(Self::parse_event(row?)?);
        }
        Ok(events)
    }

    /// Busca o evento de uma data específica, se existir
    pub fn get_by_date(
        &self,
        competition_id: &str,
        date: NaiveDate,
    ) -> RepositoryResult<Option<ConvocationEvent>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            "SELECT id, competition_id, event_date, has_called, called_candidate_ids, notes, created_at
             FROM convocation_event WHERE competition_id = ?1 AND event_date = ?2",
            params![competition_id, date],
            Self::row_to_event,
        );
        match result {
            Ok(pair) => Ok(Some(Self::parse_event(pair)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Atualiza as chamadas de um evento (adição/remoção de candidatos)
    pub fn update_calls(
        &self,
        competition_id: &str,
        id: &str,
        has_called: bool,
        called_candidate_ids: &[String],
        notes: Option<&str>,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            "UPDATE convocation_event
             SET has_called = ?1, called_candidate_ids = ?2, notes = ?3
             WHERE competition_id = ?4 AND id = ?5",
            params![
                has_called,
                serde_json::to_string(called_candidate_ids).map_err(RepositoryError::from)?,
                notes,
                competition_id,
                id,
            ],
        )?;
        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "convocation_event".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Remove um evento
    pub fn delete(&self, competition_id: &str, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "DELETE FROM convocation_event WHERE competition_id = ?1 AND id = ?2",
            params![competition_id, id],
        )?;
        Ok(())
    }
}
