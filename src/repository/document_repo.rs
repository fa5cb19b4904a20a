// ==========================================
// Concurso Radar - repositório de documentos
// ==========================================
// Regra: repositório não contém lógica de negócio.
// Campos de lista/mapa (doses, UFs, links por UF) são colunas JSON.
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::types::{DocumentKind, ValidityPeriod};
use crate::domain::Document;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// DocumentRepository
// ==========================================
pub struct DocumentRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DocumentRepository {
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

    // colunas JSON chegam como strings; o parse acontece fora do
    // callback do rusqlite para propagar RepositoryError
    fn row_to_document(row: &Row<'_>) -> rusqlite::Result<(Document, [String; 5])> {
        let doc = Document {
            id: row.get(0)?,
            competition_id: row.get(1)?,
            name: row.get(2)?,
            kind: DocumentKind::from_db_str(&row.get::<_, String>(3)?),
            has_document: row.get(4)?,
            has_physical_copy: row.get(5)?,
            has_notarized_copy: row.get(6)?,
            drive_link: row.get(7)?,
            validity_period: ValidityPeriod::from_db_str(&row.get::<_, String>(8)?),
            issue_date: row.get(9)?,
            expiration_date: row.get(10)?,
            vaccine_doses: Vec::new(),
            user_age: row.get(12)?,
            states: Vec::new(),
            state_links: Default::default(),
            state_issue_dates: Default::default(),
            state_expiration_dates: Default::default(),
            created_at: row.get(17)?,
            updated_at: row.get(18)?,
        };
        let json_fields = [
            row.get::<_, String>(11)?, // vaccine_doses
            row.get::<_, String>(13)?, // states
            row.get::<_, String>(14)?, // state_links
            row.get::<_, String>(15)?, // state_issue_dates
            row.get::<_, String>(16)?, // state_expiration_dates
        ];
        Ok((doc, json_fields))
    }

    fn parse_document(pair: (Document, [String; 5])) -> RepositoryResult<Document> {
        let (mut doc, [doses, states, links, issues, expirations]) = pair;
        doc.vaccine_doses = serde_json::from_str(&doses)?;
        doc.states = serde_json::from_str(&states)?;
        doc.state_links = serde_json::from_str(&links)?;
        doc.state_issue_dates = serde_json::from_str(&issues)?;
        doc.state_expiration_dates = serde_json::from_str(&expirations)?;
        Ok(doc)
    }

    const SELECT_COLUMNS: &'static str = "id, competition_id, name, kind, has_document, \
        has_physical_copy, has_notarized_copy, drive_link, validity_period, issue_date, \
        expiration_date, vaccine_doses, user_age, states, state_links, state_issue_dates, \
        state_expiration_dates, created_at, updated_at";

    /// Insere um documento
    pub fn insert(&self, doc: &Document) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO document
                (id, competition_id, name, kind, has_document, has_physical_copy,
                 has_notarized_copy, drive_link, validity_period, issue_date,
                 expiration_date, vaccine_doses, user_age, states, state_links,
                 state_issue_dates, state_expiration_dates, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)",
            params![
                doc.id,
                doc.competition_id,
                doc.name,
                doc.kind.to_db_str(),
                doc.has_document,
                doc.has_physical_copy,
                doc.has_notarized_copy,
                doc.drive_link,
                doc.validity_period.to_db_str(),
                doc.issue_date,
                doc.expiration_date,
                serde_json::to_string(&doc.vaccine_doses).map_err(RepositoryError::from)?,
                doc.user_age,
                serde_json::to_string(&doc.states).map_err(RepositoryError::from)?,
                serde_json::to_string(&doc.state_links).map_err(RepositoryError::from)?,
                serde_json::to_string(&doc.state_issue_dates).map_err(RepositoryError::from)?,
                serde_json::to_string(&doc.state_expiration_dates)
                    .map_err(RepositoryError::from)?,
                doc.created_at,
                doc.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Atualiza um documento inteiro (a API cuida da rederivação de
    /// expiration_date e kind antes de chamar aqui)
    pub fn update(&self, doc: &Document) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            "UPDATE document SET
                name = ?1, kind = ?2, has_document = ?3, has_physical_copy = ?4,
                has_notarized_copy = ?5, drive_link = ?6, validity_period = ?7,
                issue_date = ?8, expiration_date = ?9, vaccine_doses = ?10,
                user_age = ?11, states = ?12, state_links = ?13,
                state_issue_dates = ?14, state_expiration_dates = ?15, updated_at = ?16
             WHERE competition_id = ?17 AND id = ?18",
            params![
                doc.name,
                doc.kind.to_db_str(),
                doc.has_document,
                doc.has_physical_copy,
                doc.has_notarized_copy,
                doc.drive_link,
                doc.validity_period.to_db_str(),
                doc.issue_date,
                doc.expiration_date,
                serde_json::to_string(&doc.vaccine_doses).map_err(RepositoryError::from)?,
                doc.user_age,
                serde_json::to_string(&doc.states).map_err(RepositoryError::from)?,
                serde_json::to_string(&doc.state_links).map_err(RepositoryError::from)?,
                serde_json::to_string(&doc.state_issue_dates).map_err(RepositoryError::from)?,
                serde_json::to_string(&doc.state_expiration_dates)
                    .map_err(RepositoryError::from)?,
                doc.updated_at,
                doc.competition_id,
                doc.id,
            ],
        )?;
        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "document".to_string(),
                id: doc.id.clone(),
            });
        }
        Ok(())
    }

    /// Lista os documentos de um concurso, por nome
    pub fn list(&self, competition_id: &str) -> RepositoryResult<Vec<Document>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM document WHERE competition_id = ?1 ORDER BY name",
            Self::SELECT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![competition_id], Self::row_to_document)?;
        let mut documents = Vec::new();
        for row in rows {
            documents.push(Self::parse_document(row?)?);
        }
        Ok(documents)
    }

    /// Busca um documento por id
    pub fn get(&self, competition_id: &str, id: &str) -> RepositoryResult<Document> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM document WHERE competition_id = ?1 AND id = ?2",
            Self::SELECT_COLUMNS
        );
        let result = conn.query_row(&sql, params![competition_id, id], Self::row_to_document);
        match result {
            Ok(pair) => Self::parse_document(pair),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(RepositoryError::NotFound {
                entity: "document".to_string(),
                id: id.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Quantidade de documentos do concurso (usada na semeadura)
    pub fn count(&self, competition_id: &str) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM document WHERE competition_id = ?1",
            params![competition_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Remove um documento
    pub fn delete(&self, competition_id: &str, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "DELETE FROM document WHERE competition_id = ?1 AND id = ?2",
            params![competition_id, id],
        )?;
        Ok(())
    }
}
