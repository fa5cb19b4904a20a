// ==========================================
// Concurso Radar - inicialização do SQLite
// ==========================================
// Objetivos:
// - Unificar os PRAGMA de todas as conexões (foreign_keys, busy_timeout)
// - Criar o esquema quando o banco é novo
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// busy_timeout padrão (milissegundos)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Aplica os PRAGMA unificados a uma conexão
///
/// foreign_keys e busy_timeout valem por conexão, não por banco.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Abre uma conexão SQLite já configurada
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Cria o esquema se necessário (idempotente)
///
/// Campos de lista/mapa são colunas JSON; datas são texto ISO-8601.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS candidate (
            id              TEXT PRIMARY KEY,
            competition_id  TEXT NOT NULL,
            name            TEXT NOT NULL,
            position        INTEGER NOT NULL,
            status          TEXT NOT NULL,
            created_at      TEXT NOT NULL,
            updated_at      TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_candidate_competition
            ON candidate (competition_id);

        CREATE TABLE IF NOT EXISTS convocation_event (
            id                   TEXT PRIMARY KEY,
            competition_id       TEXT NOT NULL,
            event_date           TEXT NOT NULL,
            has_called           INTEGER NOT NULL,
            called_candidate_ids TEXT NOT NULL,
            notes                TEXT,
            created_at           TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_convocation_competition_date
            ON convocation_event (competition_id, event_date);

        CREATE TABLE IF NOT EXISTS document (
            id                     TEXT PRIMARY KEY,
            competition_id         TEXT NOT NULL,
            name                   TEXT NOT NULL,
            kind                   TEXT NOT NULL,
            has_document           INTEGER NOT NULL DEFAULT 0,
            has_physical_copy      INTEGER NOT NULL DEFAULT 0,
            has_notarized_copy     INTEGER NOT NULL DEFAULT 0,
            drive_link             TEXT,
            validity_period        TEXT NOT NULL DEFAULT 'NONE',
            issue_date             TEXT,
            expiration_date        TEXT,
            vaccine_doses          TEXT NOT NULL DEFAULT '[]',
            user_age               INTEGER,
            states                 TEXT NOT NULL DEFAULT '[]',
            state_links            TEXT NOT NULL DEFAULT '{}',
            state_issue_dates      TEXT NOT NULL DEFAULT '{}',
            state_expiration_dates TEXT NOT NULL DEFAULT '{}',
            created_at             TEXT NOT NULL,
            updated_at             TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_document_competition
            ON document (competition_id);

        CREATE TABLE IF NOT EXISTS config_kv (
            scope_id TEXT NOT NULL,
            key      TEXT NOT NULL,
            value    TEXT NOT NULL,
            PRIMARY KEY (scope_id, key)
        );
        ",
    )
}
