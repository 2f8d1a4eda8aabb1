//! Database layer for the clinic records store.
//!
//! Every read and write goes through a [`Session`], a single SQLite
//! transaction bound to one connection. A session that is dropped without
//! [`Session::commit`] rolls back, so a failed request never leaves partial
//! writes behind.

mod schema;
mod session;
mod patients;
mod doctors;
mod records;
mod prescriptions;
mod appointments;

pub use schema::*;
pub use session::*;

use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Pool of SQLite connections shared by request handlers.
pub type DbPool = r2d2::Pool<SqliteConnectionManager>;

/// Per-connection settings. SQLite scopes these to the connection, so every
/// new connection needs them.
fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", true)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(())
}

/// Open a connection pool on the database at `path`, creating the schema
/// if needed.
pub fn open_pool<P: AsRef<Path>>(path: P, size: u32) -> DbResult<DbPool> {
    if size == 0 {
        return Err(DbError::Config("pool size must be at least 1".to_string()));
    }

    let manager =
        SqliteConnectionManager::file(path.as_ref()).with_init(|conn| configure_connection(conn));
    let pool = r2d2::Pool::builder().max_size(size).build(manager)?;

    pool.get()?.execute_batch(SCHEMA)?;
    tracing::debug!(path = %path.as_ref().display(), size, "opened database pool");
    Ok(pool)
}

/// Single owned connection, for tools and tests.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Apply connection settings and schema.
    fn initialize(&self) -> DbResult<()> {
        configure_connection(&self.conn)?;
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Begin a read session.
    pub fn session(&mut self) -> DbResult<Session<'_>> {
        Session::begin(&mut self.conn)
    }

    /// Begin a write session.
    pub fn write_session(&mut self) -> DbResult<Session<'_>> {
        Session::begin_write(&mut self.conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory();
        assert!(db.is_ok());
    }

    #[test]
    fn test_schema_initialized() {
        let db = Database::open_in_memory().unwrap();

        let tables: Vec<String> = db
            .conn()
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        for table in [
            "appointments",
            "case_counter",
            "doctors",
            "medical_records",
            "patients",
            "prescriptions",
        ] {
            assert!(tables.contains(&table.to_string()), "missing {}", table);
        }
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::open_in_memory().unwrap();
        let enabled: bool = db
            .conn()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert!(enabled);
    }

    #[test]
    fn test_pool_rejects_zero_size() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_pool(dir.path().join("clinic.db"), 0);
        assert!(matches!(result, Err(DbError::Config(_))));
    }

    #[test]
    fn test_pool_shares_file() {
        let dir = tempfile::tempdir().unwrap();
        let pool = open_pool(dir.path().join("clinic.db"), 2).unwrap();

        let mut first = pool.get().unwrap();
        let session = Session::begin_write(&mut first).unwrap();
        session
            .conn()
            .execute(
                "INSERT INTO doctors (first_name, last_name) VALUES ('Ann', 'Lee')",
                [],
            )
            .unwrap();
        session.commit().unwrap();

        let second = pool.get().unwrap();
        let count: i64 = second
            .query_row("SELECT COUNT(*) FROM doctors", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
