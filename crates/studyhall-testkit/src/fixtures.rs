//! Test fixtures and helpers.
//!
//! A key/value table in SQLite for exercising the driver adapter.

use rusqlite::{params, Connection, OptionalExtension, ToSql};
use tempfile::TempDir;

use studyhall_core::{Serializable, Status};
use studyhall_store::{Column, Result, RowExt};

/// A scratch SQLite table with an untyped `val` column.
///
/// The column has no declared type, so SQLite keeps whatever storage class
/// the adapter binds.
pub struct ValueTable {
    conn: Connection,
    // Held so the database file outlives the connection.
    _dir: Option<TempDir>,
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, val)";

impl ValueTable {
    /// Create the table in an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn, _dir: None })
    }

    /// Create the table in a database file under a fresh temporary directory.
    pub fn on_disk() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let conn = Connection::open(dir.path().join("values.db"))?;
        conn.execute(SCHEMA, [])?;
        Ok(Self {
            conn,
            _dir: Some(dir),
        })
    }

    /// Get the underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Store a codec value under `key`, replacing any previous value.
    pub fn put<T>(&self, key: &str, value: &Status<T>) -> Result<()>
    where
        T: Serializable + Clone,
        T::Error: Send + Sync + 'static,
    {
        self.put_raw(key, Column(value.clone()))
    }

    /// Store an arbitrary SQLite value, bypassing the codec.
    pub fn put_raw(&self, key: &str, value: impl ToSql) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, val) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Read the codec value stored under `key`.
    pub fn get<T>(&self, key: &str) -> Result<Status<T>>
    where
        T: Serializable,
        T::Error: Send + Sync + 'static,
    {
        let status = self
            .conn
            .query_row("SELECT val FROM kv WHERE key = ?1", [key], |row| {
                row.get_status(0)
            })?;
        Ok(status)
    }

    /// The SQLite storage class of the value under `key`, if the key exists.
    pub fn storage_class(&self, key: &str) -> Result<Option<String>> {
        let class = self
            .conn
            .query_row("SELECT typeof(val) FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(class)
    }
}
