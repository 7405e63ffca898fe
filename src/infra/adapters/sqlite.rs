use std::path::Path;
use std::time::Instant;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, ErrorCode, OpenFlags, Statement, params_from_iter};
use tracing::{debug, info};

use crate::app::ports::{Store, StoreError};
use crate::app::write_update::UpdateStatement;
use crate::domain::{Column, NULL_DISPLAY, QueryResult, TableSchema, WriteExecutionResult};

/// `Store` backed by a single rusqlite connection.
///
/// Table names are interpolated into statements as given; only cell values
/// are bound as parameters.
pub struct SqliteAdapter {
    conn: Connection,
}

impl SqliteAdapter {
    /// Opens an existing database file read-write. The file is never created.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(|e| {
            StoreError::Connection(format!("cannot open {}: {e}", path.display()))
        })?;

        let adapter = Self { conn };
        adapter.verify()?;
        info!(path = %path.display(), "Opened database");
        Ok(adapter)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Reads the schema once so a non-SQLite file fails at startup rather
    /// than on first use.
    fn verify(&self) -> Result<(), StoreError> {
        self.conn
            .query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
                row.get::<_, i64>(0)
            })
            .map(|_| ())
            .map_err(|e| StoreError::Connection(e.to_string()))
    }

    fn run_query(&self, sql: &str) -> Result<QueryResult, StoreError> {
        let start = Instant::now();
        let mut stmt = self.conn.prepare(sql).map_err(classify)?;
        let columns = column_names(&stmt);

        if columns.is_empty() {
            stmt.execute([]).map_err(classify)?;
            return Ok(QueryResult::success(
                sql.to_string(),
                columns,
                Vec::new(),
                elapsed_ms(start),
            ));
        }

        let width = columns.len();
        let mut rows = stmt.query([]).map_err(classify)?;
        let mut data = Vec::new();
        while let Some(row) = rows.next().map_err(classify)? {
            let mut cells = Vec::with_capacity(width);
            for idx in 0..width {
                cells.push(display_value(row.get_ref(idx).map_err(classify)?));
            }
            data.push(cells);
        }

        let result = QueryResult::success(sql.to_string(), columns, data, elapsed_ms(start));
        debug!(sql, rows = result.row_count, "Query returned");
        Ok(result)
    }
}

impl Store for SqliteAdapter {
    fn table_names(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .map_err(classify)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(classify)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(classify)?;
        Ok(names)
    }

    fn table_schema(&self, table: &str) -> Result<TableSchema, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("PRAGMA table_info({table})"))
            .map_err(classify)?;
        let columns = stmt
            .query_map([], |row| {
                Ok(Column {
                    name: row.get(1)?,
                    data_type: row.get(2)?,
                    nullable: row.get::<_, i64>(3)? == 0,
                    default: row.get(4)?,
                    primary_key_position: u32::try_from(row.get::<_, i64>(5)?).unwrap_or(0),
                })
            })
            .map_err(classify)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(classify)?;

        if columns.is_empty() {
            return Err(StoreError::Query(format!("no such table: {table}")));
        }
        Ok(TableSchema::new(table, columns))
    }

    fn row_count(&self, table: &str) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
            .map_err(classify)?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn fetch_page(
        &self,
        table: &str,
        limit: usize,
        offset: usize,
    ) -> Result<QueryResult, StoreError> {
        let sql = format!("SELECT * FROM {table} LIMIT {limit} OFFSET {offset}");
        self.run_query(&sql)
    }

    fn execute_query(&self, query: &str) -> Result<QueryResult, StoreError> {
        self.run_query(query)
    }

    fn execute_update(
        &self,
        statement: &UpdateStatement,
    ) -> Result<WriteExecutionResult, StoreError> {
        let start = Instant::now();
        let affected_rows = self
            .conn
            .execute(&statement.sql, params_from_iter(statement.params.iter()))
            .map_err(classify)?;
        Ok(WriteExecutionResult {
            affected_rows,
            execution_time_ms: elapsed_ms(start),
        })
    }
}

/// Errors that mean the file itself is unusable are fatal; the rest are
/// reported against the statement that caused them.
fn classify(err: rusqlite::Error) -> StoreError {
    match err.sqlite_error_code() {
        Some(
            ErrorCode::CannotOpen
            | ErrorCode::NotADatabase
            | ErrorCode::DatabaseCorrupt
            | ErrorCode::PermissionDenied
            | ErrorCode::SystemIoFailure,
        ) => StoreError::Connection(err.to_string()),
        _ => StoreError::Query(err.to_string()),
    }
}

fn column_names(stmt: &Statement<'_>) -> Vec<String> {
    stmt.column_names().into_iter().map(str::to_string).collect()
}

fn display_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => NULL_DISPLAY.to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Blob(bytes) => blob_display(bytes),
    }
}

/// Blobs print as their byte values, e.g. `[104 105]`.
fn blob_display(bytes: &[u8]) -> String {
    let values: Vec<String> = bytes.iter().map(u8::to_string).collect();
    format!("[{}]", values.join(" "))
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
