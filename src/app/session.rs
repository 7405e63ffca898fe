//! The in-memory cache shared by every view: table names, the loaded page
//! or query result, and the filters applied to them.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{NULL_DISPLAY, QueryResult, TableSchema};
use crate::fuzzy;
use crate::pagination::{self, PAGE_SIZE};
use crate::ports::{Store, StoreError};
use crate::write_update::{RowKey, build_key_pairs, build_update_statement};

pub const DEFAULT_VIEWPORT_WIDTH: u16 = 80;
pub const DEFAULT_VIEWPORT_HEIGHT: u16 = 24;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
    #[error("Cannot save edit: {0}")]
    Attribution(String),
}

impl SessionError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_fatal())
    }
}

/// The last ad-hoc query, as typed and as sent to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedQuery {
    pub input: String,
    pub executed: String,
    pub execution_time_ms: u64,
}

/// Which table a query result was attributed to, and how many tables
/// could have produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTableMatch {
    pub table: String,
    pub candidates: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub table: String,
    pub column: String,
    pub key: RowKey,
    pub affected_rows: usize,
    /// Set when the target table had to be guessed from the result columns.
    pub inferred: Option<SourceTableMatch>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub table_names: Vec<String>,
    pub filtered_table_names: Vec<String>,
    pub table_filter: String,
    /// Index into `filtered_table_names` of the table being browsed.
    pub active_table_index: usize,
    /// Schema of the browsed table; `None` while a query result is shown.
    pub schema: Option<TableSchema>,
    pub columns: Vec<String>,
    pub primary_key_columns: Vec<String>,
    pub raw_rows: Vec<Vec<String>>,
    pub filtered_rows: Vec<Vec<String>>,
    pub row_filter: String,
    pub total_row_count: usize,
    pub current_page: usize,
    pub is_query_result: bool,
    pub query_source_table: Option<String>,
    pub last_query: Option<ExecutedQuery>,
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            table_names: Vec::new(),
            filtered_table_names: Vec::new(),
            table_filter: String::new(),
            active_table_index: 0,
            schema: None,
            columns: Vec::new(),
            primary_key_columns: Vec::new(),
            raw_rows: Vec::new(),
            filtered_rows: Vec::new(),
            row_filter: String::new(),
            total_row_count: 0,
            current_page: 0,
            is_query_result: false,
            query_source_table: None,
            last_query: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn active_table(&self) -> Option<&str> {
        self.filtered_table_names
            .get(self.active_table_index)
            .map(String::as_str)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.total_row_count)
    }

    pub fn max_page(&self) -> usize {
        pagination::max_page(self.total_row_count)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.filtered_rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }

    pub fn load_table_names(&mut self, store: &dyn Store) -> Result<(), SessionError> {
        let names = store.table_names()?;
        info!(count = names.len(), "Loaded table names");
        self.table_names = names;
        let filter = self.table_filter.clone();
        self.filter_tables(&filter);
        Ok(())
    }

    pub fn filter_tables(&mut self, pattern: &str) {
        self.table_filter = pattern.to_string();
        self.filtered_table_names = fuzzy::filter_names(&self.table_names, pattern);
    }

    pub fn clear_table_filter(&mut self) {
        self.filter_tables("");
    }

    /// Loads `current_page` of the active table, clamping the page to the
    /// table's current size. Clears the row filter.
    pub fn load_table_data(&mut self, store: &dyn Store) -> Result<(), SessionError> {
        let table = self
            .active_table()
            .ok_or_else(|| {
                SessionError::InvalidSelection(format!(
                    "table index {} out of range",
                    self.active_table_index
                ))
            })?
            .to_string();

        let schema = store.table_schema(&table)?;
        let total = store.row_count(&table)?;
        let page = self.current_page.min(pagination::max_page(total));
        let result = store.fetch_page(&table, PAGE_SIZE, pagination::page_offset(page))?;

        debug!(
            table = %table,
            page,
            rows = result.rows.len(),
            total,
            "Loaded table page"
        );

        self.columns = schema.column_names();
        self.primary_key_columns = schema.primary_keys();
        self.schema = Some(schema);
        self.raw_rows = fit_rows(result.rows, self.columns.len());
        self.filtered_rows = self.raw_rows.clone();
        self.row_filter.clear();
        self.total_row_count = total;
        self.current_page = page;
        self.is_query_result = false;
        self.query_source_table = None;
        Ok(())
    }

    pub fn filter_rows(&mut self, pattern: &str) {
        self.row_filter = pattern.to_string();
        self.filtered_rows = fuzzy::filter_rows(&self.raw_rows, pattern);
    }

    pub fn clear_row_filter(&mut self) {
        self.filter_rows("");
    }

    /// Replaces the grid contents with an ad-hoc query result.
    pub fn set_query_result(&mut self, input: String, result: QueryResult) {
        self.columns = result.columns;
        self.raw_rows = fit_rows(result.rows, self.columns.len());
        self.filtered_rows = self.raw_rows.clone();
        self.row_filter.clear();
        self.total_row_count = self.raw_rows.len();
        self.current_page = 0;
        self.primary_key_columns.clear();
        self.schema = None;
        self.is_query_result = true;
        self.query_source_table = None;
        self.last_query = Some(ExecutedQuery {
            input,
            executed: result.query,
            execution_time_ms: result.execution_time_ms,
        });
    }

    /// Attributes the current query result to the first table whose columns
    /// include every result column, and caches the answer.
    pub fn infer_source_table(
        &mut self,
        store: &dyn Store,
    ) -> Result<SourceTableMatch, SessionError> {
        let mut matches = Vec::new();
        for name in &self.table_names {
            match store.table_schema(name) {
                Ok(schema) if schema.has_all_columns(&self.columns) => matches.push(name.clone()),
                Ok(_) => {}
                Err(e) => debug!(table = %name, error = %e, "Skipped table during inference"),
            }
        }

        let Some(table) = matches.first().cloned() else {
            return Err(SessionError::Attribution(
                "no table contains all result columns".to_string(),
            ));
        };
        if matches.len() > 1 {
            warn!(table = %table, candidates = matches.len(), "Ambiguous source table");
        }
        self.query_source_table = Some(table.clone());
        Ok(SourceTableMatch {
            table,
            candidates: matches.len(),
        })
    }

    /// Writes `value` into the cell at (`row`, `col`) of the filtered rows,
    /// then mirrors the change into the cached raw rows.
    pub fn update_cell(
        &mut self,
        store: &dyn Store,
        row: usize,
        col: usize,
        value: &str,
    ) -> Result<CellUpdate, SessionError> {
        if row >= self.filtered_rows.len() || col >= self.columns.len() {
            return Err(SessionError::InvalidSelection(format!(
                "cell ({row}, {col}) out of range"
            )));
        }

        let (table, inferred) = if self.is_query_result {
            match self.query_source_table.clone() {
                Some(table) => (table, None),
                None => {
                    let found = self.infer_source_table(store)?;
                    (found.table.clone(), Some(found))
                }
            }
        } else {
            let table = self.active_table().ok_or_else(|| {
                SessionError::InvalidSelection("no table selected".to_string())
            })?;
            (table.to_string(), None)
        };

        let column = self.columns[col].clone();
        let schema = store.table_schema(&table)?;
        let primary_keys = schema.primary_keys();
        let (key, key_columns) = if primary_keys.is_empty() {
            (RowKey::FullRow, schema.column_names())
        } else {
            (RowKey::PrimaryKey, primary_keys)
        };

        let before = self.filtered_rows[row].clone();
        let pairs = build_key_pairs(&self.columns, &before, &key_columns).map_err(|missing| {
            SessionError::Attribution(format!("column '{missing}' is not in the result"))
        })?;
        let statement = build_update_statement(&table, &column, value, &pairs);
        let result = store.execute_update(&statement)?;

        info!(
            table = %table,
            column = %column,
            affected_rows = result.affected_rows,
            elapsed_ms = result.execution_time_ms,
            "Updated cell"
        );

        if result.affected_rows > 0 {
            self.filtered_rows[row][col] = value.to_string();
            if let Some(raw) = self.raw_rows.iter_mut().find(|r| **r == before) {
                raw[col] = value.to_string();
            }
        }

        Ok(CellUpdate {
            table,
            column,
            key,
            affected_rows: result.affected_rows,
            inferred,
        })
    }
}

fn fit_rows(rows: Vec<Vec<String>>, width: usize) -> Vec<Vec<String>> {
    rows.into_iter()
        .map(|mut row| {
            row.resize(width, NULL_DISPLAY.to_string());
            row
        })
        .collect()
}

#[cfg(any(test, feature = "test-support"))]
impl Session {
    /// A session already holding a table page, for view and render tests.
    pub fn with_table_page(
        tables: &[&str],
        active: usize,
        columns: &[&str],
        rows: Vec<Vec<String>>,
        total_row_count: usize,
    ) -> Self {
        let table_names: Vec<String> = tables.iter().map(ToString::to_string).collect();
        Self {
            filtered_table_names: table_names.clone(),
            table_names,
            active_table_index: active,
            columns: columns.iter().map(ToString::to_string).collect(),
            filtered_rows: rows.clone(),
            raw_rows: rows,
            total_row_count,
            ..Self::default()
        }
    }
}
