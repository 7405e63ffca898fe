use super::column::Column;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<Column>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Primary-key column names in key order.
    pub fn primary_keys(&self) -> Vec<String> {
        let mut keys: Vec<&Column> = self.columns.iter().filter(|c| c.is_primary_key()).collect();
        keys.sort_by_key(|c| c.primary_key_position);
        keys.into_iter().map(|c| c.name.clone()).collect()
    }

    /// True when every name in `names` is a column of this table.
    pub fn has_all_columns(&self, names: &[String]) -> bool {
        names
            .iter()
            .all(|name| self.columns.iter().any(|c| &c.name == name))
    }
}
