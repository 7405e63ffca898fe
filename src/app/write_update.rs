//! UPDATE statement construction for single-cell edits.
//!
//! Values are bound as parameters. Table and column names are interpolated
//! verbatim, so they must come from the database's own catalog.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    pub sql: String,
    /// New value first, then one value per WHERE column.
    pub params: Vec<String>,
}

/// How the edited row is addressed in the WHERE clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKey {
    PrimaryKey,
    /// The table has no primary key; every column of the row is matched.
    FullRow,
}

pub fn build_update_statement(
    table: &str,
    column: &str,
    new_value: &str,
    key_pairs: &[(String, String)],
) -> UpdateStatement {
    let where_clause = key_pairs
        .iter()
        .map(|(col, _)| format!("{col} = ?"))
        .collect::<Vec<_>>()
        .join(" AND ");

    let mut params = Vec::with_capacity(key_pairs.len() + 1);
    params.push(new_value.to_string());
    params.extend(key_pairs.iter().map(|(_, val)| val.clone()));

    UpdateStatement {
        sql: format!("UPDATE {table} SET {column} = ? WHERE {where_clause}"),
        params,
    }
}

/// Pairs each key column with its value in `row`. Returns the name of the
/// first key column the result set does not contain.
pub fn build_key_pairs(
    columns: &[String],
    row: &[String],
    key_columns: &[String],
) -> Result<Vec<(String, String)>, String> {
    let mut pairs = Vec::with_capacity(key_columns.len());
    for key in key_columns {
        let value = columns
            .iter()
            .position(|c| c == key)
            .and_then(|idx| row.get(idx))
            .ok_or_else(|| key.clone())?;
        pairs.push((key.clone(), value.clone()));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn binds_value_then_key_values() {
        let stmt = build_update_statement(
            "users",
            "name",
            "O'Reilly",
            &[(String::from("id"), String::from("42"))],
        );

        assert_eq!(stmt.sql, "UPDATE users SET name = ? WHERE id = ?");
        assert_eq!(stmt.params, strings(&["O'Reilly", "42"]));
    }

    #[test]
    fn composite_key_joins_with_and() {
        let stmt = build_update_statement(
            "order_items",
            "qty",
            "3",
            &[
                (String::from("order_id"), String::from("1")),
                (String::from("product_id"), String::from("7")),
            ],
        );

        assert_eq!(
            stmt.sql,
            "UPDATE order_items SET qty = ? WHERE order_id = ? AND product_id = ?"
        );
        assert_eq!(stmt.params, strings(&["3", "1", "7"]));
    }

    #[test]
    fn null_text_is_bound_as_a_string() {
        let stmt = build_update_statement("t", "c", "NULL", &[(String::from("id"), String::from("1"))]);

        assert_eq!(stmt.params[0], "NULL");
    }

    #[test]
    fn build_key_pairs_extracts_values_by_column_name() {
        let pairs = build_key_pairs(
            &strings(&["name", "id"]),
            &strings(&["alice", "1"]),
            &strings(&["id"]),
        );

        assert_eq!(pairs, Ok(vec![("id".to_string(), "1".to_string())]));
    }

    #[test]
    fn build_key_pairs_reports_missing_column() {
        let pairs = build_key_pairs(&strings(&["name"]), &strings(&["alice"]), &strings(&["id"]));

        assert_eq!(pairs, Err("id".to_string()));
    }
}
