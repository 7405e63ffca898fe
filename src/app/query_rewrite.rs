//! Rewrites ad-hoc SELECTs so the result carries the primary-key columns
//! an edit needs to address its row.

/// First word after `FROM`, stripped of quotes and backticks.
pub fn extract_table_name(query: &str) -> Option<String> {
    let lower = query.to_ascii_lowercase();
    let from = lower.find("from")?;
    let name = query[from + 4..]
        .split_whitespace()
        .next()?
        .trim_matches(|c| matches!(c, '"' | '\'' | '`'));
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Prepends the source table's primary-key columns to a SELECT that does
/// not already mention them. Anything else is returned unchanged.
///
/// `primary_keys_of` is only consulted once the query is known to be a
/// single-table SELECT.
pub fn ensure_primary_key_columns(
    query: &str,
    primary_keys_of: impl FnOnce(&str) -> Vec<String>,
) -> String {
    let trimmed = query.trim();
    let lower = trimmed.to_ascii_lowercase();

    if !lower.starts_with("select") {
        return query.to_string();
    }
    let Some(table) = extract_table_name(trimmed) else {
        return query.to_string();
    };
    let primary_keys = primary_keys_of(&table);
    if primary_keys.is_empty() {
        return query.to_string();
    }
    if primary_keys
        .iter()
        .any(|pk| lower.contains(&pk.to_ascii_lowercase()))
    {
        return query.to_string();
    }
    if lower.contains("select *") {
        return query.to_string();
    }
    let Some(from) = lower.find("from") else {
        return query.to_string();
    };

    let select_list = trimmed["select".len()..from].trim();
    format!(
        "SELECT {}, {} {}",
        primary_keys.join(", "),
        select_list,
        &trimmed[from..]
    )
}
