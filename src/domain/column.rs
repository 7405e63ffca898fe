/// Column metadata as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    pub default: Option<String>,
    /// 1-based position inside the primary key, 0 when not part of it.
    pub primary_key_position: u32,
}

impl Column {
    pub fn is_primary_key(&self) -> bool {
        self.primary_key_position > 0
    }

    pub fn type_display(&self) -> String {
        let mut display = if self.data_type.is_empty() {
            "ANY".to_string()
        } else {
            self.data_type.clone()
        };
        if !self.nullable {
            display.push_str(" NOT NULL");
        }
        if let Some(default) = &self.default {
            display.push_str(&format!(" DEFAULT {}", default));
        }
        display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(data_type: &str, nullable: bool, default: Option<&str>) -> Column {
        Column {
            name: "c".to_string(),
            data_type: data_type.to_string(),
            nullable,
            default: default.map(str::to_string),
            primary_key_position: 0,
        }
    }

    #[test]
    fn type_display_includes_constraints() {
        let col = column("INTEGER", false, Some("0"));

        assert_eq!(col.type_display(), "INTEGER NOT NULL DEFAULT 0");
    }

    #[test]
    fn untyped_column_displays_any() {
        assert_eq!(column("", true, None).type_display(), "ANY");
    }
}
