/// The five screens. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    TableList,
    TableData,
    RowDetail,
    CellEdit,
    Query,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Self::TableList => "Tables",
            Self::TableData => "Table",
            Self::RowDetail => "Row",
            Self::CellEdit => "Edit",
            Self::Query => "SQL",
        }
    }
}
