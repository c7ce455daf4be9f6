use super::Expr;

/// A reference to a column by name.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    /// Table qualifier. Unqualified columns resolve against the statement's
    /// table.
    pub table: Option<TableRef>,

    /// Database column name
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    /// Whatever table the statement targets, resolved when serializing.
    Current,

    /// An explicitly named table
    Name(String),
}

impl Expr {
    /// An unqualified column reference.
    pub fn column(name: impl Into<String>) -> Self {
        ExprColumn {
            table: None,
            name: name.into(),
        }
        .into()
    }

    /// A column qualified with the statement's own table.
    pub fn current_column(name: impl Into<String>) -> Self {
        ExprColumn {
            table: Some(TableRef::Current),
            name: name.into(),
        }
        .into()
    }

    /// A column qualified with an explicit table name.
    pub fn table_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        ExprColumn {
            table: Some(TableRef::Name(table.into())),
            name: name.into(),
        }
        .into()
    }

    pub fn as_column(&self) -> Option<&ExprColumn> {
        match self {
            Self::Column(column) => Some(column),
            _ => None,
        }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
