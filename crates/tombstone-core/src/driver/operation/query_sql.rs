use super::Operation;

use crate::stmt;

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// The finalized statement; its `sql` and `params` are executed.
    pub stmt: stmt::Statement,

    /// Column types of returned rows. `None` when the statement returns an
    /// affected row count.
    pub ret: Option<Vec<stmt::Type>>,
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
