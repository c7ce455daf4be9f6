mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

mod query_sql;
pub use query_sql::QuerySql;

#[derive(Debug)]
pub enum Operation {
    /// Create the table backing a model
    CreateTable(CreateTable),

    /// Drop the table backing a model, if it exists
    DropTable(DropTable),

    /// Execute a finalized SQL statement
    QuerySql(QuerySql),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateTable(_) => "create_table",
            Self::DropTable(_) => "drop_table",
            Self::QuerySql(_) => "query_sql",
        }
    }
}
