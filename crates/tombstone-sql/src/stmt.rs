mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

pub use tombstone_core::stmt::*;

/// Schema statements. Data statements are serialized straight from
/// [`tombstone_core::stmt::Statement`].
#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    DropTable(DropTable),
}
