use super::*;

use tombstone_core::schema::Model;

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key column names
    pub primary_key: Vec<String>,
}

impl Statement {
    pub fn create_table(model: &Model) -> Self {
        CreateTable {
            name: model.table.clone(),
            columns: model.fields.iter().map(ColumnDef::from_field).collect(),
            primary_key: model
                .primary_key_fields()
                .map(|field| field.column.clone())
                .collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
