use tombstone_core::{schema::Field, stmt::Type};

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: Type,
    pub not_null: bool,
    pub auto_increment: bool,
}

impl ColumnDef {
    pub(crate) fn from_field(field: &Field) -> ColumnDef {
        ColumnDef {
            name: field.column.clone(),
            ty: field.ty,
            not_null: !field.nullable || field.primary_key,
            auto_increment: field.auto_increment,
        }
    }
}
