//! Record types shared by the scenarios.

use chrono::NaiveDateTime;
use tombstone::{
    schema::{Field, Model as ModelSchema, ModelBuilder},
    stmt::{Type, ValueRecord},
    DeletedAt, DeletedDateTime, Model, Result,
};

/// Native timestamp marking defaulted to the sentinel instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: u64,
    pub name: String,
    pub deleted_at: DeletedDateTime,
}

impl Book {
    pub fn new(name: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            deleted_at: DeletedDateTime::default(),
        }
    }
}

impl Model for Book {
    fn schema() -> ModelBuilder {
        ModelSchema::builder("Book")
            .field(Field::builder("id", Type::U64).auto_increment())
            .field(Field::builder("name", Type::String))
            .field(
                Field::builder("deleted_at", Type::DateTime)
                    .tag("default:'1970-01-01 00:00:01'")
                    .soft_delete(),
            )
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Self {
            id: record.take(0).to_u64()?,
            name: record.take(1).to_string()?,
            deleted_at: record.take(2).try_into()?,
        })
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![
            self.id.into(),
            self.name.clone().into(),
            self.deleted_at.into(),
        ])
    }
}

/// Flag marking with a companion timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub is_del: DeletedAt,
    pub deleted_at: Option<NaiveDateTime>,
}

impl User {
    pub fn new(name: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            is_del: DeletedAt::default(),
            deleted_at: None,
        }
    }
}

impl Model for User {
    fn schema() -> ModelBuilder {
        ModelSchema::builder("User")
            .field(Field::builder("id", Type::U64).auto_increment())
            .field(Field::builder("name", Type::String))
            .field(
                Field::builder("is_del", Type::I64)
                    .tag("softDelete:flag,DeletedAtField:deleted_at"),
            )
            .field(Field::builder("deleted_at", Type::DateTime).nullable())
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Self {
            id: record.take(0).to_u64()?,
            name: record.take(1).to_string()?,
            is_del: record.take(2).try_into()?,
            deleted_at: DeletedDateTime::try_from(record.take(3))?.0,
        })
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![
            self.id.into(),
            self.name.clone().into(),
            self.is_del.into(),
            self.deleted_at.into(),
        ])
    }
}

/// Native timestamp marking where `NULL` means active.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: u64,
    pub body: String,
    pub deleted_at: DeletedDateTime,
}

impl Note {
    pub fn new(body: &str) -> Self {
        Self {
            id: 0,
            body: body.to_string(),
            deleted_at: DeletedDateTime::default(),
        }
    }
}

impl Model for Note {
    fn schema() -> ModelBuilder {
        ModelSchema::builder("Note")
            .field(Field::builder("id", Type::U64).auto_increment())
            .field(Field::builder("body", Type::String))
            .field(
                Field::builder("deleted_at", Type::DateTime)
                    .default_null()
                    .soft_delete(),
            )
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Self {
            id: record.take(0).to_u64()?,
            body: record.take(1).to_string()?,
            deleted_at: record.take(2).try_into()?,
        })
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![
            self.id.into(),
            self.body.clone().into(),
            self.deleted_at.into(),
        ])
    }
}

/// Numeric timestamp markings, one model per unit.
macro_rules! timestamp_model {
    ($name:ident, $tag:literal) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub id: u64,
            pub deleted_at: DeletedAt,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    id: 0,
                    deleted_at: DeletedAt::default(),
                }
            }
        }

        impl Model for $name {
            fn schema() -> ModelBuilder {
                ModelSchema::builder(stringify!($name))
                    .field(Field::builder("id", Type::U64).auto_increment())
                    .field(Field::builder("deleted_at", Type::I64).tag($tag))
            }

            fn load(mut record: ValueRecord) -> Result<Self> {
                Ok(Self {
                    id: record.take(0).to_u64()?,
                    deleted_at: record.take(1).try_into()?,
                })
            }

            fn to_record(&self) -> ValueRecord {
                ValueRecord::from_vec(vec![self.id.into(), self.deleted_at.into()])
            }
        }
    };
}

timestamp_model!(SecondEvent, "softDelete");
timestamp_model!(MilliEvent, "softDelete:milli");
timestamp_model!(NanoEvent, "softDelete:nano");
