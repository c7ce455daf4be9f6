use super::{Field, FieldBuilder, FieldId, SoftDelete};
use crate::{stmt::Type, Error, Result};

use heck::ToSnakeCase;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: String,

    /// Table the model maps to
    pub table: String,

    /// Fields contained by the model, in record order
    pub fields: Vec<Field>,

    /// The primary key. May be empty, in which case mutations cannot be
    /// scoped by identity.
    pub primary_key: PrimaryKey,
}

#[derive(Debug, Clone, Default)]
pub struct PrimaryKey {
    pub fields: Vec<FieldId>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ModelId(pub usize);

impl Model {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            table: None,
            fields: vec![],
        }
    }

    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        debug_assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    /// Finds a field by its name or its column name.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .or_else(|| self.fields.iter().find(|field| field.column == name))
    }

    pub fn primary_key_fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.primary_key
            .fields
            .iter()
            .map(|field_id| &self.fields[field_id.index])
    }

    /// Fields carrying a marking configuration.
    pub fn soft_delete_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.soft_delete.is_some())
    }

    /// The auto-increment primary key field, if the model has exactly one.
    pub fn auto_increment_field(&self) -> Option<&Field> {
        match &self.primary_key.fields[..] {
            [id] if self.fields[id.index].auto_increment => Some(&self.fields[id.index]),
            _ => None,
        }
    }
}

/// Describes a model before it is assigned an identifier.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    name: String,
    table: Option<String>,
    fields: Vec<FieldBuilder>,
}

impl ModelBuilder {
    /// Overrides the table name. Defaults to the pluralized snake case model
    /// name.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn field(mut self, field: FieldBuilder) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn build(&self, id: ModelId) -> Result<Model> {
        if self.fields.is_empty() {
            return Err(Error::invalid_schema(format!(
                "model `{}` has no fields",
                self.name
            )));
        }

        let mut fields = self
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| field.build(FieldId { model: id, index }))
            .collect::<Result<Vec<_>>>()?;

        for (index, field) in fields.iter().enumerate() {
            let duplicate = fields[..index]
                .iter()
                .find(|prev| prev.name == field.name || prev.column == field.column);

            if let Some(prev) = duplicate {
                return Err(Error::invalid_schema(format!(
                    "model `{}` declares `{}` and `{}` with the same name or column",
                    self.name, prev.name, field.name
                )));
            }
        }

        // Without an explicit primary key, a field named `id` is the key.
        if !fields.iter().any(|field| field.primary_key) {
            if let Some(field) = fields
                .iter_mut()
                .find(|field| field.name.eq_ignore_ascii_case("id"))
            {
                field.primary_key = true;
            }
        }

        let primary_key = PrimaryKey {
            fields: fields
                .iter()
                .filter(|field| field.primary_key)
                .map(|field| field.id)
                .collect(),
        };

        for index in 0..fields.len() {
            let marked = self.fields[index].is_soft_delete()
                || fields[index].tags.get("SOFTDELETE").is_some();

            if !marked {
                continue;
            }

            let soft_delete = SoftDelete::resolve(&fields[index], &fields);
            verify_marking_type(&self.name, &fields[index], &soft_delete)?;
            fields[index].soft_delete = Some(soft_delete);
        }

        let table = match &self.table {
            Some(table) => table.clone(),
            None => pluralizer::pluralize(&self.name.to_snake_case(), 2, false),
        };

        Ok(Model {
            id,
            name: self.name.clone(),
            table,
            fields,
            primary_key,
        })
    }
}

fn verify_marking_type(model: &str, field: &Field, soft_delete: &SoftDelete) -> Result<()> {
    let ok = match field.ty {
        Type::I64 | Type::U64 | Type::DateTime => true,
        Type::Bool => soft_delete.flag,
        Type::String => false,
    };

    if ok {
        Ok(())
    } else {
        Err(Error::invalid_schema(format!(
            "field `{model}.{}` of type {:?} cannot record soft deletion",
            field.name, field.ty
        )))
    }
}

impl ModelId {
    /// Identifies the field at `index` of this model.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
