use super::{ModelId, SoftDelete, TagSettings};
use crate::{
    stmt::{Type, Value},
    Error, Result,
};

use chrono::{DateTime, NaiveDateTime};
use heck::ToSnakeCase;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// The field name
    pub name: String,

    /// Database column the field maps to
    pub column: String,

    /// Storage type
    pub ty: Type,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// True if the database assigns the value on insert
    pub auto_increment: bool,

    /// True if the column accepts null.
    pub nullable: bool,

    /// Value applied on insert when the record leaves the field unset.
    pub default: Option<FieldDefault>,

    /// Raw per-field settings, decoded from the field tag.
    pub tags: TagSettings,

    /// Marking configuration, set when the field records soft deletion.
    pub soft_delete: Option<SoftDelete>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

/// A declared column default.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDefault {
    /// The column defaults to null. Unmarked rows of a marking field with
    /// this default carry null.
    Null,

    /// The column defaults to a constant.
    Value(Value),
}

impl Field {
    pub fn builder(name: impl Into<String>, ty: Type) -> FieldBuilder {
        FieldBuilder {
            name: name.into(),
            ty,
            column: None,
            primary_key: false,
            auto_increment: false,
            nullable: false,
            default: None,
            tag: String::new(),
            soft_delete: false,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Returns true if the declared default is null.
    pub fn default_is_null(&self) -> bool {
        matches!(self.default, Some(FieldDefault::Null))
    }

    pub fn is_soft_delete(&self) -> bool {
        self.soft_delete.is_some()
    }
}

/// Describes a field before it is placed in a model.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    name: String,
    ty: Type,
    column: Option<String>,
    primary_key: bool,
    auto_increment: bool,
    nullable: bool,
    default: Option<FieldDefault>,
    tag: String,
    soft_delete: bool,
}

impl FieldBuilder {
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn default_null(mut self) -> Self {
        self.default = Some(FieldDefault::Null);
        self.nullable = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(FieldDefault::Value(value.into()));
        self
    }

    /// Semicolon separated settings, for example
    /// `softDelete:flag,DeletedAtField:DeletedAt;default:0`.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Marks the field as recording soft deletion, even without a
    /// `softDelete` tag.
    pub fn soft_delete(mut self) -> Self {
        self.soft_delete = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds the field, minus its marking configuration. That is resolved by
    /// the model once every sibling field is known.
    pub(crate) fn build(&self, id: FieldId) -> Result<Field> {
        let tags = TagSettings::parse(&self.tag, ';');

        let column = match (&self.column, tags.get("COLUMN")) {
            (Some(column), _) => column.clone(),
            (None, Some(column)) => column.to_string(),
            (None, None) => self.name.to_snake_case(),
        };

        let default = match tags.get("DEFAULT") {
            Some(raw) => Some(parse_default(raw, self.ty).map_err(|err| {
                err.context(Error::invalid_schema(format!(
                    "field `{}` has an invalid default",
                    self.name
                )))
            })?),
            None => self.default.clone(),
        };

        let nullable = self.nullable || matches!(default, Some(FieldDefault::Null));

        Ok(Field {
            id,
            name: self.name.clone(),
            column,
            ty: self.ty,
            primary_key: self.primary_key || tags.contains("PRIMARYKEY"),
            auto_increment: self.auto_increment || tags.contains("AUTOINCREMENT"),
            nullable,
            default,
            tags,
            soft_delete: None,
        })
    }

    pub(crate) fn is_soft_delete(&self) -> bool {
        self.soft_delete
    }
}

/// Decodes a textual column default for a field of type `ty`.
fn parse_default(raw: &str, ty: Type) -> Result<FieldDefault> {
    let raw = raw.trim().trim_matches('\'');

    if raw.eq_ignore_ascii_case("null") {
        return Ok(FieldDefault::Null);
    }

    let value = match ty {
        Type::Bool => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" => Value::Bool(true),
            "false" | "0" => Value::Bool(false),
            _ => return Err(Error::type_conversion(Value::from(raw), "bool")),
        },
        Type::I64 => raw
            .parse::<i64>()
            .map(Value::I64)
            .map_err(|_| Error::type_conversion(Value::from(raw), "i64"))?,
        Type::U64 => raw
            .parse::<u64>()
            .map(Value::U64)
            .map_err(|_| Error::type_conversion(Value::from(raw), "u64"))?,
        Type::String => Value::String(raw.to_string()),
        Type::DateTime => Value::DateTime(parse_datetime(raw)?),
    };

    Ok(FieldDefault::Value(value))
}

/// Parses `YYYY-MM-DD HH:MM:SS[.fraction]` or RFC 3339 text.
pub(crate) fn parse_datetime(raw: &str) -> Result<NaiveDateTime> {
    for layout in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(value) = NaiveDateTime::parse_from_str(raw, layout) {
            return Ok(value);
        }
    }

    Ok(DateTime::parse_from_rfc3339(raw)?.naive_utc())
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
