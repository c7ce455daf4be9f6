use super::*;
use crate::{Error, Result};

use chrono::NaiveDateTime;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 64-bit integer
    U64(u64),

    /// String value
    String(String),

    /// A timestamp without a time zone, interpreted as UTC
    DateTime(NaiveDateTime),

    /// Record value, one entry per model field
    Record(ValueRecord),

    /// A list of values of the same type
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns `true` if the value is the zero value of its type.
    ///
    /// Identity extraction skips primary keys made entirely of zero values:
    /// they belong to records that were never persisted.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(v) => !v,
            Self::I64(v) => *v == 0,
            Self::U64(v) => *v == 0,
            Self::String(v) => v.is_empty(),
            Self::DateTime(v) => *v == NaiveDateTime::default(),
            Self::Record(record) => record.iter().all(Value::is_zero),
            Self::List(items) => items.is_empty(),
        }
    }

    /// Name of the variant, used in conversion errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::U64(_) => "U64",
            Self::String(_) => "String",
            Self::DateTime(_) => "DateTime",
            Self::Record(_) => "Record",
            Self::List(_) => "List",
            Self::Null => "Null",
        }
    }

    pub fn record_from_vec(fields: Vec<Self>) -> Self {
        ValueRecord::from_vec(fields).into()
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            Self::I64(v) => Ok(v != 0),
            Self::U64(v) => Ok(v != 0),
            _ => Err(Error::type_conversion(self, "bool")),
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I64(v) => Ok(v),
            Self::U64(v) => i64::try_from(v).map_err(|_| Error::type_conversion(self, "i64")),
            _ => Err(Error::type_conversion(self, "i64")),
        }
    }

    pub fn to_u64(self) -> Result<u64> {
        match self {
            Self::U64(v) => Ok(v),
            Self::I64(v) => u64::try_from(v).map_err(|_| Error::type_conversion(self, "u64")),
            _ => Err(Error::type_conversion(self, "u64")),
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "String")),
        }
    }

    pub fn to_option_string(self) -> Result<Option<String>> {
        match self {
            Self::Null => Ok(None),
            Self::String(v) => Ok(Some(v)),
            _ => Err(Error::type_conversion(self, "String")),
        }
    }

    pub fn to_record(self) -> Result<ValueRecord> {
        match self {
            Self::Record(record) => Ok(record),
            _ => Err(Error::type_conversion(self, "Record")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&ValueRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Iterates the records held by this value.
    ///
    /// A single record yields itself, a list yields each record it contains,
    /// anything else yields nothing.
    pub fn records(&self) -> impl Iterator<Item = &ValueRecord> + '_ {
        let items: &[Value] = match self {
            Self::List(items) => items.as_slice(),
            other => core::slice::from_ref(other),
        };
        items.iter().filter_map(Value::as_record)
    }

    /// Mutable counterpart of [`Value::records`].
    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut ValueRecord> + '_ {
        let items: &mut [Value] = match self {
            Self::List(items) => items.as_mut_slice(),
            other => core::slice::from_mut(other),
        };
        items.iter_mut().filter_map(|item| match item {
            Self::Record(record) => Some(record),
            _ => None,
        })
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u32> for Value {
    fn from(src: u32) -> Self {
        Self::U64(src.into())
    }
}

impl From<u64> for Value {
    fn from(src: u64) -> Self {
        Self::U64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<ValueRecord> for Value {
    fn from(value: ValueRecord) -> Self {
        Self::Record(value)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_string()
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_i64()
    }
}

impl TryFrom<Value> for u64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_u64()
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_bool()
    }
}
