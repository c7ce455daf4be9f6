use super::Sentinels;
use crate::{stmt::Value, Error, Result};

use chrono::{DateTime, NaiveDateTime};

/// Numeric or flag marking field.
///
/// Zero means the row is active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeletedAt(pub i64);

impl DeletedAt {
    pub fn is_deleted(&self) -> bool {
        self.0 != 0
    }
}

impl TryFrom<Value> for DeletedAt {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(DeletedAt(0)),
            Value::I64(v) => Ok(DeletedAt(v)),
            Value::U64(v) => i64::try_from(v)
                .map(DeletedAt)
                .map_err(|_| Error::type_conversion(Value::U64(v), "DeletedAt")),
            Value::Bool(v) => Ok(DeletedAt(i64::from(v))),
            value => Err(Error::type_conversion(value, "DeletedAt")),
        }
    }
}

impl From<DeletedAt> for Value {
    fn from(value: DeletedAt) -> Self {
        Value::I64(value.0)
    }
}

/// Native timestamp marking field.
///
/// `None` is stored as `NULL`. A field declared with a non-null default holds
/// that default while the row is active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeletedDateTime(pub Option<NaiveDateTime>);

impl DeletedDateTime {
    /// Returns `true` if the field holds a deletion instant rather than the
    /// active value.
    pub fn is_deleted(&self, sentinels: &Sentinels) -> bool {
        self.0.is_some_and(|at| at != sentinels.datetime_zero)
    }

    /// Decodes text read back from a driver that stores timestamps as
    /// strings.
    pub fn parse(text: &str, sentinels: &Sentinels) -> Result<Self> {
        let parsed = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(text, sentinels.layout))
            .or_else(|_| DateTime::parse_from_rfc3339(text).map(|at| at.naive_utc()));

        match parsed {
            Ok(at) => Ok(DeletedDateTime(Some(at))),
            Err(_) => Err(Error::type_conversion(
                Value::String(text.to_string()),
                "DeletedDateTime",
            )),
        }
    }
}

impl TryFrom<Value> for DeletedDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(DeletedDateTime(None)),
            Value::DateTime(at) => Ok(DeletedDateTime(Some(at))),
            Value::String(text) => DeletedDateTime::parse(&text, &Sentinels::default()),
            value => Err(Error::type_conversion(value, "DeletedDateTime")),
        }
    }
}

impl From<DeletedDateTime> for Value {
    fn from(value: DeletedDateTime) -> Self {
        match value.0 {
            Some(at) => Value::DateTime(at),
            None => Value::Null,
        }
    }
}

impl From<NaiveDateTime> for DeletedDateTime {
    fn from(value: NaiveDateTime) -> Self {
        DeletedDateTime(Some(value))
    }
}
