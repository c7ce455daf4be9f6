use chrono::{DateTime, NaiveDateTime};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use tombstone_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};

/// Text layout timestamps are stored with.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a core value of type `ty`.
    pub fn from_sql(row: &Row, index: usize, ty: stmt::Type) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver_operation_failed)?;

        let core_value = match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(value) => match ty {
                stmt::Type::Bool => CoreValue::Bool(value != 0),
                stmt::Type::I64 => CoreValue::I64(value),
                stmt::Type::U64 => CoreValue::U64(value as u64),
                _ => return Err(Error::type_conversion(CoreValue::I64(value), ty.name())),
            },
            SqlValue::Text(value) => match ty {
                stmt::Type::DateTime => CoreValue::DateTime(parse_datetime(value)?),
                stmt::Type::String => CoreValue::String(value),
                _ => return Err(Error::type_conversion(CoreValue::String(value), ty.name())),
            },
            SqlValue::Real(_) | SqlValue::Blob(_) => {
                return Err(tombstone_core::err!(
                    "unsupported SQLite storage class for {} column {index}",
                    ty.name()
                ));
            }
        };

        Ok(Value(core_value))
    }
}

fn parse_datetime(text: String) -> Result<NaiveDateTime> {
    if let Ok(value) = NaiveDateTime::parse_from_str(&text, DATETIME_FORMAT) {
        return Ok(value);
    }

    match DateTime::parse_from_rfc3339(&text) {
        Ok(value) => Ok(value.naive_utc()),
        Err(_) => Err(Error::type_conversion(CoreValue::String(text), "NaiveDateTime")),
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::U64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::DateTime(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.format(DATETIME_FORMAT).to_string(),
            ))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            value @ (Value::Record(_) | Value::List(_)) => {
                Err(rusqlite::Error::ToSqlConversionFailure(Box::new(
                    Error::type_conversion(value.clone(), "SQLite parameter"),
                )))
            }
        }
    }
}
