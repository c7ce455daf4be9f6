use super::Value;
use crate::{Error, Result};

use chrono::{DateTime, NaiveDateTime, Utc};

impl Value {
    pub fn to_datetime(self) -> Result<NaiveDateTime> {
        match self {
            Self::DateTime(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "NaiveDateTime")),
        }
    }

    pub fn to_option_datetime(self) -> Result<Option<NaiveDateTime>> {
        match self {
            Self::Null => Ok(None),
            Self::DateTime(v) => Ok(Some(v)),
            _ => Err(Error::type_conversion(self, "NaiveDateTime")),
        }
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.naive_utc())
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_datetime()
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Ok(value.to_datetime()?.and_utc())
    }
}
