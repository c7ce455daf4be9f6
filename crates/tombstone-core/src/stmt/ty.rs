use super::Value;

/// The storage type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 64-bit integer
    U64,

    /// String type
    String,

    /// A native timestamp
    DateTime,
}

impl Type {
    pub fn is_bool(self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::I64 | Self::U64)
    }

    pub fn is_datetime(self) -> bool {
        matches!(self, Self::DateTime)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::String => "String",
            Self::DateTime => "NaiveDateTime",
        }
    }

    /// Converts an integer into a value of this type.
    ///
    /// Marking sentinels and encoded timestamps are plain integers; the
    /// stored representation follows the field type. Negative values
    /// saturate to zero for unsigned fields.
    pub fn integer(self, v: i64) -> Value {
        match self {
            Self::Bool => Value::Bool(v != 0),
            Self::U64 => Value::U64(u64::try_from(v).unwrap_or(0)),
            Self::String => Value::String(v.to_string()),
            Self::I64 | Self::DateTime => Value::I64(v),
        }
    }
}
