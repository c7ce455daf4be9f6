use chrono::{NaiveDateTime, TimeDelta};

/// Layout of [`Sentinels::DATETIME_ZERO`].
pub const DATETIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Marking values shared by every statement build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinels {
    /// Flag value of an active row
    pub flag_active: i64,

    /// Flag value of a deleted row
    pub flag_deleted: i64,

    /// Value of a native timestamp field on an active row, unless the field
    /// defaults to `NULL`.
    pub datetime_zero: NaiveDateTime,

    /// Text layout of timestamps read back as strings
    pub layout: &'static str,
}

impl Sentinels {
    pub const DATETIME_ZERO: &'static str = "1970-01-01 00:00:01";
}

impl Default for Sentinels {
    fn default() -> Self {
        let datetime_zero = NaiveDateTime::parse_from_str(Self::DATETIME_ZERO, DATETIME_LAYOUT)
            .unwrap_or_else(|_| NaiveDateTime::default() + TimeDelta::seconds(1));

        Self {
            flag_active: 0,
            flag_deleted: 1,
            datetime_zero,
            layout: DATETIME_LAYOUT,
        }
    }
}
