use super::TagSettings;

use chrono::{DateTime, Utc};

/// Numeric encoding of a deletion instant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Whole seconds since the Unix epoch
    #[default]
    Second,

    /// Milliseconds since the Unix epoch
    Millisecond,

    /// Nanoseconds since the Unix epoch
    Nanosecond,
}

impl TimeUnit {
    /// Picks the unit from decoded `softDelete` settings.
    ///
    /// `NANO` wins over `MILLI`, both win over the companion field unit hint
    /// `DELETEDATFIELDUNIT`. Anything else is seconds.
    pub fn from_settings(settings: &TagSettings) -> TimeUnit {
        if settings.contains("NANO") {
            return TimeUnit::Nanosecond;
        }

        if settings.contains("MILLI") {
            return TimeUnit::Millisecond;
        }

        match settings
            .get("DELETEDATFIELDUNIT")
            .map(str::to_uppercase)
            .as_deref()
        {
            Some("NANO") => TimeUnit::Nanosecond,
            Some("MILLI") => TimeUnit::Millisecond,
            _ => TimeUnit::Second,
        }
    }

    /// Encodes `now` in this unit, truncating toward zero.
    ///
    /// Nanoseconds outside the `i64` range saturate.
    pub fn encode(self, now: DateTime<Utc>) -> i64 {
        let nanos =
            i128::from(now.timestamp()) * 1_000_000_000 + i128::from(now.timestamp_subsec_nanos());

        let encoded = match self {
            TimeUnit::Second => nanos / 1_000_000_000,
            TimeUnit::Millisecond => nanos / 1_000_000,
            TimeUnit::Nanosecond => nanos,
        };

        encoded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }
}
