use crate::Sentinels;

use chrono::{DateTime, Utc};
use std::{fmt, sync::Arc};

/// Source of the deletion instant.
pub type NowFn = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Process-wide settings consulted while statements are built.
///
/// Constructed once by [`crate::db::Builder`] and never mutated afterwards.
#[derive(Clone)]
pub struct Config {
    /// Permit UPDATE and DELETE statements without any WHERE predicate.
    pub allow_global_update: bool,

    /// Marking values for active and deleted rows
    pub sentinels: Sentinels,

    pub now: NowFn,
}

impl Config {
    pub fn current_time(&self) -> DateTime<Utc> {
        (self.now)()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_global_update: false,
            sentinels: Sentinels::default(),
            now: Arc::new(Utc::now),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("allow_global_update", &self.allow_global_update)
            .field("sentinels", &self.sentinels)
            .finish_non_exhaustive()
    }
}
