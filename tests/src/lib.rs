#[macro_use]
mod macros;

mod logging_driver;
pub use logging_driver::{LoggingDriver, SqlLog};

pub mod models;

use chrono::{DateTime, Utc};
use tombstone::{db::Builder, Db};
use tombstone_driver_sqlite::Sqlite;

/// Instant every test clock is pinned to.
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap()
}

/// Builds `builder` against a fresh in-memory database with the registered
/// tables created and the clock pinned to [`fixed_now`].
pub async fn setup(builder: &mut Builder) -> (Db, SqlLog) {
    let driver = LoggingDriver::new(Sqlite::in_memory().unwrap());
    let log = driver.sql_log();

    let db = builder.now(fixed_now).build(driver).await.unwrap();
    db.push_schema().await.unwrap();
    log.clear();

    (db, log)
}
