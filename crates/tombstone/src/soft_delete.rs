//! Soft-delete statement rewriting.
//!
//! A marking field turns deletes into updates that stamp the field, and
//! restricts reads to rows whose field still carries the active value. The
//! rewrites run while a statement is built, before any SQL is generated.

mod behavior;
pub use behavior::{delete_clauses, query_clauses, update_clauses, RewriteBehavior, Rules};

mod binding;
pub use binding::{DeletedAt, DeletedDateTime};

mod delete;
pub use delete::{DeleteRewrite, RewriteState};

mod filter;
pub use filter::SoftDeleteFilter;

mod identity;
pub use identity::{scope, snapshot};

mod sentinels;
pub use sentinels::Sentinels;

use crate::{schema::Field, stmt::Value};
use tombstone_core::schema::TimeUnit;

use chrono::{DateTime, Utc};

/// Value stored into a timestamp-mode field at deletion time.
///
/// Native timestamp fields get the instant itself; numeric fields get it
/// encoded with `unit`.
pub(crate) fn stamp(field: &Field, unit: TimeUnit, now: DateTime<Utc>) -> Value {
    if field.ty.is_datetime() {
        Value::DateTime(now.naive_utc())
    } else {
        field.ty.integer(unit.encode(now))
    }
}

/// Value a marking field holds while the row is active. `None` means the
/// active value is SQL `NULL`.
pub(crate) fn active_value(field: &Field, sentinels: &Sentinels) -> Option<Value> {
    if field.default_is_null() {
        None
    } else if field.ty.is_datetime() {
        Some(Value::DateTime(sentinels.datetime_zero))
    } else {
        Some(field.ty.integer(sentinels.flag_active))
    }
}
