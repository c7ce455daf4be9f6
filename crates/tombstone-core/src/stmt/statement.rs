use super::{Assignments, Filter, Value};
use crate::schema::{FieldId, Model};

use std::sync::Arc;

/// One in-flight operation, from construction to execution.
///
/// Build phases mutate the statement in place. Once `sql` is populated the
/// statement is finalized and rewriting no longer applies.
#[derive(Debug, Clone)]
pub struct Statement {
    pub kind: StatementKind,

    /// The model the statement operates on
    pub schema: Arc<Model>,

    /// Target table name
    pub table: String,

    /// WHERE clause
    pub filter: Filter,

    /// SET clause of an update, or the values of an insert
    pub assignments: Assignments,

    /// The object rows are read from or scanned into: a record, a list of
    /// records, or null.
    pub dest: Value,

    /// The object describing the logical row, when it differs from `dest`.
    pub model: Option<Value>,

    /// Bypass all soft-delete behavior
    pub unscoped: bool,

    /// Maximum number of rows returned by a select
    pub limit: Option<u64>,

    /// Fields returned by an insert, such as a database-assigned key
    pub returning: Vec<FieldId>,

    /// Generated SQL text. Empty until the statement is finalized.
    pub sql: String,

    /// Positional parameters for `sql`
    pub params: Vec<Value>,

    soft_delete_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Count,
    Insert,
    Update,
    Delete,
}

impl Statement {
    pub fn new(kind: StatementKind, schema: Arc<Model>) -> Statement {
        Statement {
            kind,
            table: schema.table.clone(),
            schema,
            filter: Filter::default(),
            assignments: Assignments::default(),
            dest: Value::Null,
            model: None,
            unscoped: false,
            limit: None,
            returning: vec![],
            sql: String::new(),
            params: vec![],
            soft_delete_enabled: false,
        }
    }

    /// Returns true once SQL text has been generated.
    pub fn is_finalized(&self) -> bool {
        !self.sql.is_empty()
    }

    /// Returns true if the soft-delete predicate was already added during
    /// this build.
    pub fn is_soft_delete_enabled(&self) -> bool {
        self.soft_delete_enabled
    }

    pub fn enable_soft_delete(&mut self) {
        self.soft_delete_enabled = true;
    }

    /// Returns true if `model` is set, non-null and not the same object as
    /// `dest`.
    pub fn model_is_distinct(&self) -> bool {
        self.model
            .as_ref()
            .is_some_and(|model| !model.is_null() && *model != self.dest)
    }

    /// Writes `value` into `field` of every record held by `dest` and `model`.
    ///
    /// Both sides are written so a `model` equal to `dest` stays equal.
    pub fn set_column(&mut self, field: FieldId, value: &Value) {
        let model = self.model.iter_mut().flat_map(|model| model.records_mut());

        for record in self.dest.records_mut().chain(model) {
            if let Some(slot) = record.get_mut(field.index) {
                *slot = value.clone();
            }
        }
    }
}
