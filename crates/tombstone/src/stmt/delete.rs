use super::{Expr, Filter, Statement, StatementKind, Value};
use crate::{Db, Model, Result};

use std::marker::PhantomData;

/// A delete of `M` rows.
///
/// Models with a marking field are soft-deleted: the statement becomes an
/// update stamping the field. [`unscoped`](Delete::unscoped) deletes rows
/// physically.
pub struct Delete<'a, M> {
    db: &'a Db,
    filter: Filter,

    /// Records being deleted; their keys scope the statement
    dest: Value,

    /// Record describing the logical row, when it differs from `dest`
    model: Option<Value>,

    unscoped: bool,
    _p: PhantomData<M>,
}

impl<'a, M: Model> Delete<'a, M> {
    pub(crate) fn new(db: &'a Db) -> Self {
        Self {
            db,
            filter: Filter::default(),
            dest: Value::Null,
            model: None,
            unscoped: false,
            _p: PhantomData,
        }
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> Self {
        self.filter.add_filter(expr);
        self
    }

    pub fn or_filter(mut self, expr: impl Into<Expr>) -> Self {
        self.filter.add_or_filter(expr);
        self
    }

    /// Delete the row `record` was loaded from.
    pub fn record(mut self, record: &M) -> Self {
        self.dest = Value::Record(record.to_record());
        self
    }

    /// Delete the rows `records` were loaded from.
    pub fn records(mut self, records: &[M]) -> Self {
        self.dest = Value::list_from_vec(
            records
                .iter()
                .map(|record| Value::Record(record.to_record()))
                .collect(),
        );
        self
    }

    /// Scope the delete to the row `model` describes as well.
    pub fn model(mut self, model: &M) -> Self {
        self.model = Some(Value::Record(model.to_record()));
        self
    }

    /// Delete physically, even when the model has a marking field.
    pub fn unscoped(mut self) -> Self {
        self.unscoped = true;
        self
    }

    /// Executes the delete, returning the number of affected rows.
    pub async fn exec(self) -> Result<u64> {
        let (count, _) = self.exec_with_dest().await?;
        Ok(count)
    }

    /// Builds the statement `exec` would execute, without executing it.
    pub fn to_statement(self) -> Result<Statement> {
        let model = self.db.engine.model::<M>()?;

        let mut stmt = Statement::new(StatementKind::Delete, model.clone());
        stmt.filter = self.filter;
        stmt.dest = self.dest;
        stmt.model = self.model;
        stmt.unscoped = self.unscoped;

        self.db.engine.build(stmt)
    }

    /// Executes the delete and returns the destination records as rewritten
    /// during the build.
    pub(crate) async fn exec_with_dest(self) -> Result<(u64, Value)> {
        let db = self.db;
        let stmt = self.to_statement()?;
        let dest = stmt.dest.clone();

        let response = db.engine.exec(stmt, None).await?;
        Ok((response.rows.len(), dest))
    }
}
