use super::{Expr, Filter, Statement, StatementKind, Value};
use crate::{Db, Model, Result};

use std::marker::PhantomData;

/// An update of `M` rows matching a filter.
pub struct Update<'a, M> {
    db: &'a Db,
    filter: Filter,
    assignments: Vec<(String, Value)>,
    unscoped: bool,
    _p: PhantomData<M>,
}

impl<'a, M: Model> Update<'a, M> {
    pub(crate) fn new(db: &'a Db) -> Self {
        Self {
            db,
            filter: Filter::default(),
            assignments: vec![],
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

    /// Assigns `value` to the field named `field`.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.assignments.push((field.to_string(), value.into()));
        self
    }

    /// Also update soft-deleted rows.
    pub fn unscoped(mut self) -> Self {
        self.unscoped = true;
        self
    }

    /// Executes the update, returning the number of changed rows.
    pub async fn exec(self) -> Result<u64> {
        let stmt = self.to_statement()?;
        let response = self.db.engine.exec(stmt, None).await?;
        Ok(response.rows.len())
    }

    /// Builds the statement `exec` would execute, without executing it.
    pub fn to_statement(&self) -> Result<Statement> {
        let model = self.db.engine.model::<M>()?;

        if self.assignments.is_empty() {
            tombstone_core::bail!("update of `{}` assigns no fields", model.name);
        }

        let mut stmt = Statement::new(StatementKind::Update, model.clone());
        stmt.filter = self.filter.clone();
        stmt.unscoped = self.unscoped;

        for (name, value) in &self.assignments {
            let Some(field) = model.field_by_name(name) else {
                tombstone_core::bail!("`{}` has no field `{name}`", model.name);
            };

            stmt.assignments.set(field.id, value.clone());
        }

        self.db.engine.build(stmt)
    }
}
