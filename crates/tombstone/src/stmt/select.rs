use super::{Expr, Filter, Statement, StatementKind};
use crate::{Db, Error, Model, Result};

use std::marker::PhantomData;

/// A read of `M` rows.
///
/// Rows whose marking field is set are excluded unless the query is
/// [`unscoped`](Select::unscoped).
pub struct Select<'a, M> {
    db: &'a Db,
    filter: Filter,
    unscoped: bool,
    _p: PhantomData<M>,
}

impl<'a, M: Model> Select<'a, M> {
    pub(crate) fn new(db: &'a Db) -> Self {
        Self {
            db,
            filter: Filter::default(),
            unscoped: false,
            _p: PhantomData,
        }
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> Self {
        self.filter.add_filter(expr);
        self
    }

    /// Adds a condition joined to the previous ones with OR.
    pub fn or_filter(mut self, expr: impl Into<Expr>) -> Self {
        self.filter.add_or_filter(expr);
        self
    }

    /// Include soft-deleted rows.
    pub fn unscoped(mut self) -> Self {
        self.unscoped = true;
        self
    }

    pub async fn all(self) -> Result<Vec<M>> {
        self.load(None).await
    }

    /// Returns the first matching row, or a record-not-found error.
    pub async fn first(self) -> Result<M> {
        let table = self.db.engine.model::<M>()?.table.clone();

        match self.load(Some(1)).await?.into_iter().next() {
            Some(model) => Ok(model),
            None => Err(Error::record_not_found(format!("table={table}"))),
        }
    }

    pub async fn count(self) -> Result<u64> {
        let stmt = self.statement(StatementKind::Count, None)?;
        let response = self.db.engine.exec(stmt, Some(vec![super::Type::U64])).await?;

        match response.rows.into_values().into_iter().next() {
            Some(mut row) => row.take(0).to_u64(),
            None => Ok(0),
        }
    }

    /// Builds the statement `all` would execute, without executing it.
    pub fn to_statement(self) -> Result<Statement> {
        self.statement(StatementKind::Select, None)
    }

    async fn load(self, limit: Option<u64>) -> Result<Vec<M>> {
        let stmt = self.statement(StatementKind::Select, limit)?;
        let ret = stmt.schema.fields.iter().map(|field| field.ty).collect();
        let response = self.db.engine.exec(stmt, Some(ret)).await?;

        response
            .rows
            .into_values()
            .into_iter()
            .map(M::load)
            .collect()
    }

    fn statement(&self, kind: StatementKind, limit: Option<u64>) -> Result<Statement> {
        let model = self.db.engine.model::<M>()?;

        let mut stmt = Statement::new(kind, model.clone());
        stmt.filter = self.filter.clone();
        stmt.unscoped = self.unscoped;
        stmt.limit = limit;

        self.db.engine.build(stmt)
    }
}
