use super::{active_value, Sentinels};
use crate::{schema::FieldId, stmt::Expr, Statement};

/// Restricts a statement to rows whose marking field holds the active value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftDeleteFilter {
    pub field: FieldId,
}

impl SoftDeleteFilter {
    pub fn new(field: FieldId) -> Self {
        Self { field }
    }

    /// Adds the active-row predicate as a conjunct of the whole WHERE clause.
    ///
    /// Applies at most once per statement and never to unscoped statements.
    pub fn apply(&self, stmt: &mut Statement, sentinels: &Sentinels) {
        if stmt.unscoped || stmt.is_soft_delete_enabled() {
            return;
        }

        // `a OR b AND active` would bind the predicate to `b` alone
        if stmt.filter.has_or_link() {
            stmt.filter.group();
        }

        let field = stmt.schema.field(self.field);
        let column = Expr::current_column(&field.column);
        let expr = match active_value(field, sentinels) {
            Some(value) => Expr::eq(column, value),
            None => Expr::is_null(column),
        };

        stmt.filter.add_filter(expr);
        stmt.enable_soft_delete();
    }
}
