use super::{filter::SoftDeleteFilter, identity, stamp};
use crate::{
    schema::{FieldId, SoftDelete},
    stmt::StatementKind,
    Config, Error, Result, Statement,
};

/// Progress of a [`DeleteRewrite`] over one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteState {
    NotStarted,
    MarkingApplied,
    IdentityScoped,
    FilterReapplied,
    Finalized,
    Aborted,
}

/// Turns a DELETE into an UPDATE stamping the marking field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRewrite {
    pub field: FieldId,
    pub soft_delete: SoftDelete,
}

impl DeleteRewrite {
    pub fn new(field: FieldId, soft_delete: SoftDelete) -> Self {
        Self { field, soft_delete }
    }

    /// Rewrites `stmt` in place and returns the state it ended in.
    ///
    /// Statements that are already finalized, unscoped, or no longer a
    /// DELETE are left untouched and report `NotStarted`. Fails with a
    /// missing filter error, leaving the statement unexecutable, when the
    /// rewrite ends up without any WHERE predicate and global updates are
    /// not allowed.
    pub fn apply(&self, stmt: &mut Statement, config: &Config) -> Result<RewriteState> {
        let mut state = RewriteState::NotStarted;

        if stmt.is_finalized() || stmt.unscoped || stmt.kind != StatementKind::Delete {
            return Ok(state);
        }

        let model = stmt.schema.clone();
        let field = model.field(self.field);
        let now = config.current_time();

        if let Some(companion) = self.soft_delete.companion {
            let companion = model.field(companion);
            let value = stamp(companion, self.soft_delete.unit, now);

            stmt.assignments.set(companion.id, value.clone());
            stmt.set_column(companion.id, &value);
        }

        let value = if self.soft_delete.flag {
            field.ty.integer(config.sentinels.flag_deleted)
        } else {
            stamp(field, self.soft_delete.unit, now)
        };

        stmt.assignments.prepend(field.id, value.clone());
        stmt.set_column(field.id, &value);
        transition(stmt, &mut state, RewriteState::MarkingApplied);

        identity::scope(stmt);
        transition(stmt, &mut state, RewriteState::IdentityScoped);

        if stmt.filter.is_empty() && !config.allow_global_update {
            transition(stmt, &mut state, RewriteState::Aborted);
            tracing::debug!(
                model = %model.name,
                table = %stmt.table,
                "soft delete aborted; no scoping predicate"
            );

            return Err(Error::missing_filter(format!(
                "soft delete on `{}`",
                stmt.table
            )));
        }

        SoftDeleteFilter::new(self.field).apply(stmt, &config.sentinels);
        transition(stmt, &mut state, RewriteState::FilterReapplied);

        stmt.kind = StatementKind::Update;
        transition(stmt, &mut state, RewriteState::Finalized);

        Ok(state)
    }
}

fn transition(stmt: &Statement, state: &mut RewriteState, to: RewriteState) {
    tracing::trace!(model = %stmt.schema.name, from = ?*state, to = ?to, "soft delete rewrite");
    *state = to;
}
