use super::{DeleteRewrite, SoftDeleteFilter};
use crate::{
    schema::{Field, Model},
    stmt::StatementKind,
    Config, Result, Statement,
};

/// A statement mutation bound to one marking field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteBehavior {
    /// Read path: restrict to active rows
    Filter(SoftDeleteFilter),

    /// Plain updates: restrict to active rows until SQL is generated
    UpdateGuard(SoftDeleteFilter),

    /// Deletes become marking updates
    DeleteRewrite(DeleteRewrite),
}

impl RewriteBehavior {
    pub fn apply(&self, stmt: &mut Statement, config: &Config) -> Result<()> {
        match self {
            RewriteBehavior::Filter(filter) => filter.apply(stmt, &config.sentinels),
            RewriteBehavior::UpdateGuard(filter) => {
                if !stmt.is_finalized() && !stmt.unscoped {
                    filter.apply(stmt, &config.sentinels);
                }
            }
            RewriteBehavior::DeleteRewrite(rewrite) => {
                rewrite.apply(stmt, config)?;
            }
        }

        Ok(())
    }
}

/// Behaviors for a read of `field`'s model.
pub fn query_clauses(field: &Field) -> Vec<RewriteBehavior> {
    match field.soft_delete {
        Some(_) => vec![RewriteBehavior::Filter(SoftDeleteFilter::new(field.id))],
        None => vec![],
    }
}

/// Behaviors for a plain update of `field`'s model.
pub fn update_clauses(field: &Field) -> Vec<RewriteBehavior> {
    match field.soft_delete {
        Some(_) => vec![RewriteBehavior::UpdateGuard(SoftDeleteFilter::new(field.id))],
        None => vec![],
    }
}

/// Behaviors for a delete from `field`'s model.
pub fn delete_clauses(field: &Field) -> Vec<RewriteBehavior> {
    match field.soft_delete {
        Some(soft_delete) => vec![RewriteBehavior::DeleteRewrite(DeleteRewrite::new(
            field.id,
            soft_delete,
        ))],
        None => vec![],
    }
}

/// Build-phase behaviors of one model, compiled once at registration.
#[derive(Debug, Clone, Default)]
pub struct Rules {
    query: Vec<RewriteBehavior>,
    update: Vec<RewriteBehavior>,
    delete: Vec<RewriteBehavior>,
}

impl Rules {
    pub fn compile(model: &Model) -> Rules {
        let mut rules = Rules::default();

        for field in model.soft_delete_fields() {
            rules.query.extend(query_clauses(field));
            rules.update.extend(update_clauses(field));
            rules.delete.extend(delete_clauses(field));
        }

        rules
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.update.is_empty() && self.delete.is_empty()
    }

    /// Runs the behaviors of the build phase matching `stmt.kind`.
    pub fn apply(&self, stmt: &mut Statement, config: &Config) -> Result<()> {
        let behaviors = match stmt.kind {
            StatementKind::Select | StatementKind::Count => &self.query,
            StatementKind::Update => &self.update,
            StatementKind::Delete => &self.delete,
            StatementKind::Insert => return Ok(()),
        };

        for behavior in behaviors {
            behavior.apply(stmt, config)?;
        }

        Ok(())
    }
}
