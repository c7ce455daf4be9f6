use super::{Expr, ExprAnd};

use std::ops;

/// The WHERE clause of a statement.
///
/// Top-level expressions are joined with AND, except that an OR node holding
/// a single operand (see [`Expr::or_link`]) joins its operand to the
/// preceding expression with OR. The same joining rule applies inside an
/// [`ExprAnd`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    exprs: Vec<Expr>,
}

impl Filter {
    pub fn from_vec(exprs: Vec<Expr>) -> Filter {
        Filter { exprs }
    }

    /// Adds a conjunct.
    pub fn add_filter(&mut self, expr: impl Into<Expr>) {
        self.exprs.push(expr.into());
    }

    /// Adds an expression joined to the previous one with OR.
    pub fn add_or_filter(&mut self, expr: impl Into<Expr>) {
        self.exprs.push(Expr::or_link(expr));
    }

    /// Returns true if a top-level expression links with OR.
    pub fn has_or_link(&self) -> bool {
        self.exprs.iter().any(Expr::is_or_link)
    }

    /// Wraps every top-level expression in a single AND group so that
    /// conjuncts added afterwards apply to the whole clause.
    pub fn group(&mut self) {
        if self.exprs.is_empty() {
            return;
        }

        let operands = std::mem::take(&mut self.exprs);
        self.exprs.push(ExprAnd { operands }.into());
    }

    pub fn exprs(&self) -> &[Expr] {
        &self.exprs
    }

    pub fn into_vec(self) -> Vec<Expr> {
        self.exprs
    }
}

impl ops::Deref for Filter {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        &self.exprs
    }
}

impl<'a> IntoIterator for &'a Filter {
    type IntoIter = std::slice::Iter<'a, Expr>;
    type Item = &'a Expr;

    fn into_iter(self) -> Self::IntoIter {
        self.exprs.iter()
    }
}

impl Extend<Expr> for Filter {
    fn extend<T: IntoIterator<Item = Expr>>(&mut self, iter: T) {
        self.exprs.extend(iter);
    }
}

impl From<Expr> for Filter {
    fn from(value: Expr) -> Self {
        Filter { exprs: vec![value] }
    }
}
