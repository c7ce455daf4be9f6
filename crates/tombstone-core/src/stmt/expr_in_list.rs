use super::*;

/// Tests whether an expression is contained in a list of expressions.
///
/// A list holding one item is equivalent to equality. When `expr` is an
/// [`ExprRecord`] each list item is a record of the same width.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub expr: Box<Expr>,
    pub list: Vec<Expr>,
}

impl Expr {
    pub fn in_list(lhs: impl Into<Self>, list: Vec<Expr>) -> Self {
        ExprInList {
            expr: Box::new(lhs.into()),
            list,
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Self::InList(value)
    }
}
