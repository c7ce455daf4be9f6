use super::Expr;

/// `expr IS NULL`, or `expr IS NOT NULL` when `negate` is set.
///
/// This is the read filter for a marking field declared with a null default:
/// such rows are active while the column is still empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    pub negate: bool,
    pub expr: Box<Expr>,
}

impl ExprIsNull {
    fn new(expr: impl Into<Expr>, negate: bool) -> Expr {
        Expr::IsNull(ExprIsNull {
            negate,
            expr: Box::new(expr.into()),
        })
    }
}

impl Expr {
    pub fn is_null(expr: impl Into<Self>) -> Self {
        ExprIsNull::new(expr, false)
    }

    pub fn is_not_null(expr: impl Into<Self>) -> Self {
        ExprIsNull::new(expr, true)
    }
}

impl From<ExprIsNull> for Expr {
    fn from(value: ExprIsNull) -> Self {
        Self::IsNull(value)
    }
}
