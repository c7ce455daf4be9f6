use super::{BinaryOp, Expr};

/// A comparison such as `"users"."is_del" = 0`.
///
/// The marking predicates compare a column against the active value, so the
/// column is usually `lhs` and a parameter `rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

macro_rules! comparisons {
    ( $( $(#[$meta:meta])* $name:ident => $op:ident, )* ) => {
        impl Expr {
            $(
                $(#[$meta])*
                pub fn $name(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
                    Expr::binary_op(lhs, BinaryOp::$op, rhs)
                }
            )*
        }
    };
}

comparisons! {
    /// `lhs = rhs`. Comparing against `NULL` never matches; use
    /// [`Expr::is_null`] for null-default marking fields.
    eq => Eq,
    ne => Ne,
    lt => Lt,
    le => Le,
    gt => Gt,
    ge => Ge,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        Self::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        })
    }

    pub fn is_eq(&self) -> bool {
        match self {
            Self::BinaryOp(expr) => expr.op.is_eq(),
            _ => false,
        }
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
