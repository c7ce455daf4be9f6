use super::{Formatter, Params, ToSql};

use tombstone_core::stmt::Expr;

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// Expressions joined with AND, except that an OR node with a single operand
/// joins to its predecessor with OR.
pub(super) struct Conjuncts<'a>(pub(super) &'a [Expr]);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ", ";
        }
    }
}

impl ToSql for Conjuncts<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        for (i, expr) in self.0.iter().enumerate() {
            match expr {
                Expr::Or(or) if or.operands.len() == 1 => {
                    if i > 0 {
                        fmt!(f, " OR ");
                    }
                    fmt!(f, &or.operands[0]);
                }
                expr => {
                    if i > 0 {
                        fmt!(f, " AND ");
                    }
                    fmt!(f, expr);
                }
            }
        }
    }
}
