use super::{Comma, Conjuncts, Ident, Params, ToSql};

use tombstone_core::stmt::{self, TableRef};

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) if expr.operands.len() == 1 => {
                fmt!(f, Conjuncts(&expr.operands));
            }
            And(expr) => {
                fmt!(f, "(" Conjuncts(&expr.operands) ")");
            }
            BinaryOp(expr) => {
                fmt!(f, expr.lhs.as_ref() " " expr.op " " expr.rhs.as_ref());
            }
            Column(expr) => {
                match &expr.table {
                    Some(TableRef::Current) => {
                        let table = f.table;
                        fmt!(f, Ident(table) ".");
                    }
                    Some(TableRef::Name(name)) => fmt!(f, Ident(name) "."),
                    None => {}
                }
                fmt!(f, Ident(&expr.name));
            }
            InList(expr) => match &expr.list[..] {
                [] => fmt!(f, &*expr.expr " IN (NULL)"),
                [item] => fmt!(f, &*expr.expr " = " item),
                list => fmt!(f, &*expr.expr " IN (" Comma(list) ")"),
            },
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, &*expr.expr " IS NOT NULL");
                } else {
                    fmt!(f, &*expr.expr " IS NULL");
                }
            }
            Or(expr) if expr.operands.len() == 1 => {
                fmt!(f, &expr.operands[0]);
            }
            Or(expr) => {
                let mut s = "(";
                for operand in &expr.operands {
                    fmt!(f, s operand);
                    s = " OR ";
                }
                fmt!(f, ")");
            }
            Record(expr) => {
                fmt!(f, "(" Comma(&expr.fields) ")");
            }
            Value(expr) => expr.to_sql(f),
        }
    }
}

impl ToSql for stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Ne => "<>",
        })
    }
}
