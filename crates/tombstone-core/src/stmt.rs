mod assignments;
pub use assignments::{Assignment, Assignments};

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::{ExprColumn, TableRef};

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_record;
pub use expr_record::ExprRecord;

mod filter;
pub use filter::Filter;

mod op_binary;
pub use op_binary::BinaryOp;

mod statement;
pub use statement::{Statement, StatementKind};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_chrono;

mod value_record;
pub use value_record::ValueRecord;
