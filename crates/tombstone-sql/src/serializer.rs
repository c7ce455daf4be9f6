#[macro_use]
mod fmt;
use fmt::ToSql;

mod column_def;

mod delim;
use delim::{Comma, Conjuncts};

mod flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

use tombstone_core::{driver::Flavor, stmt};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Table that unqualified and current-table column references resolve
    /// against
    table: &'a str,
}

impl Serializer {
    /// Serializes a schema statement.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            table: "",
        };

        stmt.to_sql(&mut fmt);
        ret
    }

    /// Serializes a data statement, returning the SQL text.
    pub fn serialize_statement(&self, stmt: &stmt::Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            table: &stmt.table,
        };

        stmt.to_sql(&mut fmt);
        ret
    }

    /// Generates the SQL text and parameters of `stmt` in place.
    ///
    /// A statement that is already finalized is left untouched.
    pub fn finalize(&self, stmt: &mut stmt::Statement) {
        if stmt.is_finalized() {
            return;
        }

        let mut params = Vec::new();
        let sql = self.serialize_statement(stmt, &mut params);

        stmt.sql = sql;
        stmt.params = params;
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }
}
