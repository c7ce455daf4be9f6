use super::{Comma, Conjuncts, Ident, Params, ToSql};

use crate::stmt::{CreateTable, DropTable, Statement};
use tombstone_core::{
    driver::Flavor,
    stmt::{self, StatementKind},
};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        // SQLite declares its auto-increment key inline
        let inline_pk =
            f.serializer.flavor == Flavor::Sqlite && self.columns.iter().any(|c| c.auto_increment);

        fmt!(f, "CREATE TABLE " Ident(&self.name) " (");

        for (index, column) in self.columns.iter().enumerate() {
            fmt!(f, "\n    " column);
            if index < self.columns.len() - 1 {
                fmt!(f, ",");
            }
        }

        if !self.primary_key.is_empty() && !inline_pk {
            let columns = Comma(self.primary_key.iter().map(Ident));
            fmt!(f, ",\n    PRIMARY KEY (" columns ")");
        }

        fmt!(f, "\n)");
    }
}

impl ToSql for &DropTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "DROP TABLE ");

        if self.if_exists {
            fmt!(f, "IF EXISTS ");
        }

        fmt!(f, Ident(&self.name));
    }
}

struct Where<'a>(&'a stmt::Filter);

impl ToSql for Where<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if !self.0.is_empty() {
            fmt!(f, " WHERE " Conjuncts(self.0.exprs()));
        }
    }
}

struct Assignment<'a> {
    column: &'a str,
    expr: &'a stmt::Expr,
}

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Ident(self.column) " = " self.expr);
    }
}

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);
        let model = &self.schema;

        match self.kind {
            StatementKind::Select => {
                let columns = Comma(model.fields.iter().map(|field| Ident(&field.column)));
                let limit = self.limit.map(|limit| (" LIMIT ", limit));

                fmt!(f, "SELECT " columns " FROM " table Where(&self.filter) limit);
            }
            StatementKind::Count => {
                fmt!(f, "SELECT COUNT(*) FROM " table Where(&self.filter));
            }
            StatementKind::Update => {
                let assignments = Comma(self.assignments.iter().map(|(field, assignment)| {
                    Assignment {
                        column: &model.field(field).column,
                        expr: &assignment.expr,
                    }
                }));

                fmt!(f, "UPDATE " table " SET " assignments Where(&self.filter));
            }
            StatementKind::Delete => {
                fmt!(f, "DELETE FROM " table Where(&self.filter));
            }
            StatementKind::Insert => {
                if self.assignments.is_empty() {
                    match f.serializer.flavor {
                        Flavor::Mysql => fmt!(f, "INSERT INTO " table " () VALUES ()"),
                        _ => fmt!(f, "INSERT INTO " table " DEFAULT VALUES"),
                    }
                } else {
                    let columns = Comma(
                        self.assignments
                            .keys()
                            .map(|field| Ident(&model.field(field).column)),
                    );
                    let values = Comma(self.assignments.iter().map(|(_, a)| &a.expr));

                    fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
                }

                if !self.returning.is_empty() && f.serializer.flavor != Flavor::Mysql {
                    let returning = Comma(
                        self.returning
                            .iter()
                            .map(|field| Ident(&model.field(*field).column)),
                    );
                    fmt!(f, " RETURNING " returning);
                }
            }
        }
    }
}

impl<S: ToSql> ToSql for (&str, S) {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, self.0 self.1);
    }
}
