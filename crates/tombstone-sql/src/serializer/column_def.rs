use super::{Ident, Params, ToSql};

use crate::stmt::ColumnDef;
use tombstone_core::driver::Flavor;

impl ToSql for &ColumnDef {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        fmt!(f, Ident(&self.name) " ");

        if self.auto_increment {
            match f.serializer.flavor {
                // Auto-increment requires the column to be the sole integer
                // primary key
                Flavor::Sqlite => fmt!(f, "INTEGER PRIMARY KEY AUTOINCREMENT"),
                Flavor::Postgresql => {
                    fmt!(f, self.ty " GENERATED BY DEFAULT AS IDENTITY NOT NULL")
                }
                Flavor::Mysql => fmt!(f, self.ty " NOT NULL AUTO_INCREMENT"),
            }
            return;
        }

        fmt!(f, self.ty);

        if self.not_null {
            fmt!(f, " NOT NULL");
        }
    }
}
