use super::{Params, ToSql};

use tombstone_core::{driver::Flavor, stmt};

impl ToSql for stmt::Type {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        use stmt::Type::*;

        let flavor = f.serializer.flavor;

        fmt!(
            f,
            match (self, flavor) {
                (Bool, _) => "BOOLEAN",
                (I64 | U64, Flavor::Sqlite) => "INTEGER",
                (I64, _) => "BIGINT",
                (U64, Flavor::Mysql) => "BIGINT UNSIGNED",
                (U64, Flavor::Postgresql) => "BIGINT",
                (String, _) => "TEXT",
                // SQLite stores timestamps as text
                (DateTime, Flavor::Sqlite) => "TEXT",
                (DateTime, Flavor::Postgresql) => "TIMESTAMP",
                (DateTime, Flavor::Mysql) => "DATETIME(6)",
            }
        );
    }
}
