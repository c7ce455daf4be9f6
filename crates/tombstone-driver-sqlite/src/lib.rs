mod value;
pub(crate) use value::Value;

use rusqlite::Connection;
use std::{
    path::Path,
    sync::{Mutex, PoisonError},
};
use tombstone_core::{
    async_trait,
    driver::{
        operation::{CreateTable, DropTable, Operation, QuerySql},
        Capability, Driver, Response,
    },
    stmt, Error, Result,
};
use tombstone_sql::{self as sql, Serializer};
use url::Url;

#[derive(Debug)]
pub struct Sqlite {
    connection: Mutex<Connection>,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self::from_connection(connection))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self::from_connection(connection))
    }

    fn from_connection(connection: Connection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    fn exec_sync(&self, op: Operation) -> Result<Response> {
        // A panic mid-statement leaves no partial state on the connection
        let connection = self
            .connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match op {
            Operation::CreateTable(CreateTable { model }) => {
                execute_ddl(&connection, sql::Statement::create_table(&model))
            }
            Operation::DropTable(DropTable { model }) => {
                execute_ddl(&connection, sql::Statement::drop_table_if_exists(&model))
            }
            Operation::QuerySql(op) => query_sql(&connection, op),
        }
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        self.exec_sync(op)
    }
}

fn execute_ddl(connection: &Connection, stmt: sql::Statement) -> Result<Response> {
    let mut params = Vec::<stmt::Value>::new();
    let sql = Serializer::sqlite().serialize(&stmt, &mut params);

    tracing::trace!(%sql, "sqlite ddl");

    connection
        .execute(&sql, [])
        .map_err(Error::driver_operation_failed)?;

    Ok(Response::empty())
}

fn query_sql(connection: &Connection, op: QuerySql) -> Result<Response> {
    let QuerySql { mut stmt, ret } = op;

    Serializer::sqlite().finalize(&mut stmt);

    tracing::trace!(sql = %stmt.sql, params = stmt.params.len(), "sqlite query");

    let mut prepared = connection
        .prepare_cached(&stmt.sql)
        .map_err(Error::driver_operation_failed)?;

    let params = stmt
        .params
        .into_iter()
        .map(Value::from)
        .collect::<Vec<_>>();

    let Some(ret_tys) = ret else {
        let count = prepared
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        return Ok(Response::count(count as u64));
    };

    let mut rows = prepared
        .query(rusqlite::params_from_iter(params.iter()))
        .map_err(Error::driver_operation_failed)?;

    let mut ret = vec![];

    while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
        let mut items = Vec::with_capacity(ret_tys.len());

        for (index, ty) in ret_tys.iter().enumerate() {
            items.push(Value::from_sql(row, index, *ty)?.into_inner());
        }

        ret.push(stmt::ValueRecord::from_vec(items));
    }

    Ok(Response::values(ret))
}
