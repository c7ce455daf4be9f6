use std::sync::{Arc, Mutex};
use tombstone::driver::{Capability, Driver, Operation, Response};
use tombstone_core::{async_trait, Result};

/// SQL text of every statement executed through a [`LoggingDriver`].
#[derive(Debug, Clone, Default)]
pub struct SqlLog(Arc<Mutex<Vec<String>>>);

impl SqlLog {
    pub fn statements(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    fn push(&self, sql: String) {
        self.0.lock().unwrap().push(sql);
    }
}

/// A driver wrapper that logs executed statements for testing purposes
#[derive(Debug)]
pub struct LoggingDriver {
    /// The underlying driver that actually executes operations
    inner: Box<dyn Driver>,

    log: SqlLog,
}

impl LoggingDriver {
    pub fn new(driver: impl Driver) -> Self {
        Self {
            inner: Box::new(driver),
            log: SqlLog::default(),
        }
    }

    /// Get a handle to access the statement log
    pub fn sql_log(&self) -> SqlLog {
        self.log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn capability(&self) -> &'static Capability {
        self.inner.capability()
    }

    async fn exec(&self, operation: Operation) -> Result<Response> {
        if let Operation::QuerySql(query) = &operation {
            self.log.push(query.stmt.sql.clone());
        }

        self.inner.exec(operation).await
    }
}
