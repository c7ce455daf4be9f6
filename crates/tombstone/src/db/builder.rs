use super::Db;
use crate::{driver::Driver, engine::Engine, Config, Model, Result, Sentinels};

use chrono::{DateTime, Utc};
use tombstone_core::schema::{self, ModelId};

use std::{any::TypeId, collections::HashMap, sync::Arc};

#[derive(Default)]
pub struct Builder {
    /// Registered record types
    models: HashMap<TypeId, ModelId>,

    /// Schema builder
    core: schema::Builder,

    config: Config,
}

impl Builder {
    pub fn register<M: Model>(&mut self) -> &mut Self {
        if !self.models.contains_key(&TypeId::of::<M>()) {
            let id = self.core.model(M::schema());
            self.models.insert(TypeId::of::<M>(), id);
        }
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    /// Permit UPDATE and DELETE statements without any WHERE predicate.
    pub fn allow_global_update(&mut self, allow: bool) -> &mut Self {
        self.config.allow_global_update = allow;
        self
    }

    /// Replace the clock used to stamp deletions.
    pub fn now(&mut self, now: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> &mut Self {
        self.config.now = Arc::new(now);
        self
    }

    pub fn sentinels(&mut self, sentinels: Sentinels) -> &mut Self {
        self.config.sentinels = sentinels;
        self
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.build_with(Arc::new(driver))
    }

    /// Build a `Db` with the driver selected by the URL scheme.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let driver = super::connect::driver(url)?;
        self.build_with(driver)
    }

    fn build_with(&mut self, driver: Arc<dyn Driver>) -> Result<Db> {
        let schema = self.core.build()?;

        tracing::debug!(
            models = schema.models.len(),
            flavor = ?driver.capability().flavor,
            "schema built"
        );

        let engine = Engine::new(schema, self.models.clone(), self.config.clone(), driver);

        Ok(Db {
            engine: Arc::new(engine),
        })
    }
}
