use crate::{
    driver::{
        operation::{CreateTable, DropTable, QuerySql},
        Capability, Driver, Response,
    },
    schema::{self, ModelId, Schema},
    soft_delete::{self, Rules},
    stmt::{StatementKind, Type},
    Config, Error, Model, Result, Statement,
};
use tombstone_sql::Serializer;

use std::{any::TypeId, collections::HashMap, fmt, sync::Arc};

/// Builds statements for registered models and hands them to the driver.
pub(crate) struct Engine {
    pub(crate) schema: Schema,

    /// Registered record types
    models: HashMap<TypeId, ModelId>,

    /// Build-phase behaviors, indexed by model id
    rules: Vec<Rules>,

    pub(crate) config: Config,

    driver: Arc<dyn Driver>,

    serializer: Serializer,
}

impl Engine {
    pub(crate) fn new(
        schema: Schema,
        models: HashMap<TypeId, ModelId>,
        config: Config,
        driver: Arc<dyn Driver>,
    ) -> Engine {
        let rules = schema.models().map(|model| Rules::compile(model)).collect();
        let serializer = Serializer::new(driver.capability().flavor);

        Engine {
            schema,
            models,
            rules,
            config,
            driver,
            serializer,
        }
    }

    pub(crate) fn model<M: Model>(&self) -> Result<&Arc<schema::Model>> {
        match self.models.get(&TypeId::of::<M>()) {
            Some(id) => Ok(self.schema.model(*id)),
            None => Err(tombstone_core::err!(
                "model `{}` is not registered",
                std::any::type_name::<M>()
            )),
        }
    }

    pub(crate) fn capability(&self) -> &'static Capability {
        self.driver.capability()
    }

    /// Runs the build phases matching the statement kind, then generates its
    /// SQL.
    pub(crate) fn build(&self, mut stmt: Statement) -> Result<Statement> {
        if stmt.kind == StatementKind::Update {
            self.check_scoped(&stmt, "UPDATE")?;
        }

        if let Some(rules) = self.rules.get(stmt.schema.id.0) {
            rules.apply(&mut stmt, &self.config)?;
        }

        // Physical delete
        if stmt.kind == StatementKind::Delete {
            soft_delete::scope(&mut stmt);

            self.check_scoped(&stmt, "DELETE")?;
        }

        self.serializer.finalize(&mut stmt);
        Ok(stmt)
    }

    fn check_scoped(&self, stmt: &Statement, verb: &str) -> Result<()> {
        if stmt.filter.is_empty() && !self.config.allow_global_update {
            return Err(Error::missing_filter(format!("{verb} on `{}`", stmt.table)));
        }

        Ok(())
    }

    /// Executes a built statement. `ret` lists the column types of returned
    /// rows; `None` returns the affected row count.
    pub(crate) async fn exec(&self, stmt: Statement, ret: Option<Vec<Type>>) -> Result<Response> {
        tracing::debug!(
            model = %stmt.schema.name,
            sql = %stmt.sql,
            params = stmt.params.len(),
            "exec"
        );

        self.driver.exec(QuerySql { stmt, ret }.into()).await
    }

    pub(crate) async fn push_schema(&self) -> Result<()> {
        for model in self.schema.models() {
            tracing::debug!(table = %model.table, "create table");
            self.driver
                .exec(
                    CreateTable {
                        model: model.clone(),
                    }
                    .into(),
                )
                .await?;
        }

        Ok(())
    }

    pub(crate) async fn reset_db(&self) -> Result<()> {
        for model in self.schema.models() {
            tracing::debug!(table = %model.table, "drop table");
            self.driver
                .exec(
                    DropTable {
                        model: model.clone(),
                    }
                    .into(),
                )
                .await?;
        }

        self.push_schema().await
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("schema", &self.schema)
            .field("config", &self.config)
            .field("driver", &self.driver)
            .finish()
    }
}
