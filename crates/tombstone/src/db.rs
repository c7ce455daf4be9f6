mod builder;
pub use builder::Builder;

mod connect;

use crate::{
    driver::Capability,
    engine::Engine,
    schema::{FieldDefault, Schema},
    stmt::{self, Delete, Select, Update, Value},
    Config, Model, Result, Statement,
};

use std::sync::Arc;

/// A database handle.
///
/// Cloning is cheap; clones share the schema, configuration and driver.
#[derive(Clone, Debug)]
pub struct Db {
    pub(crate) engine: Arc<Engine>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Creates the tables of every registered model.
    pub async fn push_schema(&self) -> Result<()> {
        self.engine.push_schema().await
    }

    /// Drops and recreates the tables of every registered model.
    pub async fn reset_db(&self) -> Result<()> {
        self.engine.reset_db().await
    }

    /// Inserts `model`.
    ///
    /// Null fields take their declared default, and a database-assigned key
    /// is written back.
    pub async fn create<M: Model>(&self, model: &mut M) -> Result<()> {
        let schema = self.engine.model::<M>()?.clone();
        let mut record = model.to_record();

        if record.len() != schema.fields.len() {
            return Err(tombstone_core::err!(
                "`{}` produced {} values for {} fields",
                schema.name,
                record.len(),
                schema.fields.len()
            ));
        }

        let mut stmt = Statement::new(stmt::StatementKind::Insert, schema.clone());
        let mut generated = None;

        for field in &schema.fields {
            let slot = &mut record[field.id.index];

            if field.auto_increment && slot.is_zero() {
                generated = Some(field);
                continue;
            }

            if slot.is_null() {
                if let Some(FieldDefault::Value(default)) = &field.default {
                    *slot = default.clone();
                }
            }

            stmt.assignments.set(field.id, slot.clone());
        }

        let generated = generated.filter(|_| self.engine.capability().returning);
        let mut ret = None;

        if let Some(field) = generated {
            stmt.returning = vec![field.id];
            ret = Some(vec![field.ty]);
        }

        let stmt = self.engine.build(stmt)?;
        let response = self.engine.exec(stmt, ret).await?;

        if let Some(field) = generated {
            let Some(mut row) = response.rows.into_values().into_iter().next() else {
                return Err(crate::Error::record_not_found(format!(
                    "no key returned for `{}`",
                    schema.table
                )));
            };

            record[field.id.index] = row.take(0);
        }

        *model = M::load(record)?;
        Ok(())
    }

    pub fn query<M: Model>(&self) -> Select<'_, M> {
        Select::new(self)
    }

    pub fn update<M: Model>(&self) -> Update<'_, M> {
        Update::new(self)
    }

    pub fn delete_where<M: Model>(&self) -> Delete<'_, M> {
        Delete::new(self)
    }

    /// Deletes `model`, soft-deleting it when the model has a marking field.
    ///
    /// The marking values are written back into `model`.
    pub async fn delete<M: Model>(&self, model: &mut M) -> Result<u64> {
        let (count, dest) = self.delete_where::<M>().record(model).exec_with_dest().await?;
        *model = M::load(dest.to_record()?)?;
        Ok(count)
    }

    /// Deletes every model in `models` with one statement.
    pub async fn delete_many<M: Model>(&self, models: &mut [M]) -> Result<u64> {
        let (count, dest) = self
            .delete_where::<M>()
            .records(models)
            .exec_with_dest()
            .await?;

        if let Value::List(items) = dest {
            for (model, item) in models.iter_mut().zip(items) {
                *model = M::load(item.to_record()?)?;
            }
        }

        Ok(count)
    }

    /// Builds the statement `delete` would execute, without executing it.
    pub fn delete_statement<M: Model>(&self, model: &M) -> Result<Statement> {
        self.delete_where::<M>().record(model).to_statement()
    }

    pub fn schema(&self) -> &Schema {
        &self.engine.schema
    }

    pub fn config(&self) -> &Config {
        &self.engine.config
    }

    pub fn capability(&self) -> &Capability {
        self.engine.capability()
    }
}
