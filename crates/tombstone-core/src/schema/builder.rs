use super::{Model, ModelBuilder, ModelId, Schema};
use crate::Result;

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    table_name_prefix: Option<String>,
    models: Vec<ModelBuilder>,
}

impl Builder {
    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Adds a model description, returning the identifier it will be built
    /// with.
    pub fn model(&mut self, model: ModelBuilder) -> ModelId {
        let id = ModelId(self.models.len());
        self.models.push(model);
        id
    }

    pub fn build(&self) -> Result<Schema> {
        let mut models: Vec<Arc<Model>> = Vec::with_capacity(self.models.len());

        for (index, builder) in self.models.iter().enumerate() {
            let mut model = builder.build(ModelId(index))?;

            if let Some(prefix) = &self.table_name_prefix {
                model.table = format!("{prefix}{}", model.table);
            }

            if let Some(other) = models.iter().find(|m| m.table == model.table) {
                return Err(crate::Error::invalid_schema(format!(
                    "models `{}` and `{}` both map to table `{}`",
                    other.name, model.name, model.table
                )));
            }

            models.push(Arc::new(model));
        }

        Ok(Schema { models })
    }
}
