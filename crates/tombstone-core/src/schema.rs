mod builder;
pub use builder::Builder;

mod field;
pub use field::{Field, FieldBuilder, FieldDefault, FieldId};

mod model;
pub use model::{Model, ModelBuilder, ModelId, PrimaryKey};

mod soft_delete;
pub use soft_delete::SoftDelete;

mod tag;
pub use tag::TagSettings;

mod time_unit;
pub use time_unit::TimeUnit;

use std::sync::Arc;

/// Every model registered with a `Db`.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: Vec<Arc<Model>>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn model(&self, id: impl Into<ModelId>) -> &Arc<Model> {
        let id = id.into();
        &self.models[id.0]
    }

    pub fn models(&self) -> impl Iterator<Item = &Arc<Model>> {
        self.models.iter()
    }
}
