use super::Operation;

use crate::schema::Model;

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DropTable {
    pub model: Arc<Model>,
}

impl From<DropTable> for Operation {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
