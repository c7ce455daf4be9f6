use super::Operation;

use crate::schema::Model;

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CreateTable {
    pub model: Arc<Model>,
}

impl From<CreateTable> for Operation {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
