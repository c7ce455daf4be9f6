use crate::{schema, stmt, Result};

/// A record type mapped to a table.
///
/// `to_record` and `load` use the field order of the description returned by
/// `schema`.
pub trait Model: Sized + Send + 'static {
    /// Describes the mapped fields.
    fn schema() -> schema::ModelBuilder;

    /// Load an instance of the model, populating fields using the given row.
    fn load(record: stmt::ValueRecord) -> Result<Self>;

    /// Current field values, one per field.
    fn to_record(&self) -> stmt::ValueRecord;
}
