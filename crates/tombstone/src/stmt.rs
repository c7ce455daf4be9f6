mod delete;
pub use delete::Delete;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

pub use tombstone_core::stmt::*;
