mod config;
pub use config::{Config, NowFn};

pub mod db;
pub use db::Db;

pub mod driver;

mod engine;

mod model;
pub use model::Model;

pub mod soft_delete;
pub use soft_delete::{DeletedAt, DeletedDateTime, Sentinels};

pub mod stmt;
pub use stmt::Statement;

pub use tombstone_core::{schema, Error, Result};
