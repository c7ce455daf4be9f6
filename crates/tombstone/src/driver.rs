pub use tombstone_core::driver::{
    operation::{self, Operation},
    Capability, Driver, Flavor, Response, Rows,
};
