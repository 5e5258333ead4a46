//! Prelude for the doclave-object crate
//!
//! Re-exports the most commonly used types from the crate to provide a
//! convenient single import for users.

pub use doclave_core::{BoxedError, ErrorClass, Metadata};

pub use crate::client::{ReadOutput, StoreClient};
pub use crate::store::JsonStore;
pub use crate::{Error, Result};
