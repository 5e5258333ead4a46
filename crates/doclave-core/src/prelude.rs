//! Prelude for the doclave-core crate
//!
//! Re-exports the most commonly used types from the crate to provide a
//! convenient single import for users.

pub use crate::error::{BoxedError, ErrorClass};
pub use crate::types::{DocumentRef, Metadata};
