#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;

pub mod types;

#[doc(hidden)]
pub mod prelude;

// Re-export key types for convenience
pub use crate::error::{BoxedError, ErrorClass};
pub use crate::types::{DocumentRef, Metadata};
