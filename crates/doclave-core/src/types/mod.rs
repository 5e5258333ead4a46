//! Address and metadata types shared by the service wrappers.

mod document_ref;
mod metadata;

pub use document_ref::DocumentRef;
pub use metadata::Metadata;
