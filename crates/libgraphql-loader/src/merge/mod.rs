//! The two merger seams a [`Loader`](crate::Loader) depends on, plus the
//! default implementation of each.
//!
//! A [`TypeDefsMerger`] turns every accumulated type-definition string into one
//! document; a [`ResolversMerger`] turns every accumulated
//! [`ResolverMap`](crate::ResolverMap) into one. The
//! [`Loader`](crate::Loader) treats both as black boxes and forwards their
//! [`SchemaMergeError`]s untouched.

mod deep_resolvers_merger;
mod document_type_defs_merger;
mod merge_type_defs_config;
mod resolvers_merger;
mod schema_merge_error;
mod type_defs_merger;

pub use deep_resolvers_merger::DeepResolversMerger;
pub use document_type_defs_merger::DocumentTypeDefsMerger;
pub use merge_type_defs_config::MergeTypeDefsConfig;
pub use resolvers_merger::ResolversMerger;
pub use schema_merge_error::SchemaMergeError;
pub use type_defs_merger::TypeDefsMerger;
