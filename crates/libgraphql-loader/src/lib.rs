//! Collects GraphQL schema fragments (type definitions plus the resolvers
//! that back them) from independently authored modules and merges them into
//! a single schema.
//!
//! Most callers construct a [`Loader`], [`load`](Loader::load) every module's
//! [`Fragment`] into it during startup, and then ask for the merged result
//! with [`Loader::get_schema()`]. Modules that would otherwise collide on
//! root-level field names can be namespaced first with [`Loader::wrap()`].
//!
//! A process-wide default [`Loader`] is also available through the free
//! functions [`load()`], [`get_schema()`], [`get_type_defs()`],
//! [`get_resolvers()`] and [`wrap()`].

pub mod ast;
mod default_loader;
mod file_reader;
mod fragment;
mod loader;
pub mod merge;
mod merged_schema;
mod operation_kind;
mod resolver;
mod resolver_entry;
mod resolver_map;

pub use default_loader::get_resolvers;
pub use default_loader::get_schema;
pub use default_loader::get_type_defs;
pub use default_loader::load;
pub use default_loader::with_default_loader;
pub use default_loader::wrap;
pub use file_reader::ReadContentError;
pub use fragment::Fragment;
pub use loader::Loader;
pub use merged_schema::MergedSchema;
pub use operation_kind::OperationKind;
pub use resolver::Resolver;
pub use resolver_entry::ResolverEntry;
pub use resolver_map::ResolverMap;

#[cfg(test)]
mod tests;
