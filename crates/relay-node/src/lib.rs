//! Global object identification for async-graphql dynamic schemas.
//!
//! Builds the pieces a schema needs so that any object can be refetched by
//! an opaque id:
//!
//! - [`NodeDefinitions`] — the `Node` interface plus the `node` root field,
//!   dispatching to a caller-supplied [`NodeFetcher`]
//! - [`GlobalIdField`] — the `id` field of a concrete type, rendering
//!   [`relay_globalid`] tokens
//! - [`NodeRegistry`] — a fetcher that decodes tokens and routes by type
//!
//! The root field never decodes the `id` argument itself; the fetcher
//! owns identifier interpretation.

pub mod config;
pub mod definitions;
pub mod error;
pub mod fetcher;
pub mod field;
pub mod registry;

#[cfg(test)]
mod test_support;

pub use config::NodeConfig;
pub use definitions::NodeDefinitions;
pub use error::{NodeError, NodeResult};
pub use fetcher::{IdResolver, NodeFetcher, TypeResolver};
pub use field::{GlobalIdField, Identifiable, ResolveInfo};
pub use registry::NodeRegistry;

pub use relay_globalid::{decode_global_id, encode_global_id, GlobalId, GlobalIdError};
