//! Caller-supplied dispatch functions.
//!
//! The root `node` field hands the raw `id` argument to a [`NodeFetcher`]
//! without decoding it. The fetcher owns identifier interpretation: it may
//! decode a global id (see [`NodeRegistry`](crate::NodeRegistry)) or use a
//! scheme of its own.

use std::sync::Arc;

use async_graphql::dynamic::FieldValue;
use async_graphql::{Context, Result};
use async_trait::async_trait;

use crate::field::ResolveInfo;

/// Resolves an identifier to a domain object.
///
/// `Ok(None)` means "not found" and resolves to `null`. Errors surface as
/// field errors on the response.
#[async_trait]
pub trait NodeFetcher: Send + Sync {
    async fn fetch(&self, id: &str, ctx: &Context<'_>) -> Result<Option<FieldValue<'static>>>;
}

#[async_trait]
impl<T: NodeFetcher + ?Sized> NodeFetcher for Arc<T> {
    async fn fetch(&self, id: &str, ctx: &Context<'_>) -> Result<Option<FieldValue<'static>>> {
        (**self).fetch(id, ctx).await
    }
}

/// Maps a fetched object to the name of its concrete type.
pub type TypeResolver = Arc<dyn Fn(&FieldValue<'_>) -> Option<String> + Send + Sync>;

/// Custom resolver for the `id` field of every object implementing the
/// interface.
pub type IdResolver =
    Arc<dyn Fn(&FieldValue<'_>, &Context<'_>, &ResolveInfo<'_>) -> Result<String> + Send + Sync>;
