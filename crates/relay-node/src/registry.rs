use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dynamic::FieldValue;
use async_graphql::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use relay_globalid::decode_global_id;

use crate::error::NodeError;
use crate::fetcher::NodeFetcher;

/// A [`NodeFetcher`] that decodes global ids and dispatches on type name.
///
/// Each registered fetcher receives the *local* id and its result is tagged
/// with the type it was registered under, so no type resolver is needed.
/// Malformed tokens are field errors; ids of unregistered types resolve to
/// `null`.
#[derive(Clone, Default)]
pub struct NodeRegistry {
    fetchers: HashMap<String, Arc<dyn NodeFetcher>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route ids of `type_name` to `fetcher`, replacing any earlier entry.
    pub fn register(
        mut self,
        type_name: impl Into<String>,
        fetcher: impl NodeFetcher + 'static,
    ) -> Self {
        self.fetchers.insert(type_name.into(), Arc::new(fetcher));
        self
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.fetchers.contains_key(type_name)
    }

    /// Registered type names, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.fetchers.keys().map(String::as_str)
    }
}

#[async_trait]
impl NodeFetcher for NodeRegistry {
    async fn fetch(&self, id: &str, ctx: &Context<'_>) -> Result<Option<FieldValue<'static>>> {
        let global_id = decode_global_id(id).map_err(NodeError::from)?;
        let (type_name, local_id) = global_id.into_parts();
        let Some(fetcher) = self.fetchers.get(&type_name) else {
            debug!(%type_name, "no fetcher registered for type");
            return Ok(None);
        };
        let value = fetcher.fetch(&local_id, ctx).await?;
        Ok(value.map(|value| value.with_type(type_name)))
    }
}
