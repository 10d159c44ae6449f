use thiserror::Error;

use relay_globalid::GlobalIdError;

/// Errors raised while building or resolving node definitions.
///
/// Every variant converts into [`async_graphql::Error`] through its
/// `Display` impl, so returning one from a resolver surfaces it as a field
/// error on the response.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("{type_name} object has no local identity to build an id from")]
    MissingIdentity { type_name: String },

    #[error("type resolver could not determine a concrete type for the fetched node")]
    UnresolvedType,

    #[error(transparent)]
    GlobalId(#[from] GlobalIdError),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type NodeResult<T> = Result<T, NodeError>;

impl NodeError {
    pub(crate) fn missing_identity(type_name: &str) -> Self {
        Self::MissingIdentity {
            type_name: type_name.to_string(),
        }
    }
}
