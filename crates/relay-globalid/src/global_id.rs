use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{decode_global_id, encode_global_id, SEPARATOR};
use crate::error::GlobalIdError;

/// A decoded global id: the type name and the identifier local to that type.
///
/// Serializes as its opaque token, so a `GlobalId` embedded in JSON looks
/// exactly like what a GraphQL client sees in an `id` field.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GlobalId {
    type_name: String,
    local_id: String,
}

impl GlobalId {
    /// Create a global id, rejecting type names that contain the separator.
    pub fn new(
        type_name: impl Into<String>,
        local_id: impl fmt::Display,
    ) -> Result<Self, GlobalIdError> {
        let type_name = type_name.into();
        if type_name.contains(SEPARATOR) {
            return Err(GlobalIdError::InvalidTypeName(type_name));
        }
        Ok(Self {
            type_name,
            local_id: local_id.to_string(),
        })
    }

    /// Build from parts already split by the decoder.
    pub(crate) fn from_parts(type_name: &str, local_id: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            local_id: local_id.to_string(),
        }
    }

    /// Name of the type the id belongs to.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Identifier local to [`type_name`](Self::type_name).
    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    /// Split into `(type_name, local_id)`.
    pub fn into_parts(self) -> (String, String) {
        (self.type_name, self.local_id)
    }

    /// The opaque token for this id.
    pub fn to_token(&self) -> String {
        encode_global_id(&self.type_name, &self.local_id)
    }

    /// Returns `true` if the id belongs to `type_name`.
    pub fn is_type(&self, type_name: &str) -> bool {
        self.type_name == type_name
    }
}

impl fmt::Debug for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GlobalId({}{SEPARATOR}{})", self.type_name, self.local_id)
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_token())
    }
}

impl FromStr for GlobalId {
    type Err = GlobalIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_global_id(s)
    }
}

impl TryFrom<String> for GlobalId {
    type Error = GlobalIdError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        decode_global_id(&token)
    }
}

impl From<GlobalId> for String {
    fn from(id: GlobalId) -> Self {
        id.to_token()
    }
}
