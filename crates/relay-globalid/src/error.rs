use thiserror::Error;

/// Errors produced by global id operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GlobalIdError {
    #[error("malformed global id {token:?}: {reason}")]
    Malformed {
        token: String,
        reason: MalformedReason,
    },

    #[error("type name {0:?} contains the reserved separator ':'")]
    InvalidTypeName(String),
}

/// Why a token could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8")]
    Utf8,

    #[error("payload has no ':' separator")]
    MissingSeparator,
}

impl GlobalIdError {
    pub(crate) fn malformed(token: &str, reason: impl Into<MalformedReason>) -> Self {
        Self::Malformed {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for decode-time failures.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
