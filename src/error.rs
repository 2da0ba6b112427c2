//! Error types for bootstrap assembly and resource loading.

use thiserror::Error;

/// Errors produced while assembling the back-office bootstrap.
///
/// Resource errors (`ResourceRead`, `ResourceParse`) are configuration
/// failures and fatal for the calling request; the rest describe bad
/// run-time data. Everything is deterministic and local, so no variant is
/// worth retrying.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Template token count does not match the supplied values.
    #[error("malformed template: expected {expected} token(s), found {found}")]
    MalformedTemplate { expected: usize, found: usize },

    /// A script identifier would corrupt the serialized array literal.
    #[error("malformed script identifier (embedded quote): {identifier}")]
    MalformedScriptIdentifier { identifier: String },

    /// A resource file could not be read.
    #[error("resource '{name}' could not be read")]
    ResourceRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A resource did not parse as the expected JSON string array.
    #[error("resource '{name}' is not a JSON string array")]
    ResourceParse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The optimizer collaborator failed.
    #[error("asset optimizer failed: {0}")]
    Optimizer(#[from] anyhow::Error),
}
