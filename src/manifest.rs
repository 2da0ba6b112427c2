//! Extension manifests
//!
//! Installed extensions declare additional back-office assets through a
//! package manifest. Only the consumed contract lives here; discovering
//! manifest files on disk belongs to the hosting layer.

use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// Asset block of a package manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Script identifiers to load with the back-office.
    #[serde(default)]
    pub javascript: Vec<String>,
    /// Stylesheet identifiers to load with the back-office.
    #[serde(default)]
    pub css: Vec<String>,
}

/// Source of extension-declared script identifiers.
pub trait ManifestSource: Send + Sync {
    /// Script identifiers declared by installed extensions, in declaration
    /// order.
    fn scripts(&self) -> Result<Vec<String>, AssetError>;
}

/// In-memory manifest collection.
#[derive(Debug, Clone, Default)]
pub struct StaticManifests {
    manifests: Vec<PackageManifest>,
}

impl StaticManifests {
    pub fn new(manifests: Vec<PackageManifest>) -> Self {
        Self { manifests }
    }

    /// No installed extensions.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl ManifestSource for StaticManifests {
    fn scripts(&self) -> Result<Vec<String>, AssetError> {
        Ok(self
            .manifests
            .iter()
            .flat_map(|manifest| manifest.javascript.iter().cloned())
            .collect())
    }
}
