//! Back-office host settings.

use serde::{Deserialize, Serialize};

/// Request-independent inputs to bootstrap assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackofficeSettings {
    /// Virtual path the back-office is served under.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Client application module booted on the host page.
    #[serde(default = "default_module_name")]
    pub module_name: String,
}

impl Default for BackofficeSettings {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            module_name: default_module_name(),
        }
    }
}

fn default_base_path() -> String {
    "/backoffice".to_string()
}

fn default_module_name() -> String {
    "backofficeApp".to_string()
}
