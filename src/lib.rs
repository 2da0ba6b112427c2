//! Back-office bootstrap assembly
//!
//! Builds the JavaScript bootstrap a CMS back-office page embeds: packaged
//! script lists, extension-manifest scripts and caller extras are
//! deduplicated, passed through an optimizer collaborator, serialized into
//! an array literal and substituted into the bootstrap template by
//! positional token replacement. A raw-literal escape (`"@@..."`) lets a
//! function expression survive the JSON-shaped context unquoted.
//!
//! # Quick start
//!
//! ```rust
//! use backoffice_assets::{
//!     BackofficeSettings, PassthroughOptimizer, ScriptInitialization,
//!     ScriptResources, ScriptSet, StaticManifests,
//! };
//!
//! let init = ScriptInitialization::new(
//!     ScriptResources::packaged().unwrap(),
//!     Box::new(StaticManifests::empty()),
//!     Box::new(PassthroughOptimizer),
//! );
//!
//! let bootstrap = init
//!     .build(ScriptSet::Main, &BackofficeSettings::default(), &[])
//!     .unwrap();
//! assert!(bootstrap.contains("angular.bootstrap"));
//! ```

// Core error handling
pub mod error;

// Array-literal serialization and token substitution
pub mod assembler;

// Packaged template and default script lists
pub mod resources;

// Consumed collaborator contracts
pub mod manifest;
pub mod optimizer;

// Host settings and per-request orchestration
pub mod config;
pub mod init;

pub use assembler::{substitute_tokens, ScriptListAssembler, RAW_PREFIX};
pub use config::BackofficeSettings;
pub use error::AssetError;
pub use init::ScriptInitialization;
pub use manifest::{ManifestSource, PackageManifest, StaticManifests};
pub use optimizer::{AssetKind, AssetOptimizer, PassthroughOptimizer};
pub use resources::{ScriptResources, ScriptSet, BOOTSTRAP_TEMPLATE};
