//! Packaged bootstrap resources
//!
//! The bootstrap template and the three default script lists ship embedded
//! in the binary and can be overridden from a directory on disk. Lists are
//! JSON string arrays loaded verbatim; a list that fails to read or parse
//! is a configuration error, distinct from bad run-time data.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::AssetError;

/// Bootstrap template carrying the three ordered placeholder tokens.
pub const BOOTSTRAP_TEMPLATE: &str = include_str!("../resources/bootstrap-init.js");

const MAIN_SCRIPTS: &str = include_str!("../resources/main-scripts.json");
const PREVIEW_SCRIPTS: &str = include_str!("../resources/preview-scripts.json");
const EDITOR_SCRIPTS: &str = include_str!("../resources/editor-scripts.json");

const TEMPLATE_RESOURCE: &str = "bootstrap-init.js";

/// The packaged script lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptSet {
    /// Scripts every back-office page loads.
    Main,
    /// Scripts for preview mode.
    Preview,
    /// Scripts for the rich-text editor.
    Editor,
}

impl ScriptSet {
    fn resource_name(self) -> &'static str {
        match self {
            ScriptSet::Main => "main-scripts.json",
            ScriptSet::Preview => "preview-scripts.json",
            ScriptSet::Editor => "editor-scripts.json",
        }
    }
}

/// Default script lists plus the bootstrap template.
#[derive(Debug, Clone)]
pub struct ScriptResources {
    template: String,
    main: Vec<String>,
    preview: Vec<String>,
    editor: Vec<String>,
}

impl ScriptResources {
    /// Load the resources embedded in the binary.
    pub fn packaged() -> Result<Self, AssetError> {
        Ok(Self {
            template: BOOTSTRAP_TEMPLATE.to_string(),
            main: parse_list(ScriptSet::Main.resource_name(), MAIN_SCRIPTS)?,
            preview: parse_list(ScriptSet::Preview.resource_name(), PREVIEW_SCRIPTS)?,
            editor: parse_list(ScriptSet::Editor.resource_name(), EDITOR_SCRIPTS)?,
        })
    }

    /// Load all four resources from a directory, e.g. a deployment override.
    pub fn from_dir(dir: &Path) -> Result<Self, AssetError> {
        let resources = Self {
            template: read_resource(dir, TEMPLATE_RESOURCE)?,
            main: parse_list_from(dir, ScriptSet::Main)?,
            preview: parse_list_from(dir, ScriptSet::Preview)?,
            editor: parse_list_from(dir, ScriptSet::Editor)?,
        };
        debug!(dir = %dir.display(), "loaded script resources from disk");
        Ok(resources)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// The packaged identifiers of one of the named lists, verbatim.
    pub fn scripts(&self, set: ScriptSet) -> &[String] {
        match set {
            ScriptSet::Main => &self.main,
            ScriptSet::Preview => &self.preview,
            ScriptSet::Editor => &self.editor,
        }
    }
}

fn read_resource(dir: &Path, name: &str) -> Result<String, AssetError> {
    fs::read_to_string(dir.join(name)).map_err(|source| AssetError::ResourceRead {
        name: name.to_string(),
        source,
    })
}

fn parse_list_from(dir: &Path, set: ScriptSet) -> Result<Vec<String>, AssetError> {
    let raw = read_resource(dir, set.resource_name())?;
    parse_list(set.resource_name(), &raw)
}

fn parse_list(name: &str, raw: &str) -> Result<Vec<String>, AssetError> {
    serde_json::from_str(raw).map_err(|source| AssetError::ResourceParse {
        name: name.to_string(),
        source,
    })
}
