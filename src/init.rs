//! Bootstrap initialization
//!
//! Glues the packaged lists, the extension manifests and the optimizer into
//! the text a host page embeds: union-dedup the identifier sources, let the
//! optimizer rewrite them, serialize the result and fill the template
//! tokens. Each call is independent and touches no shared mutable state, so
//! one instance can serve concurrent requests.

use std::collections::HashSet;
use tracing::debug;

use crate::assembler::ScriptListAssembler;
use crate::config::BackofficeSettings;
use crate::error::AssetError;
use crate::manifest::ManifestSource;
use crate::optimizer::{AssetKind, AssetOptimizer};
use crate::resources::{ScriptResources, ScriptSet};

/// Assembles the back-office bootstrap script for serving.
pub struct ScriptInitialization {
    resources: ScriptResources,
    manifests: Box<dyn ManifestSource>,
    optimizer: Box<dyn AssetOptimizer>,
}

impl ScriptInitialization {
    pub fn new(
        resources: ScriptResources,
        manifests: Box<dyn ManifestSource>,
        optimizer: Box<dyn AssetOptimizer>,
    ) -> Self {
        Self {
            resources,
            manifests,
            optimizer,
        }
    }

    /// Union the packaged list for `set`, the manifest-declared scripts and
    /// `extras`, collapse duplicates, and run the optimizer over the result.
    ///
    /// The returned order is unspecified; consumers needing a stable order
    /// must sort.
    pub fn optimize_script_files(
        &self,
        set: ScriptSet,
        extras: &[String],
    ) -> Result<Vec<String>, AssetError> {
        let mut files: HashSet<String> = self.resources.scripts(set).iter().cloned().collect();
        files.extend(self.manifests.scripts()?);
        files.extend(extras.iter().cloned());
        debug!(?set, count = files.len(), "collected script files");
        self.optimizer.optimize(AssetKind::Javascript, &files)
    }

    /// Build the final bootstrap text for `set`.
    pub fn build(
        &self,
        set: ScriptSet,
        settings: &BackofficeSettings,
        extras: &[String],
    ) -> Result<String, AssetError> {
        let files = self.optimize_script_files(set, extras)?;
        let literal = ScriptListAssembler::serialize(&files)?;
        ScriptListAssembler::assemble(
            self.resources.template(),
            &literal,
            &settings.base_path,
            &settings.module_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{PackageManifest, StaticManifests};
    use crate::optimizer::PassthroughOptimizer;

    fn init_with(manifests: Vec<PackageManifest>) -> ScriptInitialization {
        ScriptInitialization::new(
            ScriptResources::packaged().unwrap(),
            Box::new(StaticManifests::new(manifests)),
            Box::new(PassthroughOptimizer),
        )
    }

    fn manifest(scripts: &[&str]) -> PackageManifest {
        PackageManifest {
            javascript: scripts.iter().map(|s| s.to_string()).collect(),
            css: vec![],
        }
    }

    #[test]
    fn duplicate_sources_collapse() {
        let init = init_with(vec![
            manifest(&["ext/a.js", "ext/b.js"]),
            manifest(&["ext/b.js", "ext/c.js"]),
        ]);

        let files = init.optimize_script_files(ScriptSet::Main, &[]).unwrap();
        let unique: HashSet<_> = files.iter().cloned().collect();

        assert_eq!(unique.len(), files.len(), "no identifier appears twice");
        for name in ["ext/a.js", "ext/b.js", "ext/c.js"] {
            assert!(unique.contains(name));
        }
    }

    #[test]
    fn union_is_independent_of_source_order() {
        let forward = init_with(vec![
            manifest(&["ext/a.js", "ext/b.js"]),
            manifest(&["ext/b.js", "ext/c.js"]),
        ]);
        let reversed = init_with(vec![
            manifest(&["ext/b.js", "ext/c.js"]),
            manifest(&["ext/a.js", "ext/b.js"]),
        ]);

        let lhs: HashSet<_> = forward
            .optimize_script_files(ScriptSet::Main, &[])
            .unwrap()
            .into_iter()
            .collect();
        let rhs: HashSet<_> = reversed
            .optimize_script_files(ScriptSet::Main, &[])
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn extras_join_the_set() {
        let init = init_with(vec![]);
        let extras = vec!["custom/boot.js".to_string()];

        let files = init.optimize_script_files(ScriptSet::Main, &extras).unwrap();
        assert!(files.iter().any(|f| f == "custom/boot.js"));
    }

    #[test]
    fn packaged_duplicates_from_extras_collapse() {
        let init = init_with(vec![]);
        let baseline = init.optimize_script_files(ScriptSet::Main, &[]).unwrap();

        // js/app.js is already in the packaged main list
        let extras = vec!["js/app.js".to_string()];
        let files = init.optimize_script_files(ScriptSet::Main, &extras).unwrap();
        assert_eq!(files.len(), baseline.len());
    }
}
