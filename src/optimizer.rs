//! Asset optimizer contract
//!
//! The optimize/minify pipeline is an external collaborator: it receives the
//! deduplicated identifier set for an asset kind and may rewrite identifiers
//! (bundled or cache-busted URLs) or append identifiers it discovers for
//! that kind. The passthrough implementation serves hosts without a
//! pipeline.

use std::collections::HashSet;
use tracing::debug;

use crate::error::AssetError;

/// Kind tag for optimizer requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Javascript,
    Css,
}

/// External optimize/minify transform over a deduplicated identifier set.
///
/// The returned order is whatever the implementation produces; callers must
/// not rely on it.
pub trait AssetOptimizer: Send + Sync {
    fn optimize(&self, kind: AssetKind, files: &HashSet<String>)
        -> Result<Vec<String>, AssetError>;
}

/// Optimizer that hands the set back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughOptimizer;

impl AssetOptimizer for PassthroughOptimizer {
    fn optimize(
        &self,
        kind: AssetKind,
        files: &HashSet<String>,
    ) -> Result<Vec<String>, AssetError> {
        debug!(?kind, count = files.len(), "passthrough optimize");
        Ok(files.iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingOptimizer;

    impl AssetOptimizer for FailingOptimizer {
        fn optimize(
            &self,
            _kind: AssetKind,
            _files: &HashSet<String>,
        ) -> Result<Vec<String>, AssetError> {
            Err(anyhow::anyhow!("pipeline offline").into())
        }
    }

    #[test]
    fn passthrough_returns_the_set() {
        let files: HashSet<String> = ["a.js", "b.js"].into_iter().map(String::from).collect();
        let out = PassthroughOptimizer
            .optimize(AssetKind::Javascript, &files)
            .unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out.into_iter().collect::<HashSet<_>>(), files);
    }

    #[test]
    fn collaborator_failure_surfaces() {
        let err = FailingOptimizer
            .optimize(AssetKind::Javascript, &HashSet::new())
            .unwrap_err();
        assert!(matches!(err, AssetError::Optimizer(_)));
    }
}
