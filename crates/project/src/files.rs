//! Deployable file selection.
//!
//! Recursively walks a project directory and produces the upload set with
//! relative paths normalized to forward slashes. Selection is
//! deterministic: for a fixed directory snapshot and rule set the output
//! is the same, sorted by path.

use std::path::Path;

use tracing::debug;

use crate::error::ProjectError;
use crate::ignore::{ENTITY_FILE, IgnoreRuleSet};

/// One file of the upload payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployableFile {
    /// Path relative to the project root, `/`-separated.
    pub path: String,
    pub content: Vec<u8>,
    pub size: u64,
}

/// Computes the deployable file set for a project directory.
///
/// The synthesized entity manifest is never selected, whatever the rule
/// set says — the publisher rebuilds it from this very output, and a
/// stale on-disk copy must not shadow it.
pub fn select_files(
    project_dir: &Path,
    rules: &IgnoreRuleSet,
) -> Result<Vec<DeployableFile>, ProjectError> {
    let mut files = Vec::new();
    walk_dir(project_dir, project_dir, rules, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));

    debug!(
        dir = %project_dir.display(),
        files = files.len(),
        total_bytes = files.iter().map(|f| f.size).sum::<u64>(),
        "selection complete"
    );
    Ok(files)
}

fn walk_dir(
    root: &Path,
    current: &Path,
    rules: &IgnoreRuleSet,
    files: &mut Vec<DeployableFile>,
) -> Result<(), ProjectError> {
    let entries = std::fs::read_dir(current)?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let metadata = entry.metadata()?;

        let rel_path = path.strip_prefix(root).map_err(std::io::Error::other)?;
        // Normalize to forward slashes.
        let rel_str = rel_path.to_string_lossy().replace('\\', "/");

        if metadata.is_dir() {
            // Prune excluded subtrees instead of filtering file by file.
            if !rules.is_ignored(&rel_str) {
                walk_dir(root, &path, rules, files)?;
            }
        } else if metadata.is_file() {
            if rel_str == ENTITY_FILE || rules.is_ignored(&rel_str) {
                continue;
            }
            let content = std::fs::read(&path)?;
            files.push(DeployableFile {
                path: rel_str,
                size: content.len() as u64,
                content,
            });
        }
    }

    Ok(())
}
