//! Project build invocation.
//!
//! Runs the project's build script ahead of deployment. Watch mode is a
//! caller error here: deployment needs a build that terminates.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ProjectError;

/// Marker file of a buildable project.
pub const BUILD_MANIFEST: &str = "tsconfig.json";

/// Configuration for one build invocation.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub working_dir: PathBuf,
    /// Must be false for deployment builds.
    pub watch: bool,
    /// Enables minification/optimization for the published artifact.
    pub production: bool,
    /// Suppresses build output on success.
    pub silence: bool,
}

/// Whether the directory is configured for compilation.
pub fn is_build_configured(project_dir: &Path) -> bool {
    project_dir.join(BUILD_MANIFEST).is_file()
}

/// Runs the project's build script to completion.
///
/// On a non-zero exit the captured diagnostics are wrapped in
/// `ProjectError::Build`; nothing from a failed build reaches the
/// deployable set, since selection runs strictly after this returns.
pub async fn build(config: &BuildConfig) -> Result<(), ProjectError> {
    if config.watch {
        return Err(ProjectError::Build(
            "watch mode is not valid for a deployment build".into(),
        ));
    }

    debug!(
        dir = %config.working_dir.display(),
        production = config.production,
        "running build script"
    );

    let mut cmd = tokio::process::Command::new("npm");
    cmd.args(["run", "build"]).current_dir(&config.working_dir);
    if config.production {
        cmd.env("NODE_ENV", "production");
    }

    let output = cmd
        .output()
        .await
        .map_err(|e| ProjectError::Build(format!("failed to run build script: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ProjectError::Build(diagnostics_tail(&stderr)));
    }

    if !config.silence {
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            info!(dir = %config.working_dir.display(), "build output:\n{}", stdout.trim_end());
        }
    }

    Ok(())
}

/// Keeps the last portion of build diagnostics; the useful error is at the
/// end of toolchain output.
fn diagnostics_tail(text: &str) -> String {
    const MAX: usize = 2000;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "build script exited with a non-zero status".into();
    }
    match trimmed.char_indices().nth_back(MAX - 1) {
        Some((i, _)) if i > 0 => trimmed[i..].to_string(),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn build_configured_detects_manifest() {
        let dir = TempDir::new().unwrap();
        assert!(!is_build_configured(dir.path()));

        fs::write(dir.path().join(BUILD_MANIFEST), b"{}").unwrap();
        assert!(is_build_configured(dir.path()));
    }

    #[tokio::test]
    async fn watch_mode_is_rejected_before_spawn() {
        // Nonexistent dir: would fail to spawn, but the watch check fires first.
        let config = BuildConfig {
            working_dir: PathBuf::from("/nonexistent"),
            watch: true,
            production: true,
            silence: true,
        };
        let err = build(&config).await.unwrap_err();
        assert!(err.to_string().contains("watch mode"));
    }

    #[test]
    fn diagnostics_tail_keeps_the_end() {
        let long = "x".repeat(5000) + "the actual error";
        let tail = diagnostics_tail(&long);
        assert!(tail.len() <= 2000);
        assert!(tail.ends_with("the actual error"));
    }

    #[test]
    fn diagnostics_tail_handles_empty_output() {
        assert!(diagnostics_tail("  \n").contains("non-zero"));
    }
}
