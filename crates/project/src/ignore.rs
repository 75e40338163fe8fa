//! Deploy ignore rules.
//!
//! `.deployignore` is a plain-text file, one glob pattern per line, read
//! from the project root. If absent it is created with defaults before the
//! first selection so re-runs are deterministic; it is never rewritten
//! otherwise. The generated `entity.json` manifest is excluded
//! structurally via [`IgnoreRuleSet::ensure`] — the publisher synthesizes
//! it fresh, and uploading a stale on-disk copy would corrupt the
//! published manifest.

use std::path::Path;

use tracing::info;

use crate::error::ProjectError;

/// Name of the project-local ignore file.
pub const IGNORE_FILE: &str = ".deployignore";

/// Name of the synthesized entity manifest, always excluded from uploads.
pub const ENTITY_FILE: &str = "entity.json";

/// Rules written when no ignore file exists yet.
pub const DEFAULT_RULES: &str = "\
.*
package.json
package-lock.json
yarn-lock.json
build.json
tsconfig.json
tslint.json
node_modules/
*.ts
*.tsx
dist/
export/
Dockerfile
entity.json
";

/// Ordered glob-like exclusion patterns for file selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRuleSet {
    patterns: Vec<String>,
}

impl IgnoreRuleSet {
    /// Parses rules from ignore-file text, skipping blanks and `#` comments.
    pub fn parse(text: &str) -> Self {
        let patterns = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { patterns }
    }

    /// The default rule set.
    pub fn defaults() -> Self {
        Self::parse(DEFAULT_RULES)
    }

    /// Reads the project's ignore file, creating it with defaults if absent.
    ///
    /// This is the only path that writes the file; every other mutation is
    /// in-memory for the current run.
    pub fn load_or_create(project_dir: &Path) -> Result<Self, ProjectError> {
        let path = project_dir.join(IGNORE_FILE);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                std::fs::write(&path, DEFAULT_RULES)?;
                info!(path = %path.display(), "created default ignore file");
                Ok(Self::defaults())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Appends a pattern for this run if it is not already present.
    ///
    /// Never touches the file on disk.
    pub fn ensure(&mut self, pattern: &str) {
        if !self.patterns.iter().any(|p| p == pattern) {
            self.patterns.push(pattern.to_string());
        }
    }

    /// Returns the ordered patterns.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether a relative path (forward slashes) is excluded.
    pub fn is_ignored(&self, rel_path: &str) -> bool {
        self.patterns.iter().any(|p| pattern_matches(p, rel_path))
    }
}

/// Matches one ignore pattern against a relative path.
///
/// Semantics:
/// - a bare pattern (no `/`) matches any single path component;
/// - a leading `/` anchors the pattern at the project root;
/// - a trailing `/` names a directory, excluding its whole subtree;
/// - `*` and `?` never cross a separator, `**` does.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pat = pattern;
    let anchored = pat.starts_with('/');
    if anchored {
        pat = &pat[1..];
    }
    pat = pat.strip_suffix('/').unwrap_or(pat);
    if pat.is_empty() {
        return false;
    }

    if !anchored && !pat.contains('/') {
        return path.split('/').any(|segment| glob_match(pat, segment));
    }

    // Anchored or multi-segment: match the whole path, or a parent
    // directory of it (subtree exclusion).
    if glob_match(pat, path) {
        return true;
    }
    path.char_indices()
        .filter(|&(_, c)| c == '/')
        .any(|(i, _)| glob_match(pat, &path[..i]))
}

/// Glob matcher: `*` within a segment, `**` across segments, `?` for one
/// non-separator character.
fn glob_match(pattern: &str, text: &str) -> bool {
    fn rec(p: &[u8], t: &[u8]) -> bool {
        match p.first() {
            None => t.is_empty(),
            Some(&b'*') if p.get(1) == Some(&b'*') => {
                let mut rest = &p[2..];
                if rest.first() == Some(&b'/') {
                    rest = &rest[1..];
                }
                (0..=t.len()).any(|i| rec(rest, &t[i..]))
            }
            Some(&b'*') => (0..=t.len())
                .take_while(|&i| i == 0 || t[i - 1] != b'/')
                .any(|i| rec(&p[1..], &t[i..])),
            Some(&b'?') => match t.first() {
                Some(&c) if c != b'/' => rec(&p[1..], &t[1..]),
                _ => false,
            },
            Some(&pc) => match t.first() {
                Some(&tc) if tc == pc => rec(&p[1..], &t[1..]),
                _ => false,
            },
        }
    }
    rec(pattern.as_bytes(), text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_skips_blanks_and_comments() {
        let rules = IgnoreRuleSet::parse("# header\n\nnode_modules/\n  *.ts  \n");
        assert_eq!(rules.patterns(), ["node_modules/", "*.ts"]);
    }

    #[test]
    fn bare_pattern_matches_any_component() {
        let rules = IgnoreRuleSet::parse("node_modules/");
        assert!(rules.is_ignored("node_modules/lib/index.js"));
        assert!(rules.is_ignored("vendor/node_modules/x.js"));
        assert!(!rules.is_ignored("src/game.js"));
    }

    #[test]
    fn extension_glob_matches_at_any_depth() {
        let rules = IgnoreRuleSet::parse("*.ts");
        assert!(rules.is_ignored("game.ts"));
        assert!(rules.is_ignored("src/lib/game.ts"));
        assert!(!rules.is_ignored("game.js"));
        // The directory component "src.ts" matches the bare pattern too.
        assert!(rules.is_ignored("src.ts/game.js"));
    }

    #[test]
    fn anchored_pattern_only_matches_root() {
        let rules = IgnoreRuleSet::parse("/package.json");
        assert!(rules.is_ignored("package.json"));
        assert!(!rules.is_ignored("sub/package.json"));
    }

    #[test]
    fn anchored_directory_excludes_subtree() {
        let rules = IgnoreRuleSet::parse("/dist/");
        assert!(rules.is_ignored("dist/bundle.js"));
        assert!(rules.is_ignored("dist/assets/a.png"));
        assert!(!rules.is_ignored("src/dist.js"));
    }

    #[test]
    fn double_star_crosses_segments() {
        let rules = IgnoreRuleSet::parse("assets/**/*.blend");
        assert!(rules.is_ignored("assets/models/tree.blend"));
        assert!(rules.is_ignored("assets/a/b/c/x.blend"));
        assert!(!rules.is_ignored("assets/models/tree.glb"));
    }

    #[test]
    fn question_mark_matches_one_char() {
        let rules = IgnoreRuleSet::parse("level?.dat");
        assert!(rules.is_ignored("level1.dat"));
        assert!(!rules.is_ignored("level10.dat"));
    }

    #[test]
    fn dotfiles_pattern() {
        let rules = IgnoreRuleSet::defaults();
        assert!(rules.is_ignored(".deployignore"));
        assert!(rules.is_ignored(".git/config"));
        assert!(!rules.is_ignored("scene.json"));
        assert!(!rules.is_ignored("game.js"));
    }

    #[test]
    fn ensure_appends_once() {
        let mut rules = IgnoreRuleSet::parse("*.ts");
        rules.ensure(ENTITY_FILE);
        rules.ensure(ENTITY_FILE);
        assert_eq!(rules.patterns(), ["*.ts", ENTITY_FILE]);
    }

    #[test]
    fn ensure_is_noop_when_present() {
        let mut rules = IgnoreRuleSet::defaults();
        let before = rules.patterns().to_vec();
        rules.ensure(ENTITY_FILE);
        assert_eq!(rules.patterns(), before);
    }

    #[test]
    fn load_or_create_writes_defaults_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(IGNORE_FILE);
        assert!(!path.exists());

        let rules = IgnoreRuleSet::load_or_create(dir.path()).unwrap();
        assert_eq!(rules, IgnoreRuleSet::defaults());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_RULES);

        // Second run reads the same file back.
        let again = IgnoreRuleSet::load_or_create(dir.path()).unwrap();
        assert_eq!(again, rules);
    }

    #[test]
    fn load_or_create_never_rewrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(IGNORE_FILE);
        fs::write(&path, "custom.bin\n").unwrap();

        let mut rules = IgnoreRuleSet::load_or_create(dir.path()).unwrap();
        rules.ensure(ENTITY_FILE);

        assert_eq!(fs::read_to_string(&path).unwrap(), "custom.bin\n");
        assert!(rules.is_ignored(ENTITY_FILE));
    }
}
