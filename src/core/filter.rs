//! Per-hook file filtering.
//!
//! A hook sees a staged (or working-tree) file only when the path matches
//! the hook's `files` pattern, matches none of the exclusion patterns, and
//! carries every tag in the hook's `types` list. Patterns are compiled once
//! per run and matched against repository-relative paths with `/` separators,
//! using search (unanchored) semantics.

use crate::config::{compile_pattern, Config, HookConfig};
use crate::core::error::Result;
use crate::hooks::filetypes;
use regex::Regex;

/// Compiled input filter for a single hook.
#[derive(Debug)]
pub struct HookFilter {
    global_exclude: Option<Regex>,
    files: Option<Regex>,
    exclude: Option<Regex>,
    types: Vec<String>,
}

impl HookFilter {
    /// Compiles the filter for a hook under the given configuration.
    ///
    /// Fails with [`crate::Error::InvalidPattern`] when any pattern does not
    /// compile, so configuration errors surface before any tool runs.
    pub fn compile(config: &Config, hook: &HookConfig) -> Result<Self> {
        let global_exclude = config
            .exclude
            .as_deref()
            .map(|p| compile_pattern("exclude", p))
            .transpose()?;

        let files = hook
            .files
            .as_deref()
            .map(|p| compile_pattern(&format!("hooks[{}].files", hook.id), p))
            .transpose()?;

        let exclude = hook
            .exclude
            .as_deref()
            .map(|p| compile_pattern(&format!("hooks[{}].exclude", hook.id), p))
            .transpose()?;

        Ok(Self {
            global_exclude,
            files,
            exclude,
            types: hook.effective_types(),
        })
    }

    /// Returns true if the path is part of this hook's input set.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        if let Some(re) = &self.global_exclude {
            if re.is_match(path) {
                return false;
            }
        }

        if let Some(re) = &self.files {
            if !re.is_match(path) {
                return false;
            }
        }

        if let Some(re) = &self.exclude {
            if re.is_match(path) {
                return false;
            }
        }

        if !self.types.is_empty() {
            let tags = filetypes::tags_for(path);
            if !self.types.iter().all(|t| tags.contains(&t.as_str())) {
                return false;
            }
        }

        true
    }

    /// Applies the filter to a file set, preserving input order.
    #[must_use]
    pub fn apply<'a>(&self, files: &'a [String]) -> Vec<&'a str> {
        files
            .iter()
            .map(String::as_str)
            .filter(|path| self.matches(path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn filter_for(hook: HookConfig) -> HookFilter {
        HookFilter::compile(&Config::default(), &hook).expect("compile filter")
    }

    fn filter_with_global(global_exclude: &str, hook: HookConfig) -> HookFilter {
        let config = Config {
            exclude: Some(global_exclude.to_string()),
            ..Config::default()
        };
        HookFilter::compile(&config, &hook).expect("compile filter")
    }

    // =========================================================================
    // Basic matching
    // =========================================================================

    #[test]
    fn test_no_patterns_matches_everything() {
        let filter = filter_for(HookConfig::from_id("anything"));
        assert!(filter.matches("src/app.py"));
        assert!(filter.matches("README.md"));
        assert!(filter.matches("deeply/nested/path/file.xyz"));
    }

    #[test]
    fn test_exclude_pattern_skips_matching_files() {
        let filter = filter_for(HookConfig {
            exclude: Some(r"^projects/".to_string()),
            ..HookConfig::from_id("lint")
        });

        assert!(!filter.matches("projects/demo/run.py"));
        assert!(filter.matches("src/app/run.py"));
    }

    #[test]
    fn test_files_pattern_restricts_input() {
        let filter = filter_for(HookConfig {
            files: Some(r"\.py$".to_string()),
            ..HookConfig::from_id("lint")
        });

        assert!(filter.matches("src/app.py"));
        assert!(!filter.matches("src/app.rs"));
        assert!(!filter.matches("app.pyc"));
    }

    #[test]
    fn test_exclusion_wins_over_inclusion() {
        let filter = filter_for(HookConfig {
            files: Some(r"\.py$".to_string()),
            exclude: Some(r"^tests/".to_string()),
            ..HookConfig::from_id("lint")
        });

        assert!(filter.matches("src/app.py"));
        assert!(!filter.matches("tests/test_app.py"));
    }

    #[test]
    fn test_search_semantics_unanchored() {
        // Patterns search anywhere in the path unless anchored explicitly.
        let filter = filter_for(HookConfig {
            exclude: Some(r"generated".to_string()),
            ..HookConfig::from_id("lint")
        });

        assert!(!filter.matches("src/generated/bindings.py"));
        assert!(!filter.matches("src/pregenerated.py"));
        assert!(filter.matches("src/app.py"));
    }

    #[test]
    fn test_anchored_pattern_only_matches_prefix() {
        let filter = filter_for(HookConfig {
            exclude: Some(r"^gen/".to_string()),
            ..HookConfig::from_id("lint")
        });

        assert!(!filter.matches("gen/srv.py"));
        assert!(filter.matches("src/gen/srv.py"));
    }

    // =========================================================================
    // Global exclusions
    // =========================================================================

    #[test]
    fn test_global_exclude_applies_to_every_hook() {
        let filter = filter_with_global(r"^vendor/", HookConfig::from_id("anything"));
        assert!(!filter.matches("vendor/lib.py"));
        assert!(filter.matches("src/lib.py"));
    }

    #[test]
    fn test_global_and_hook_exclude_compose() {
        let filter = filter_with_global(
            r"^vendor/",
            HookConfig {
                exclude: Some(r"^tests/".to_string()),
                ..HookConfig::from_id("lint")
            },
        );

        assert!(!filter.matches("vendor/lib.py"));
        assert!(!filter.matches("tests/test_lib.py"));
        assert!(filter.matches("src/lib.py"));
    }

    // =========================================================================
    // Type tags
    // =========================================================================

    #[test]
    fn test_types_restrict_by_extension() {
        let filter = filter_for(HookConfig {
            types: vec!["python".to_string()],
            ..HookConfig::from_id("lint")
        });

        assert!(filter.matches("src/app.py"));
        assert!(!filter.matches("src/main.rs"));
        assert!(!filter.matches("README.md"));
    }

    #[test]
    fn test_builtin_types_apply_without_explicit_config() {
        // `black` is a built-in id carrying the python tag.
        let filter = filter_for(HookConfig::from_id("black"));
        assert!(filter.matches("src/app.py"));
        assert!(!filter.matches("Cargo.toml"));
    }

    #[test]
    fn test_text_tag_matches_everything() {
        let filter = filter_for(HookConfig {
            types: vec!["text".to_string()],
            ..HookConfig::from_id("whitespace")
        });

        assert!(filter.matches("src/app.py"));
        assert!(filter.matches("Makefile"));
    }

    // =========================================================================
    // The configuration-to-sample-tree property
    // =========================================================================

    #[rstest]
    #[case("src/app/planner.py", true)]
    #[case("src/app/__init__.py", true)]
    #[case("examples/demo.py", false)]
    #[case("tests/test_planner.py", false)]
    #[case("setup.py", false)]
    #[case("src/main.rs", false)]
    fn test_type_checker_scoping(#[case] path: &str, #[case] expected: bool) {
        let filter = filter_for(HookConfig {
            exclude: Some(r"^(examples/|tests/|setup\.py)".to_string()),
            ..HookConfig::from_id("mypy")
        });
        assert_eq!(filter.matches(path), expected, "path: {path}");
    }

    #[rstest]
    #[case("src/app/planner.py", true)]
    #[case("projects/experimental/hack.py", false)]
    #[case("gen/service_bindings.py", false)]
    fn test_linter_scoping(#[case] path: &str, #[case] expected: bool) {
        let filter = filter_for(HookConfig {
            exclude: Some(r"^(projects/|gen/)".to_string()),
            ..HookConfig::from_id("flake8")
        });
        assert_eq!(filter.matches(path), expected, "path: {path}");
    }

    #[test]
    fn test_file_excluded_for_one_hook_still_reaches_another() {
        let strict = filter_for(HookConfig {
            exclude: Some(r"^tests/".to_string()),
            ..HookConfig::from_id("mypy")
        });
        let lax = filter_for(HookConfig::from_id("black"));

        let path = "tests/test_app.py";
        assert!(!strict.matches(path));
        assert!(lax.matches(path));
    }

    // =========================================================================
    // apply
    // =========================================================================

    #[test]
    fn test_apply_preserves_order() {
        let filter = filter_for(HookConfig {
            files: Some(r"\.py$".to_string()),
            ..HookConfig::from_id("lint")
        });

        let files = vec![
            "z.py".to_string(),
            "a.rs".to_string(),
            "m.py".to_string(),
            "a.py".to_string(),
        ];

        assert_eq!(filter.apply(&files), vec!["z.py", "m.py", "a.py"]);
    }

    #[test]
    fn test_apply_empty_input() {
        let filter = filter_for(HookConfig::from_id("lint"));
        let files: Vec<String> = Vec::new();
        assert!(filter.apply(&files).is_empty());
    }

    #[test]
    fn test_apply_all_excluded() {
        let filter = filter_for(HookConfig {
            exclude: Some(r".*".to_string()),
            ..HookConfig::from_id("lint")
        });

        let files = vec!["a.py".to_string(), "b.py".to_string()];
        assert!(filter.apply(&files).is_empty());
    }

    // =========================================================================
    // Compile errors
    // =========================================================================

    #[test]
    fn test_compile_invalid_hook_pattern_fails() {
        let result = HookFilter::compile(
            &Config::default(),
            &HookConfig {
                exclude: Some("(unclosed".to_string()),
                ..HookConfig::from_id("lint")
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_compile_invalid_global_pattern_fails() {
        let config = Config {
            exclude: Some("*bad".to_string()),
            ..Config::default()
        };
        let result = HookFilter::compile(&config, &HookConfig::from_id("lint"));
        assert!(result.is_err());
    }
}
