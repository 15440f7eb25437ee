//! Configuration handling for hookgate.
//!
//! The configuration describes a list of tool repositories, each pinned to a
//! revision and declaring one or more hooks. Each hook carries an argument
//! list and optional include/exclude patterns scoping which files it sees.
//!
//! The native format is `hookgate.toml`; a `.pre-commit-config.yaml`-style
//! YAML file with the same schema is accepted interchangeably.

use crate::core::error::{Error, Result};
use crate::hooks::{builtin, filetypes};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Native configuration file name.
pub const CONFIG_FILE_NAME: &str = "hookgate.toml";

/// Compatibility configuration file name (YAML schema).
pub const YAML_CONFIG_FILE_NAME: &str = ".pre-commit-config.yaml";

/// Repo sentinel for hooks defined entirely in-config.
pub const LOCAL_REPO: &str = "local";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global exclusion pattern applied to every hook's input set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// Stop scheduling hooks after the first failure.
    pub fail_fast: bool,
    /// Per-hook wall-clock limit (humantime syntax).
    pub timeout: String,
    /// Run independent hooks concurrently.
    pub parallel: bool,
    /// Tool repositories and their hooks.
    pub repos: Vec<RepoConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude: None,
            fail_fast: false,
            timeout: "5m".to_string(),
            parallel: false,
            repos: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    pub fn load() -> Result<Self> {
        let path = Self::find_config_file()?;
        Self::load_from(&path)
    }

    /// Loads configuration or returns defaults if not found.
    pub fn load_or_default() -> Result<Self> {
        match Self::find_config_file() {
            Ok(path) => Self::load_from(&path),
            Err(Error::ConfigNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Loads configuration from a specific path.
    ///
    /// The format is chosen by extension: `.yaml`/`.yml` parse as YAML,
    /// everything else as TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io("read config", e))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        );

        let config: Self = if is_yaml {
            serde_yaml::from_str(&content)
                .map_err(|e| Error::config_parse_with_source("Failed to parse YAML", e))?
        } else {
            toml::from_str(&content)
                .map_err(|e| Error::config_parse_with_source("Failed to parse TOML", e))?
        };

        config.validate()?;

        Ok(config)
    }

    /// Finds the configuration file by searching up the directory tree.
    ///
    /// At each level the native name wins over the YAML compatibility name.
    pub fn find_config_file() -> Result<PathBuf> {
        let cwd = std::env::current_dir().map_err(|e| Error::io("get current dir", e))?;

        let mut current = cwd.as_path();
        loop {
            for name in [CONFIG_FILE_NAME, YAML_CONFIG_FILE_NAME] {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Ok(config_path);
                }
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Err(Error::ConfigNotFound {
            path: cwd.join(CONFIG_FILE_NAME),
        })
    }

    /// Validates the configuration.
    ///
    /// Checks that every repo and rev is non-empty (local repos excepted),
    /// every hook list and id is non-empty, every pattern compiles, every
    /// `types` tag is known, and the timeout parses.
    pub fn validate(&self) -> Result<()> {
        if humantime::parse_duration(&self.timeout).is_err() {
            return Err(Error::ConfigInvalid {
                field: "timeout".to_string(),
                message: format!("Invalid duration: {}", self.timeout),
            });
        }

        if let Some(pattern) = &self.exclude {
            compile_pattern("exclude", pattern)?;
        }

        for (ri, repo) in self.repos.iter().enumerate() {
            repo.validate(ri)?;
        }

        Ok(())
    }

    /// Looks up a hook entry by id across all repos.
    #[must_use]
    pub fn find_hook(&self, id: &str) -> Option<&HookConfig> {
        self.repos
            .iter()
            .flat_map(|repo| repo.hooks.iter())
            .find(|hook| hook.id == id)
    }

    /// Returns the total number of configured hooks.
    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.repos.iter().map(|repo| repo.hooks.len()).sum()
    }

    /// Parses the configured per-hook timeout.
    #[must_use]
    pub fn hook_timeout(&self) -> std::time::Duration {
        humantime::parse_duration(&self.timeout).unwrap_or_else(|_| {
            tracing::warn!(
                timeout = %self.timeout,
                default_secs = 300,
                "Invalid timeout format, using default"
            );
            std::time::Duration::from_secs(300)
        })
    }

    /// Generates configuration for a specific preset.
    #[must_use]
    pub fn for_preset(preset: &str) -> Self {
        let mut config = Self::default();

        match preset {
            crate::presets::names::PYTHON => {
                config.repos = python_repos();
            }
            crate::presets::names::RUST => {
                config.repos = rust_repos();
            }
            crate::presets::names::NODE => {
                config.repos = node_repos();
            }
            crate::presets::names::GO => {
                config.repos = go_repos();
            }
            _ => {}
        }

        config
    }
}

/// A tool repository entry: a pinned source declaring one or more hooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Source identifier: a URL, or `local` for in-config hooks.
    pub repo: String,
    /// Revision pin (tag or commit). Required unless the repo is local.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rev: String,
    /// Hooks declared by this repository.
    #[serde(default)]
    pub hooks: Vec<HookConfig>,
}

impl RepoConfig {
    /// Returns true for repos whose hooks are defined entirely in-config.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.repo == LOCAL_REPO
    }

    fn validate(&self, index: usize) -> Result<()> {
        if self.repo.trim().is_empty() {
            return Err(Error::ConfigInvalid {
                field: format!("repos[{index}].repo"),
                message: "must not be empty".to_string(),
            });
        }

        if !self.is_local() && self.rev.trim().is_empty() {
            return Err(Error::ConfigInvalid {
                field: format!("repos[{index}].rev"),
                message: format!("must not be empty for repo {}", self.repo),
            });
        }

        if self.hooks.is_empty() {
            return Err(Error::ConfigInvalid {
                field: format!("repos[{index}].hooks"),
                message: "must declare at least one hook".to_string(),
            });
        }

        for (hi, hook) in self.hooks.iter().enumerate() {
            hook.validate(&format!("repos[{index}].hooks[{hi}]"))?;
        }

        Ok(())
    }
}

/// Configuration for a single hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Hook identifier.
    pub id: String,
    /// Display name (defaults to the id).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Command to execute (defaults to the built-in entry for the id, or
    /// the id itself).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    /// Arguments appended to the entry.
    pub args: Vec<String>,
    /// Inclusion pattern; files must match to be passed to this hook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
    /// Exclusion pattern; matching files are never passed to this hook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// File-type tags further narrowing the input set.
    pub types: Vec<String>,
    /// Whether the matched file list is appended to the command line.
    pub pass_filenames: bool,
    /// Environment variables set for the hook process.
    pub env: HashMap<String, String>,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: None,
            entry: None,
            args: Vec::new(),
            files: None,
            exclude: None,
            types: Vec::new(),
            pass_filenames: true,
            env: HashMap::new(),
        }
    }
}

impl HookConfig {
    /// Creates a hook config with just an id.
    #[must_use]
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns the display name for this hook.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Returns the command to execute for this hook.
    #[must_use]
    pub fn command(&self) -> &str {
        if let Some(entry) = &self.entry {
            return entry;
        }
        builtin::lookup(&self.id).map_or(self.id.as_str(), |hook| hook.entry)
    }

    /// Returns the effective `types` filter: explicit config first, then the
    /// built-in default for the id.
    #[must_use]
    pub fn effective_types(&self) -> Vec<String> {
        if !self.types.is_empty() {
            return self.types.clone();
        }
        builtin::lookup(&self.id)
            .map(|hook| hook.types.iter().map(|t| (*t).to_string()).collect())
            .unwrap_or_default()
    }

    fn validate(&self, field_prefix: &str) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::ConfigInvalid {
                field: format!("{field_prefix}.id"),
                message: "must not be empty".to_string(),
            });
        }

        if let Some(pattern) = &self.files {
            compile_pattern(&format!("{field_prefix}.files"), pattern)?;
        }

        if let Some(pattern) = &self.exclude {
            compile_pattern(&format!("{field_prefix}.exclude"), pattern)?;
        }

        for tag in &self.types {
            if !filetypes::is_known(tag) {
                return Err(Error::ConfigInvalid {
                    field: format!("{field_prefix}.types"),
                    message: format!("unknown file type tag: {tag}"),
                });
            }
        }

        Ok(())
    }
}

/// Compiles a pattern, mapping the regex error into our error type.
pub(crate) fn compile_pattern(field: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::pattern(field, pattern, e.to_string()))
}

/// Python pipeline: formatter, import sorter, linter, type checker.
fn python_repos() -> Vec<RepoConfig> {
    vec![
        RepoConfig {
            repo: "https://github.com/psf/black".to_string(),
            rev: "23.3.0".to_string(),
            hooks: vec![HookConfig::from_id("black")],
        },
        RepoConfig {
            repo: "https://github.com/pycqa/isort".to_string(),
            rev: "5.12.0".to_string(),
            hooks: vec![HookConfig {
                args: vec![
                    "--profile".to_string(),
                    "black".to_string(),
                    "--filter-files".to_string(),
                ],
                ..HookConfig::from_id("isort")
            }],
        },
        RepoConfig {
            repo: "https://github.com/pycqa/flake8".to_string(),
            rev: "6.0.0".to_string(),
            hooks: vec![HookConfig {
                exclude: Some(r"^(projects/|gen/)".to_string()),
                ..HookConfig::from_id("flake8")
            }],
        },
        RepoConfig {
            repo: "https://github.com/pre-commit/mirrors-mypy".to_string(),
            rev: "v1.3.0".to_string(),
            hooks: vec![HookConfig {
                args: vec![
                    "--install-types".to_string(),
                    "--non-interactive".to_string(),
                    "--no-strict-optional".to_string(),
                    "--ignore-missing-imports".to_string(),
                ],
                exclude: Some(r"^(examples/|tests/|setup\.py)".to_string()),
                ..HookConfig::from_id("mypy")
            }],
        },
    ]
}

/// Rust pipeline: formatting and lint gates over the whole workspace.
fn rust_repos() -> Vec<RepoConfig> {
    vec![RepoConfig {
        repo: LOCAL_REPO.to_string(),
        rev: String::new(),
        hooks: vec![
            HookConfig {
                name: Some("cargo fmt".to_string()),
                entry: Some("cargo fmt".to_string()),
                args: vec!["--".to_string(), "--check".to_string()],
                types: vec!["rust".to_string()],
                pass_filenames: false,
                ..HookConfig::from_id("fmt-check")
            },
            HookConfig {
                name: Some("cargo clippy".to_string()),
                entry: Some("cargo clippy".to_string()),
                args: vec![
                    "--all-targets".to_string(),
                    "--".to_string(),
                    "-D".to_string(),
                    "warnings".to_string(),
                ],
                types: vec!["rust".to_string()],
                pass_filenames: false,
                ..HookConfig::from_id("clippy")
            },
        ],
    }]
}

/// Node.js/TypeScript pipeline.
fn node_repos() -> Vec<RepoConfig> {
    vec![RepoConfig {
        repo: LOCAL_REPO.to_string(),
        rev: String::new(),
        hooks: vec![
            HookConfig {
                args: vec!["--check".to_string()],
                files: Some(r"\.(js|jsx|ts|tsx|json|css|md)$".to_string()),
                ..HookConfig::from_id("prettier")
            },
            HookConfig {
                files: Some(r"\.(js|jsx|ts|tsx)$".to_string()),
                ..HookConfig::from_id("eslint")
            },
        ],
    }]
}

/// Go pipeline.
fn go_repos() -> Vec<RepoConfig> {
    vec![RepoConfig {
        repo: LOCAL_REPO.to_string(),
        rev: String::new(),
        hooks: vec![
            HookConfig {
                entry: Some("gofmt".to_string()),
                args: vec!["-l".to_string()],
                types: vec!["go".to_string()],
                ..HookConfig::from_id("gofmt")
            },
            HookConfig {
                entry: Some("go vet".to_string()),
                args: vec!["./...".to_string()],
                types: vec!["go".to_string()],
                pass_filenames: false,
                ..HookConfig::from_id("go-vet")
            },
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn one_hook_config(hook: HookConfig) -> Config {
        Config {
            repos: vec![RepoConfig {
                repo: "https://example.com/tools".to_string(),
                rev: "v1.0.0".to_string(),
                hooks: vec![hook],
            }],
            ..Config::default()
        }
    }

    // =========================================================================
    // Defaults and validation
    // =========================================================================

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.repos.is_empty());
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = Config::default();
        config.timeout = "soon".to_string();
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigInvalid { field, .. }) if field == "timeout"
        ));
    }

    #[test]
    fn test_hook_timeout_parses() {
        let mut config = Config::default();
        config.timeout = "90s".to_string();
        assert_eq!(config.hook_timeout(), std::time::Duration::from_secs(90));
    }

    #[test]
    fn test_hook_timeout_falls_back_on_garbage() {
        let mut config = Config::default();
        config.timeout = "garbage".to_string();
        assert_eq!(config.hook_timeout(), std::time::Duration::from_secs(300));
    }

    #[test]
    fn test_empty_repo_rejected() {
        let mut config = one_hook_config(HookConfig::from_id("lint"));
        config.repos[0].repo = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigInvalid { field, .. }) if field == "repos[0].repo"
        ));
    }

    #[test]
    fn test_empty_rev_rejected_for_remote_repo() {
        let mut config = one_hook_config(HookConfig::from_id("lint"));
        config.repos[0].rev = String::new();
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigInvalid { field, .. }) if field == "repos[0].rev"
        ));
    }

    #[test]
    fn test_empty_rev_allowed_for_local_repo() {
        let mut config = one_hook_config(HookConfig {
            entry: Some("true".to_string()),
            ..HookConfig::from_id("noop")
        });
        config.repos[0].repo = LOCAL_REPO.to_string();
        config.repos[0].rev = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_repo_without_hooks_rejected() {
        let config = Config {
            repos: vec![RepoConfig {
                repo: "https://example.com/tools".to_string(),
                rev: "v1".to_string(),
                hooks: Vec::new(),
            }],
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigInvalid { field, .. }) if field == "repos[0].hooks"
        ));
    }

    #[test]
    fn test_empty_hook_id_rejected() {
        let config = one_hook_config(HookConfig::from_id(""));
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigInvalid { field, .. }) if field == "repos[0].hooks[0].id"
        ));
    }

    #[test]
    fn test_invalid_hook_exclude_pattern_rejected() {
        let config = one_hook_config(HookConfig {
            exclude: Some("(unclosed".to_string()),
            ..HookConfig::from_id("lint")
        });
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidPattern { field, .. }) if field == "repos[0].hooks[0].exclude"
        ));
    }

    #[test]
    fn test_invalid_hook_files_pattern_rejected() {
        let config = one_hook_config(HookConfig {
            files: Some("[a-".to_string()),
            ..HookConfig::from_id("lint")
        });
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidPattern { field, .. }) if field == "repos[0].hooks[0].files"
        ));
    }

    #[test]
    fn test_invalid_global_exclude_rejected() {
        let mut config = one_hook_config(HookConfig::from_id("lint"));
        config.exclude = Some("*invalid".to_string());
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidPattern { field, .. }) if field == "exclude"
        ));
    }

    #[test]
    fn test_unknown_type_tag_rejected() {
        let config = one_hook_config(HookConfig {
            types: vec!["fortran".to_string()],
            ..HookConfig::from_id("lint")
        });
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigInvalid { field, .. }) if field == "repos[0].hooks[0].types"
        ));
    }

    // =========================================================================
    // Hook resolution
    // =========================================================================

    #[test]
    fn test_display_name_defaults_to_id() {
        let hook = HookConfig::from_id("mypy");
        assert_eq!(hook.display_name(), "mypy");
    }

    #[test]
    fn test_display_name_explicit() {
        let hook = HookConfig {
            name: Some("type check".to_string()),
            ..HookConfig::from_id("mypy")
        };
        assert_eq!(hook.display_name(), "type check");
    }

    #[test]
    fn test_command_prefers_entry() {
        let hook = HookConfig {
            entry: Some("python -m mypy".to_string()),
            ..HookConfig::from_id("mypy")
        };
        assert_eq!(hook.command(), "python -m mypy");
    }

    #[test]
    fn test_command_falls_back_to_builtin() {
        let hook = HookConfig::from_id("black");
        assert_eq!(hook.command(), "black");
    }

    #[test]
    fn test_command_falls_back_to_id() {
        let hook = HookConfig::from_id("my-custom-tool");
        assert_eq!(hook.command(), "my-custom-tool");
    }

    #[test]
    fn test_effective_types_builtin_default() {
        let hook = HookConfig::from_id("isort");
        assert_eq!(hook.effective_types(), vec!["python".to_string()]);
    }

    #[test]
    fn test_effective_types_explicit_override() {
        let hook = HookConfig {
            types: vec!["text".to_string()],
            ..HookConfig::from_id("isort")
        };
        assert_eq!(hook.effective_types(), vec!["text".to_string()]);
    }

    #[test]
    fn test_find_hook() {
        let config = Config::for_preset("python");
        assert!(config.find_hook("mypy").is_some());
        assert!(config.find_hook("nope").is_none());
    }

    #[test]
    fn test_hook_count() {
        let config = Config::for_preset("python");
        assert_eq!(config.hook_count(), 4);
    }

    // =========================================================================
    // Presets
    // =========================================================================

    #[test]
    fn test_preset_python() {
        let config = Config::for_preset("python");
        assert!(config.validate().is_ok());

        let isort = config.find_hook("isort").expect("isort configured");
        assert_eq!(isort.args, vec!["--profile", "black", "--filter-files"]);

        let mypy = config.find_hook("mypy").expect("mypy configured");
        assert!(mypy.args.contains(&"--ignore-missing-imports".to_string()));
        assert!(mypy.exclude.is_some());
    }

    #[test]
    fn test_preset_rust() {
        let config = Config::for_preset("rust");
        assert!(config.validate().is_ok());
        assert!(config.find_hook("clippy").is_some());
        assert!(config.find_hook("fmt-check").is_some());
    }

    #[test]
    fn test_preset_node() {
        let config = Config::for_preset("node");
        assert!(config.validate().is_ok());
        assert!(config.find_hook("prettier").is_some());
    }

    #[test]
    fn test_preset_go() {
        let config = Config::for_preset("go");
        assert!(config.validate().is_ok());
        assert!(config.find_hook("go-vet").is_some());
    }

    #[test]
    fn test_preset_unknown_is_empty() {
        let config = Config::for_preset("cobol");
        assert!(config.repos.is_empty());
    }

    #[test]
    fn test_preset_revs_non_empty_for_remote_repos() {
        for preset in ["python", "rust", "node", "go"] {
            let config = Config::for_preset(preset);
            for repo in &config.repos {
                if !repo.is_local() {
                    assert!(!repo.rev.is_empty(), "empty rev in preset {preset}");
                }
            }
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    #[test]
    fn test_load_toml_config() {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
fail_fast = true

[[repos]]
repo = "https://github.com/pycqa/flake8"
rev = "6.0.0"

[[repos.hooks]]
id = "flake8"
exclude = "^projects/"
"#,
        )
        .expect("write config");

        let config = Config::load_from(&path).expect("load config");
        assert!(config.fail_fast);
        assert_eq!(config.repos.len(), 1);
        assert_eq!(config.repos[0].hooks[0].exclude.as_deref(), Some("^projects/"));
    }

    #[test]
    fn test_load_yaml_config() {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path().join(YAML_CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
repos:
  - repo: https://github.com/pycqa/isort
    rev: 5.12.0
    hooks:
      - id: isort
        args: ["--profile", "black", "--filter-files"]
"#,
        )
        .expect("write config");

        let config = Config::load_from(&path).expect("load config");
        assert_eq!(config.repos[0].rev, "5.12.0");
        assert_eq!(
            config.repos[0].hooks[0].args,
            vec!["--profile", "black", "--filter-files"]
        );
    }

    #[test]
    fn test_load_yaml_ignores_unknown_fields() {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path().join(YAML_CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
default_language_version:
  python: python3
repos:
  - repo: local
    hooks:
      - id: noop
        entry: "true"
"#,
        )
        .expect("write config");

        let config = Config::load_from(&path).expect("load config");
        assert_eq!(config.repos[0].hooks[0].id, "noop");
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[[repos").expect("write config");

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_validates_patterns() {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
[[repos]]
repo = "https://example.com/tools"
rev = "v1"

[[repos.hooks]]
id = "lint"
exclude = "(unclosed"
"#,
        )
        .expect("write config");

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::InvalidPattern { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("create temp dir");
        let result = Config::load_from(&temp.path().join(CONFIG_FILE_NAME));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::for_preset("python");
        let toml = toml::to_string_pretty(&config).expect("serialize");
        let reparsed: Config = toml::from_str(&toml).expect("reparse");
        assert_eq!(reparsed.repos.len(), config.repos.len());
        assert_eq!(
            reparsed.find_hook("mypy").map(|h| h.args.clone()),
            config.find_hook("mypy").map(|h| h.args.clone())
        );
    }
}
