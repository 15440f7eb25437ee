//! # hookgate
//!
//! Config-driven pre-commit hook runner with per-hook path filtering.
//!
//! A configuration file declares tool repositories, each pinned to a
//! revision, each carrying one or more hooks with argument lists and
//! path-exclusion patterns. Given the staged file set, `hookgate` runs each
//! tool on the subset of files its patterns admit and blocks the commit if
//! any tool fails.
//!
//! ## Features
//!
//! - **Path filtering**: per-hook `files`/`exclude` regular expressions plus
//!   a global exclusion pattern and file-type tags
//! - **Two config formats**: native `hookgate.toml`, or the familiar
//!   `.pre-commit-config.yaml` schema
//! - **Hook management**: installs and removes the Git `pre-commit` hook
//! - **Parallel execution**: optionally run independent hooks concurrently
//!
//! ## Example
//!
//! ```rust,no_run
//! use hookgate::{Config, GitRepo, Runner};
//!
//! fn main() -> hookgate::Result<()> {
//!     let config = Config::load()?;
//!     let repo = GitRepo::discover()?;
//!     let files = repo.staged_files()?;
//!
//!     let runner = Runner::with_repo(config, repo);
//!     let runtime = tokio::runtime::Runtime::new().expect("create runtime");
//!     let result = runtime.block_on(runner.run(&files))?;
//!
//!     // Any failing hook blocks the commit.
//!     std::process::exit(i32::from(!result.success()));
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/hookgate/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cli;
pub mod config;
pub mod core;
pub mod hooks;
pub mod presets;

// Re-export main types for convenience
pub use crate::config::{Config, HookConfig, RepoConfig};
pub use crate::core::error::{Error, Result};
pub use crate::core::filter::HookFilter;
pub use crate::core::git::GitRepo;
pub use crate::core::runner::{HookResult, RunResult, Runner};
