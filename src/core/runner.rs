//! Hook runner.
//!
//! This module orchestrates a run: for every configured hook it computes the
//! input file subset, skips hooks with nothing to do, executes the rest, and
//! aggregates pass/fail results. Any failure blocks the commit.

// Allow this for Rust 2024 compatibility - the drop order change is harmless here
#![allow(tail_expr_drop_order)]

use crate::config::{Config, HookConfig};
use crate::core::error::{Error, Result};
use crate::core::executor::{shell_quote, CommandOutput, ExecuteOptions, Executor};
use crate::core::filter::HookFilter;
use crate::core::git::GitRepo;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Result of running a single hook.
#[derive(Debug, Clone, Serialize)]
pub struct HookResult {
    /// Hook id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the hook passed.
    pub passed: bool,
    /// Whether the hook was skipped.
    pub skipped: bool,
    /// Reason for skipping (if skipped).
    pub skip_reason: Option<String>,
    /// Number of files passed to the hook.
    pub file_count: usize,
    /// Output from the hook command.
    pub output: CommandOutput,
}

impl HookResult {
    /// Creates a skipped hook result. Skipped hooks never fail the run.
    fn skipped(hook: &HookConfig, reason: impl Into<String>) -> Self {
        Self {
            id: hook.id.clone(),
            name: hook.display_name().to_string(),
            passed: true,
            skipped: true,
            skip_reason: Some(reason.into()),
            file_count: 0,
            output: CommandOutput::empty(),
        }
    }
}

/// Result of running all hooks.
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Individual hook results, in configuration order.
    pub hooks: Vec<HookResult>,
    /// Total duration.
    pub duration: Duration,
    /// Size of the candidate file set the run started from.
    pub total_files: usize,
}

impl RunResult {
    /// Returns true if no hook failed (the commit may proceed).
    #[must_use]
    pub fn success(&self) -> bool {
        self.hooks.iter().all(|h| h.passed)
    }

    /// Returns the number of passed hooks.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.hooks.iter().filter(|h| h.passed && !h.skipped).count()
    }

    /// Returns the number of failed hooks.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.hooks.iter().filter(|h| !h.passed).count()
    }

    /// Returns the number of skipped hooks.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.hooks.iter().filter(|h| h.skipped).count()
    }

    /// Returns failed hook results.
    #[must_use]
    pub fn failed_hooks(&self) -> impl Iterator<Item = &HookResult> {
        self.hooks.iter().filter(|h| !h.passed)
    }
}

/// Runner for executing configured hooks against a file set.
#[derive(Debug)]
pub struct Runner {
    config: Config,
    repo: Option<GitRepo>,
}

impl Runner {
    /// Creates a new runner with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            repo: GitRepo::discover().ok(),
        }
    }

    /// Creates a new runner with a specific repository.
    #[must_use]
    pub fn with_repo(config: Config, repo: GitRepo) -> Self {
        Self {
            config,
            repo: Some(repo),
        }
    }

    /// Runs every configured hook against the file set.
    pub async fn run(&self, files: &[String]) -> Result<RunResult> {
        let jobs = self.prepare(None)?;
        self.execute_jobs(jobs, files).await
    }

    /// Runs a single hook by id against the file set.
    pub async fn run_hook(&self, id: &str, files: &[String]) -> Result<RunResult> {
        let jobs = self.prepare(Some(id))?;
        self.execute_jobs(jobs, files).await
    }

    /// Compiles the (hook, filter) job list, optionally restricted to one id.
    fn prepare(&self, only: Option<&str>) -> Result<Vec<(HookConfig, HookFilter)>> {
        let mut jobs = Vec::with_capacity(self.config.hook_count());

        for repo in &self.config.repos {
            for hook in &repo.hooks {
                if let Some(id) = only {
                    if hook.id != id {
                        continue;
                    }
                }
                let filter = HookFilter::compile(&self.config, hook)?;
                jobs.push((hook.clone(), filter));
            }
        }

        if let Some(id) = only {
            if jobs.is_empty() {
                return Err(Error::HookNotFound { id: id.to_string() });
            }
        }

        Ok(jobs)
    }

    async fn execute_jobs(
        &self,
        jobs: Vec<(HookConfig, HookFilter)>,
        files: &[String],
    ) -> Result<RunResult> {
        let start = std::time::Instant::now();
        let total_files = files.len();

        if jobs.is_empty() {
            return Ok(RunResult {
                hooks: Vec::new(),
                duration: start.elapsed(),
                total_files,
            });
        }

        let hooks = if self.config.parallel {
            self.run_parallel(jobs, files).await?
        } else {
            self.run_sequential(jobs, files).await?
        };

        Ok(RunResult {
            hooks,
            duration: start.elapsed(),
            total_files,
        })
    }

    /// Runs hooks one after another, honoring `fail_fast`.
    async fn run_sequential(
        &self,
        jobs: Vec<(HookConfig, HookFilter)>,
        files: &[String],
    ) -> Result<Vec<HookResult>> {
        let timeout = self.config.hook_timeout();
        let mut results = Vec::with_capacity(jobs.len());

        for (hook, filter) in &jobs {
            let result = run_hook_async(hook, filter, files, timeout, self.repo.as_ref()).await?;

            let failed = !result.passed;
            results.push(result);

            if failed && self.config.fail_fast {
                break;
            }
        }

        Ok(results)
    }

    /// Runs hooks concurrently, bounded by available parallelism.
    ///
    /// Results come back in configuration order. With `fail_fast`, hooks that
    /// already started still complete and are reported.
    async fn run_parallel(
        &self,
        jobs: Vec<(HookConfig, HookFilter)>,
        files: &[String],
    ) -> Result<Vec<HookResult>> {
        let timeout = self.config.hook_timeout();
        let semaphore = Arc::new(Semaphore::new(concurrency::available_parallelism()));
        let shared_files: Arc<[String]> = files.into();

        let mut handles = Vec::with_capacity(jobs.len());

        for (hook, filter) in jobs {
            let sem = Arc::clone(&semaphore);
            let files = Arc::clone(&shared_files);
            let repo = self.repo.clone();

            handles.push(tokio::spawn(async move {
                // Acquire semaphore permit; if semaphore is closed, treat as internal error
                let _permit = sem.acquire().await.map_err(|_| Error::Internal {
                    message: "Semaphore closed unexpectedly".to_string(),
                })?;
                run_hook_async(&hook, &filter, &files, timeout, repo.as_ref()).await
            }));
        }

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(result) => results.push(result?),
                Err(e) => {
                    return Err(Error::Internal {
                        message: format!("Task join error: {e}"),
                    });
                }
            }
        }

        Ok(results)
    }
}

/// Runs a single hook against the file set.
async fn run_hook_async(
    hook: &HookConfig,
    filter: &HookFilter,
    files: &[String],
    timeout: Duration,
    repo: Option<&GitRepo>,
) -> Result<HookResult> {
    let matched = filter.apply(files);

    if matched.is_empty() {
        return Ok(HookResult::skipped(hook, "no files to check"));
    }

    let command = hook.command();
    let program = command.split_whitespace().next().unwrap_or(command);

    if !Executor::command_exists(program) {
        return Ok(HookResult::skipped(
            hook,
            format!("{program} is not installed"),
        ));
    }

    let command_line = build_command_line(command, hook, &matched);

    let mut options = ExecuteOptions::default().timeout(timeout);

    if let Some(repo) = repo {
        options = options.cwd(repo.root());
    }

    for (key, value) in &hook.env {
        options = options.env(key.clone(), value.clone());
    }

    let executor = Executor::new();

    // Show progress
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .ok()
            .unwrap_or_else(ProgressStyle::default_spinner),
    );
    pb.set_message(format!("Running {}...", hook.display_name()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let output = executor.execute(&command_line, options).await?;

    pb.finish_and_clear();

    let name = hook.display_name();
    if output.success() {
        eprintln!("{} {name}", style("✓").green());
    } else if output.timed_out {
        eprintln!("{} {name} (timed out)", style("✗").red());
    } else {
        eprintln!("{} {name}", style("✗").red());
    }

    Ok(HookResult {
        id: hook.id.clone(),
        name: name.to_string(),
        passed: output.success(),
        skipped: false,
        skip_reason: None,
        file_count: matched.len(),
        output,
    })
}

/// Builds the shell command line: entry, then args, then the file list.
fn build_command_line(command: &str, hook: &HookConfig, matched: &[&str]) -> String {
    let mut line = String::from(command);

    for arg in &hook.args {
        line.push(' ');
        line.push_str(&shell_quote(arg));
    }

    if hook.pass_filenames {
        for file in matched {
            line.push(' ');
            line.push_str(&shell_quote(file));
        }
    }

    line
}

/// Concurrency utilities for parallel execution.
mod concurrency {
    /// Returns the number of available CPU cores for parallel execution.
    pub fn available_parallelism() -> usize {
        std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(4)
    }
}
