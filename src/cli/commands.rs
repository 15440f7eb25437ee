//! CLI command implementations.

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::core::error::{Error, Result};
use crate::core::git::{self, GitRepo};
use crate::core::runner::Runner;
use console::style;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Hook script template.
const HOOK_SCRIPT: &str = r#"#!/bin/sh
# hookgate hook - installed by `hookgate install`
# https://github.com/hookgate/hookgate

# Skip if HOOKGATE_SKIP is set
if [ "$HOOKGATE_SKIP" = "1" ]; then
    exit 0
fi

# Run the configured hooks against the staged files
exec hookgate run
"#;

/// Hook marker comment.
const HOOK_MARKER: &str = "# hookgate hook";

/// Initialize configuration.
pub fn init(preset: &str, force: bool) -> Result<ExitCode> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    // Check if config already exists
    if config_path.exists() && !force {
        eprintln!(
            "{} Configuration already exists: {}",
            style("!").yellow(),
            config_path.display()
        );
        eprintln!("  Use --force to overwrite.");
        return Ok(ExitCode::FAILURE);
    }

    let config = Config::for_preset(preset);

    // Write config
    let toml = toml::to_string_pretty(&config).map_err(|e| Error::Internal {
        message: format!("Failed to serialize config: {e}"),
    })?;

    std::fs::write(&config_path, toml).map_err(|e| Error::io("write config", e))?;

    eprintln!("{} Created {}", style("✓").green(), config_path.display());
    eprintln!("  Preset: {} - {}", preset, crate::presets::description(preset));

    eprintln!("\nNext steps:");
    eprintln!("  1. Review and customize {CONFIG_FILE_NAME}");
    eprintln!("  2. Run: hookgate install");

    Ok(ExitCode::SUCCESS)
}

/// Install git hook.
pub fn install(force: bool) -> Result<ExitCode> {
    let repo = GitRepo::discover()?;
    let hooks_dir = repo.hooks_dir();
    let hook_path = hooks_dir.join("pre-commit");

    // Create hooks directory if needed
    if !hooks_dir.exists() {
        std::fs::create_dir_all(&hooks_dir).map_err(|e| Error::io("create hooks dir", e))?;
    }

    // Check for existing hook
    if hook_path.exists() {
        let content =
            std::fs::read_to_string(&hook_path).map_err(|e| Error::io("read existing hook", e))?;

        // Check if it's our hook
        if content.contains(HOOK_MARKER) {
            eprintln!(
                "{} Hook already installed at {}",
                style("✓").green(),
                hook_path.display()
            );
            return Ok(ExitCode::SUCCESS);
        }

        if !force {
            return Err(Error::HookExists { path: hook_path });
        }

        // Backup existing hook
        let backup_path = hooks_dir.join("pre-commit.bak");
        std::fs::rename(&hook_path, &backup_path).map_err(|e| Error::io("backup hook", e))?;
        eprintln!(
            "{} Backed up existing hook to {}",
            style("•").cyan(),
            backup_path.display()
        );
    }

    // Write hook
    std::fs::write(&hook_path, HOOK_SCRIPT).map_err(|e| Error::HookInstall {
        message: format!("write {}: {e}", hook_path.display()),
    })?;

    // Make executable on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&hook_path)
            .map_err(|e| Error::io("get hook metadata", e))?
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&hook_path, perms).map_err(|e| Error::io("set hook perms", e))?;
    }

    eprintln!(
        "{} Installed pre-commit hook at {}",
        style("✓").green(),
        hook_path.display()
    );

    Ok(ExitCode::SUCCESS)
}

/// Uninstall git hook.
pub fn uninstall() -> Result<ExitCode> {
    let repo = GitRepo::discover()?;
    let hook_path = repo.hook_path("pre-commit");

    if !hook_path.exists() {
        eprintln!(
            "{} No hook installed at {}",
            style("•").cyan(),
            hook_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    // Check if it's our hook
    let content = std::fs::read_to_string(&hook_path).map_err(|e| Error::io("read hook", e))?;

    if !content.contains(HOOK_MARKER) {
        eprintln!(
            "{} Hook at {} was not installed by hookgate",
            style("!").yellow(),
            hook_path.display()
        );
        eprintln!("  Remove manually if desired.");
        return Ok(ExitCode::FAILURE);
    }

    std::fs::remove_file(&hook_path).map_err(|e| Error::io("remove hook", e))?;

    eprintln!(
        "{} Removed pre-commit hook from {}",
        style("✓").green(),
        hook_path.display()
    );

    // Check for backup
    let backup_path = repo.hooks_dir().join("pre-commit.bak");
    if backup_path.exists() {
        eprintln!(
            "  Backup exists at {} - restore if needed",
            backup_path.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Run hooks.
pub fn run(all_files: bool, hook: Option<&str>, fail_fast: bool, json: bool) -> Result<ExitCode> {
    // Check for skip
    if std::env::var("HOOKGATE_SKIP").ok().as_deref() == Some("1") {
        eprintln!("{} Skipping hooks (HOOKGATE_SKIP=1)", style("•").cyan());
        return Ok(ExitCode::SUCCESS);
    }

    // Load config
    let mut config = Config::load()?;

    if fail_fast {
        config.fail_fast = true;
    }

    // Resolve the candidate file set
    let repo = GitRepo::discover()?;
    let files = if all_files {
        repo.all_files()?
    } else {
        repo.staged_files()?
    };

    tracing::debug!(
        files = files.len(),
        all_files,
        "resolved candidate file set"
    );

    // Create runner
    let runner = Runner::with_repo(config, repo);

    // Run hooks
    let result = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Internal {
            message: format!("Failed to create runtime: {e}"),
        })?
        .block_on(async {
            if let Some(id) = hook {
                runner.run_hook(id, &files).await
            } else {
                runner.run(&files).await
            }
        })?;

    if json {
        let report = serde_json::to_string_pretty(&result).map_err(|e| Error::Internal {
            message: format!("Failed to serialize report: {e}"),
        })?;
        println!("{report}");
        return Ok(if result.success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    // Print summary
    eprintln!();
    if result.success() {
        eprintln!(
            "{} All hooks passed ({} passed, {} skipped) in {:?}",
            style("✓").green().bold(),
            result.passed_count(),
            result.skipped_count(),
            result.duration
        );
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "{} {} hook(s) failed",
            style("✗").red().bold(),
            result.failed_count()
        );

        // Show failed hook details
        for hook in result.failed_hooks() {
            eprintln!();
            eprintln!("  {} {}", style("Failed:").red(), hook.name);
            if !hook.output.combined_output().is_empty() {
                for line in hook.output.combined_output().lines().take(20) {
                    eprintln!("    {line}");
                }
            }
        }

        Ok(ExitCode::FAILURE)
    }
}

/// List configured hooks.
pub fn list(json: bool) -> Result<ExitCode> {
    let config = Config::load()?;

    if json {
        let out = serde_json::to_string_pretty(&config).map_err(|e| Error::Internal {
            message: format!("Failed to serialize config: {e}"),
        })?;
        println!("{out}");
        return Ok(ExitCode::SUCCESS);
    }

    for repo in &config.repos {
        if repo.is_local() {
            eprintln!("{}", style(&repo.repo).bold());
        } else {
            eprintln!("{} @ {}", style(&repo.repo).bold(), repo.rev);
        }

        for hook in &repo.hooks {
            eprintln!("  {} - {}", style(&hook.id).cyan(), describe_hook(hook));
        }
        eprintln!();
    }

    eprintln!("{} hook(s) configured", config.hook_count());

    Ok(ExitCode::SUCCESS)
}

/// One-line description of a hook's command and file constraints.
fn describe_hook(hook: &crate::config::HookConfig) -> String {
    let mut parts = vec![hook.command().to_string()];

    if let Some(files) = &hook.files {
        parts.push(format!("files: {files}"));
    }
    if let Some(exclude) = &hook.exclude {
        parts.push(format!("exclude: {exclude}"));
    }
    let types = hook.effective_types();
    if !types.is_empty() {
        parts.push(format!("types: {}", types.join(",")));
    }

    parts.join(" | ")
}

/// Validate configuration.
#[allow(tail_expr_drop_order)]
pub fn validate(revs: bool) -> Result<ExitCode> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(Error::ConfigNotFound { path }) => {
            eprintln!(
                "{} Configuration not found: {}",
                style("!").yellow(),
                path.display()
            );
            eprintln!("  Run: hookgate init");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            eprintln!("{} Failed to load configuration: {e}", style("✗").red());
            return Ok(ExitCode::FAILURE);
        }
    };

    // Load already validated the schema and patterns
    eprintln!("{} Configuration is valid", style("✓").green());

    if !revs {
        return Ok(ExitCode::SUCCESS);
    }

    // Network pass: confirm every pinned rev resolves against its remote
    let mut missing = 0;
    for repo in config.repos.iter().filter(|r| !r.is_local()) {
        match git::remote_rev_exists(&repo.repo, &repo.rev) {
            Ok(true) => {
                eprintln!("{} {} @ {}", style("✓").green(), repo.repo, repo.rev);
            }
            Ok(false) => {
                eprintln!(
                    "{} {} @ {} - rev does not resolve",
                    style("✗").red(),
                    repo.repo,
                    repo.rev
                );
                missing += 1;
            }
            Err(e) => {
                eprintln!(
                    "{} {} - could not query remote: {e}",
                    style("!").yellow(),
                    repo.repo
                );
                missing += 1;
            }
        }
    }

    if missing == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{} {missing} rev(s) failed to resolve", style("✗").red());
        Ok(ExitCode::FAILURE)
    }
}

/// Show configuration.
pub fn config(raw: bool) -> Result<ExitCode> {
    match Config::find_config_file() {
        Ok(path) => {
            eprintln!("Configuration file: {}", path.display());

            if raw {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| Error::io("read config", e))?;
                eprintln!();
                std::io::stdout()
                    .write_all(content.as_bytes())
                    .map_err(|e| Error::io("write output", e))?;
            }

            Ok(ExitCode::SUCCESS)
        }
        Err(Error::ConfigNotFound { .. }) => {
            eprintln!("{} No configuration file found", style("!").yellow());
            eprintln!("  Run: hookgate init");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e),
    }
}

/// Generate shell completions.
pub fn completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    clap_complete::generate(
        shell,
        &mut super::Cli::command(),
        "hookgate",
        &mut std::io::stdout(),
    );
}
