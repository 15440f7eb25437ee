//! Configuration presets for common project types.
//!
//! Presets provide starter hook pipelines for different tech stacks.

/// Available preset names.
pub mod names {
    /// Python projects (black, isort, flake8, mypy).
    pub const PYTHON: &str = "python";
    /// Node.js/TypeScript projects (prettier, eslint).
    pub const NODE: &str = "node";
    /// Rust projects (cargo fmt, clippy).
    pub const RUST: &str = "rust";
    /// Go projects (gofmt, go vet).
    pub const GO: &str = "go";
}

/// Returns a list of available preset names.
#[must_use]
pub const fn available() -> &'static [&'static str] {
    &[names::PYTHON, names::NODE, names::RUST, names::GO]
}

/// Returns true if the preset name is valid.
#[must_use]
pub fn is_valid(name: &str) -> bool {
    available().contains(&name)
}

/// Returns a description for a preset.
#[must_use]
pub fn description(name: &str) -> &'static str {
    match name {
        names::PYTHON => "Python projects (black, isort, flake8, mypy)",
        names::NODE => "Node.js/TypeScript projects (prettier, eslint)",
        names::RUST => "Rust projects (cargo fmt, clippy)",
        names::GO => "Go projects (gofmt, go vet)",
        _ => "Unknown preset",
    }
}
