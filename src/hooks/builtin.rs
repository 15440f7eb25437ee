//! Built-in hook definitions.
//!
//! Well-known hook ids resolve to a default command and input types without
//! the configuration having to spell them out. A config entry can always
//! override `entry` and `types` explicitly.

/// A built-in hook definition.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinHook {
    /// Hook id as used in configuration files.
    pub id: &'static str,
    /// Command to execute.
    pub entry: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Default input types.
    pub types: &'static [&'static str],
}

/// The table of built-in hooks.
const BUILTIN_HOOKS: &[BuiltinHook] = &[
    BuiltinHook {
        id: "black",
        entry: "black",
        description: "Format Python code",
        types: &["python"],
    },
    BuiltinHook {
        id: "isort",
        entry: "isort",
        description: "Sort Python imports",
        types: &["python"],
    },
    BuiltinHook {
        id: "flake8",
        entry: "flake8",
        description: "Lint Python code",
        types: &["python"],
    },
    BuiltinHook {
        id: "mypy",
        entry: "mypy",
        description: "Static type checking for Python",
        types: &["python"],
    },
    BuiltinHook {
        id: "prettier",
        entry: "npx prettier",
        description: "Format JavaScript/TypeScript code",
        types: &[],
    },
    BuiltinHook {
        id: "eslint",
        entry: "npx eslint",
        description: "Lint JavaScript/TypeScript code",
        types: &[],
    },
];

/// Looks up a built-in hook by id.
#[must_use]
pub fn lookup(id: &str) -> Option<&'static BuiltinHook> {
    BUILTIN_HOOKS.iter().find(|hook| hook.id == id)
}

/// Returns true if a hook id is a built-in hook.
#[must_use]
pub fn is_builtin(id: &str) -> bool {
    lookup(id).is_some()
}
