//! File-type tags for hook input filtering.
//!
//! A hook may restrict its input set with `types = ["python"]`. Tags are
//! derived from the file extension (plus a few well-known file names), so
//! tagging never touches the filesystem and works on paths that only exist
//! in the Git index.

use std::path::Path;

/// Tag carried by every path.
pub const TEXT: &str = "text";

/// The full tag vocabulary accepted in `types` lists.
pub const KNOWN_TYPES: &[&str] = &[
    "python",
    "rust",
    "go",
    "javascript",
    "typescript",
    "yaml",
    "toml",
    "json",
    "markdown",
    "shell",
    "dockerfile",
    TEXT,
];

/// Returns true if `tag` is part of the vocabulary.
#[must_use]
pub fn is_known(tag: &str) -> bool {
    KNOWN_TYPES.contains(&tag)
}

/// Returns the tags for a repository-relative path.
///
/// Every path carries the `text` tag; extension-specific tags come first.
#[must_use]
pub fn tags_for(path: &str) -> Vec<&'static str> {
    let mut tags = Vec::with_capacity(2);

    if let Some(tag) = tag_for_file_name(path) {
        tags.push(tag);
    } else if let Some(tag) = tag_for_extension(path) {
        tags.push(tag);
    }

    tags.push(TEXT);
    tags
}

/// Tags derived from well-known file names rather than extensions.
fn tag_for_file_name(path: &str) -> Option<&'static str> {
    let name = Path::new(path).file_name()?.to_str()?;
    match name {
        "Dockerfile" => Some("dockerfile"),
        _ => None,
    }
}

/// Tags derived from the file extension.
fn tag_for_extension(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?;
    match ext {
        "py" | "pyi" => Some("python"),
        "rs" => Some("rust"),
        "go" => Some("go"),
        "js" | "jsx" | "mjs" | "cjs" => Some("javascript"),
        "ts" | "tsx" => Some("typescript"),
        "yml" | "yaml" => Some("yaml"),
        "toml" => Some("toml"),
        "json" => Some("json"),
        "md" | "markdown" => Some("markdown"),
        "sh" | "bash" => Some("shell"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_contains_python() {
        assert!(is_known("python"));
        assert!(is_known("rust"));
        assert!(is_known("text"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(!is_known("cobol"));
        assert!(!is_known(""));
        assert!(!is_known("Python"));
    }

    #[test]
    fn test_tags_for_python_file() {
        let tags = tags_for("src/app/planner.py");
        assert!(tags.contains(&"python"));
        assert!(tags.contains(&TEXT));
    }

    #[test]
    fn test_tags_for_python_stub() {
        assert!(tags_for("pkg/types.pyi").contains(&"python"));
    }

    #[test]
    fn test_tags_for_rust_file() {
        assert!(tags_for("src/main.rs").contains(&"rust"));
    }

    #[test]
    fn test_tags_for_yaml_both_extensions() {
        assert!(tags_for("ci/config.yml").contains(&"yaml"));
        assert!(tags_for("ci/config.yaml").contains(&"yaml"));
    }

    #[test]
    fn test_tags_for_dockerfile_by_name() {
        assert!(tags_for("docker/Dockerfile").contains(&"dockerfile"));
    }

    #[test]
    fn test_tags_for_unknown_extension_is_text_only() {
        assert_eq!(tags_for("data/blob.xyz"), vec![TEXT]);
    }

    #[test]
    fn test_tags_for_extensionless_path() {
        assert_eq!(tags_for("Makefile"), vec![TEXT]);
    }

    #[test]
    fn test_every_path_carries_text() {
        for path in ["a.py", "b.rs", "c", "d/e.unknown"] {
            assert!(tags_for(path).contains(&TEXT), "missing text tag for {path}");
        }
    }
}
