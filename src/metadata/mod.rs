//! Version metadata from the generated `version.cpp`.
//!
//! The build writes the git state into a source file as string literals:
//!
//! ```text
//! const char* GIT_REV = "3f2a9c1";
//! const char* GIT_TAG = "";
//! const char* GIT_BRANCH = "master";
//! ```
//!
//! Lines are classified by marker, and the first quoted value on the line
//! is taken as the field value.

use crate::bundler::error::{ErrorExt, Result};
use std::path::Path;

/// Line marker of the revision constant.
pub const REVISION_MARKER: &str = "GIT_REV";
/// Line marker of the tag constant.
pub const TAG_MARKER: &str = "GIT_TAG";
/// Line marker of the branch constant.
pub const BRANCH_MARKER: &str = "GIT_BRANCH";

/// Git state of the build, as recorded in the metadata file.
///
/// Fields not found in the file stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionTriple {
    /// Release tag, empty for untagged builds.
    pub tag: String,
    /// Branch name.
    pub branch: String,
    /// Revision (commit) identifier.
    pub revision: String,
}

impl VersionTriple {
    /// Extracts the triple from the text of a metadata file.
    ///
    /// Markers are checked in the order revision, tag, branch; a line is
    /// assigned to the first marker it contains. Lines without a non-empty
    /// quoted value are ignored. A later line overrides an earlier one.
    pub fn parse(text: &str) -> Self {
        let mut triple = Self::default();

        for line in text.lines() {
            let Some(value) = first_quoted(line) else {
                continue;
            };

            if line.contains(REVISION_MARKER) {
                triple.revision = value.to_string();
            } else if line.contains(TAG_MARKER) {
                triple.tag = value.to_string();
            } else if line.contains(BRANCH_MARKER) {
                triple.branch = value.to_string();
            }
        }

        triple
    }

    /// The human-readable version: the tag, or `branch.revision` when untagged.
    pub fn version_string(&self) -> String {
        if self.tag.is_empty() {
            format!("{}.{}", self.branch, self.revision)
        } else {
            self.tag.clone()
        }
    }
}

/// Returns the first double-quoted substring of `line`.
///
/// An empty first value (`GIT_BRANCH "" "main"`) yields `None`, so the line
/// is skipped and an earlier value for the same marker stands.
fn first_quoted(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once('"')?;
    let (value, _) = rest.split_once('"')?;
    if value.is_empty() { None } else { Some(value) }
}

/// Reads and parses the metadata file.
///
/// # Errors
///
/// Fails if the file is missing or unreadable; there is no fallback version.
pub async fn read_version_triple(path: &Path) -> Result<VersionTriple> {
    let text = tokio::fs::read_to_string(path)
        .await
        .fs_context("reading version metadata", path)?;
    Ok(VersionTriple::parse(&text))
}

/// Resolves the installer version string from the metadata file.
pub async fn resolve_version(path: &Path) -> Result<String> {
    let triple = read_version_triple(path).await?;
    let version = triple.version_string();
    log::info!(
        "Resolved version {version} (tag: {:?}, branch: {:?}, revision: {:?})",
        triple.tag,
        triple.branch,
        triple.revision
    );
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_build_uses_branch_and_revision() {
        let triple = VersionTriple::parse(
            "GIT_TAG \"\"\n\
             GIT_BRANCH \"main\"\n\
             GIT_REV \"abc123\"\n",
        );
        assert_eq!(triple.version_string(), "main.abc123");
    }

    #[test]
    fn tag_wins_over_branch_and_revision() {
        let triple = VersionTriple::parse(
            "GIT_BRANCH \"main\"\n\
             GIT_TAG \"1.2.3\"\n\
             GIT_REV \"abc123\"\n",
        );
        assert_eq!(triple.version_string(), "1.2.3");
    }

    #[test]
    fn parses_generated_cpp_source() {
        let source = r#"
#include "version.h"

const char* GIT_REV = "3f2a9c1";
const char* GIT_TAG = "";
const char* GIT_BRANCH = "develop";
"#;
        let triple = VersionTriple::parse(source);
        assert_eq!(
            triple,
            VersionTriple {
                tag: String::new(),
                branch: "develop".into(),
                revision: "3f2a9c1".into(),
            }
        );
        assert_eq!(triple.version_string(), "develop.3f2a9c1");
    }

    #[test]
    fn empty_file_yields_separator_only() {
        assert_eq!(VersionTriple::parse("").version_string(), ".");
    }

    #[test]
    fn missing_revision_keeps_trailing_dot() {
        let triple = VersionTriple::parse("GIT_BRANCH \"release\"");
        assert_eq!(triple.version_string(), "release.");
    }

    #[test]
    fn last_match_wins() {
        let triple = VersionTriple::parse("GIT_TAG \"0.9\"\nGIT_TAG \"1.0\"\n");
        assert_eq!(triple.tag, "1.0");
    }

    #[test]
    fn lines_without_marker_or_quotes_are_skipped() {
        let triple = VersionTriple::parse(
            "#include \"version.h\"\n\
             GIT_TAG unquoted\n\
             GIT_BRANCH \"main\"\n",
        );
        assert_eq!(triple.tag, "");
        assert_eq!(triple.branch, "main");
    }

    #[test]
    fn only_first_quoted_value_is_taken() {
        let triple = VersionTriple::parse(r#"GIT_TAG = "2.0" /* was "1.9" */"#);
        assert_eq!(triple.tag, "2.0");
    }

    #[test]
    fn empty_first_value_skips_the_line() {
        let triple = VersionTriple::parse("GIT_BRANCH \"dev\"\nGIT_BRANCH \"\" \"main\"\n");
        assert_eq!(triple.branch, "dev");
    }

    #[test]
    fn revision_marker_is_checked_first() {
        let triple = VersionTriple::parse(r#"GIT_TAG_FROM_GIT_REV "abc""#);
        assert_eq!(triple.revision, "abc");
        assert_eq!(triple.tag, "");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = resolve_version(&tmp.path().join("src/version.cpp"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("reading version metadata"));
    }

    #[tokio::test]
    async fn resolves_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("version.cpp");
        std::fs::write(&path, "const char* GIT_TAG = \"v0.4.1\";\n").unwrap();

        assert_eq!(resolve_version(&path).await.unwrap(), "v0.4.1");
    }
}
