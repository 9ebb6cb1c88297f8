//! Host toolchain version detection.
//!
//! Go scaffolds pin the generated module manifest and container image to the
//! host `go` toolchain's version, read by running `go version` at generation
//! time. The leading language-name prefix is stripped from the version token
//! (`go1.21.0` resolves to `1.21.0`). Python scaffolds carry no runtime
//! version.

use crate::error::{Result, ScaffoldError};
use std::process::Command;

/// Resolve the host go toolchain version, prefix stripped.
pub fn go_runtime_version() -> Result<String> {
    let output = Command::new("go").arg("version").output().map_err(|e| {
        ScaffoldError::ToolchainVersion(format!("failed to execute go version: {}", e))
    })?;

    if !output.status.success() {
        return Err(ScaffoldError::ToolchainVersion(format!(
            "go version exited with status {}",
            output.status.code().unwrap_or(-1)
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_go_version(&stdout).ok_or_else(|| {
        ScaffoldError::ToolchainVersion(format!(
            "unrecognized go version output: {}",
            stdout.trim()
        ))
    })
}

/// Extract the version from `go version` output.
///
/// `go version go1.21.0 linux/amd64` yields `1.21.0`.
fn parse_go_version(raw: &str) -> Option<String> {
    raw.split_whitespace()
        .filter_map(|token| token.strip_prefix("go"))
        .find(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
        .map(|rest| rest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_release_toolchain_output() {
        assert_eq!(
            parse_go_version("go version go1.21.0 linux/amd64"),
            Some("1.21.0".to_string())
        );
        assert_eq!(
            parse_go_version("go version go1.22.5 darwin/arm64"),
            Some("1.22.5".to_string())
        );
    }

    #[test]
    fn strips_only_the_language_prefix() {
        assert_eq!(
            parse_go_version("go version go1.21.0 linux/amd64"),
            Some("1.21.0".to_string())
        );
        // The leading `go` command token must not be mistaken for a version.
        assert_eq!(parse_go_version("go version"), None);
    }

    #[test]
    fn rejects_unrecognized_output() {
        assert_eq!(parse_go_version(""), None);
        assert_eq!(parse_go_version("bash: go: command not found"), None);
    }

    #[test]
    fn tolerates_prerelease_version_tokens() {
        assert_eq!(
            parse_go_version("go version go1.23rc1 linux/amd64"),
            Some("1.23rc1".to_string())
        );
    }
}
