//! CLI argument parsing for taskgen.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! language is taken as a free-form string rather than a clap value enum so
//! the unsupported-language diagnostic stays owned by the command layer.

use clap::Parser;
use std::path::PathBuf;

/// Taskgen: scaffolding generator for run task service projects.
///
/// Renders the embedded template set for the requested language into
/// `<dir>/<name>`, substituting the run task name (and, for go, the host
/// toolchain version) into each template.
#[derive(Parser, Debug)]
#[command(name = "taskgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run task name; becomes the target directory name and is substituted
    /// into the generated sources.
    #[arg(short, long)]
    pub name: String,

    /// Working directory under which `<dir>/<name>` becomes the target.
    #[arg(short, long)]
    pub dir: PathBuf,

    /// Language to scaffold. Supported languages: go, python.
    #[arg(short, long)]
    pub language: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_long_flags() {
        let cli = Cli::try_parse_from([
            "taskgen",
            "--name",
            "demo",
            "--dir",
            "/tmp/out",
            "--language",
            "python",
        ])
        .unwrap();
        assert_eq!(cli.name, "demo");
        assert_eq!(cli.dir, PathBuf::from("/tmp/out"));
        assert_eq!(cli.language, "python");
    }

    #[test]
    fn parse_short_flags() {
        let cli =
            Cli::try_parse_from(["taskgen", "-n", "svc", "-d", "/tmp/out", "-l", "go"]).unwrap();
        assert_eq!(cli.name, "svc");
        assert_eq!(cli.dir, PathBuf::from("/tmp/out"));
        assert_eq!(cli.language, "go");
    }

    #[test]
    fn missing_required_flags_are_rejected() {
        assert!(Cli::try_parse_from(["taskgen"]).is_err());
        assert!(Cli::try_parse_from(["taskgen", "--name", "demo"]).is_err());
        assert!(
            Cli::try_parse_from(["taskgen", "--name", "demo", "--dir", "/tmp/out"]).is_err()
        );
    }

    #[test]
    fn unsupported_language_values_still_parse() {
        // Language validation happens in the command layer, not in clap.
        let cli = Cli::try_parse_from([
            "taskgen",
            "--name",
            "demo",
            "--dir",
            "/tmp/out",
            "--language",
            "madeuplanguage",
        ])
        .unwrap();
        assert_eq!(cli.language, "madeuplanguage");
    }
}
