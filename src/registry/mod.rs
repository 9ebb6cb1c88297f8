//! Embedded template registry.
//!
//! Templates are bundled into the binary as `include_str!` tables, one per
//! supported language. Each entry carries a logical relative path whose
//! directory structure mirrors the generated project layout (e.g.
//! `internal/api/run_task_request.go.tmpl`), plus the raw template text.
//!
//! The generator consumes templates only through the [`TemplateSource`]
//! trait, so how the resources are physically bundled (embedded, on-disk,
//! fetched) stays an implementation detail of the source.

use crate::error::{Result, ScaffoldError};
use std::fmt;
use std::str::FromStr;

/// Suffix marking a registry entry as template source.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// A supported target language. This is a deliberately closed set, not an
/// extensible plugin mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Go,
    Python,
}

/// The one template per language whose output filename is replaced by
/// `<run task name>.<extension>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryModule {
    /// Logical template path, including the template suffix.
    pub template_path: &'static str,
    /// Extension appended to the renamed output file.
    pub extension: &'static str,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::Go, Language::Python];

    /// The identifier accepted on the command line.
    pub fn identifier(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Python => "python",
        }
    }

    /// The primary-module rename rule, if the language has one.
    ///
    /// Only Python designates a primary module; the Go set keeps every
    /// template-derived filename as-is.
    pub fn primary_module(&self) -> Option<PrimaryModule> {
        match self {
            Language::Go => None,
            Language::Python => Some(PrimaryModule {
                template_path: "main.py.tmpl",
                extension: "py",
            }),
        }
    }
}

impl FromStr for Language {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|language| language.identifier() == s)
            .ok_or_else(|| ScaffoldError::UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    /// Human-readable name, as used in the generation diagnostics
    /// (`Failed to generate Go scaffold: ...`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Go => write!(f, "Go"),
            Language::Python => write!(f, "Python"),
        }
    }
}

/// One embedded template file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Logical relative path within the language's set, `/`-separated,
    /// including the template suffix.
    pub path: &'static str,
    /// Raw template text.
    pub contents: &'static str,
}

impl TemplateEntry {
    /// Base filename with the template suffix stripped, used in diagnostics
    /// (`go.mod`, `main.py`).
    pub fn name(&self) -> &'static str {
        let base = self.path.rsplit('/').next().unwrap_or(self.path);
        base.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(base)
    }

    /// Logical output path relative to the target directory, before any
    /// primary-module rename: the path with the template suffix stripped.
    pub fn output_path(&self) -> &'static str {
        self.path.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(self.path)
    }
}

/// Provider of a language's template set.
pub trait TemplateSource {
    /// The template entries for `language`, in stable logical-path order.
    fn templates(&self, language: Language) -> Result<Vec<TemplateEntry>>;
}

/// The compile-time-bundled template sets.
pub struct EmbeddedTemplates;

const GO_RESOURCES: &[TemplateEntry] = &[
    TemplateEntry {
        path: "go.mod.tmpl",
        contents: include_str!("templates/go/go.mod.tmpl"),
    },
    TemplateEntry {
        path: "cmd/main.go.tmpl",
        contents: include_str!("templates/go/cmd/main.go.tmpl"),
    },
    TemplateEntry {
        path: "internal/api/run_task_request.go.tmpl",
        contents: include_str!("templates/go/internal/api/run_task_request.go.tmpl"),
    },
    TemplateEntry {
        path: "internal/api/run_task_response.go.tmpl",
        contents: include_str!("templates/go/internal/api/run_task_response.go.tmpl"),
    },
    TemplateEntry {
        path: "internal/controller/run_task_controller.go.tmpl",
        contents: include_str!("templates/go/internal/controller/run_task_controller.go.tmpl"),
    },
    TemplateEntry {
        path: "internal/controller/run_task_controller_test.go.tmpl",
        contents: include_str!("templates/go/internal/controller/run_task_controller_test.go.tmpl"),
    },
    TemplateEntry {
        path: "Containerfile.tmpl",
        contents: include_str!("templates/go/Containerfile.tmpl"),
    },
    TemplateEntry {
        path: "README.md.tmpl",
        contents: include_str!("templates/go/README.md.tmpl"),
    },
];

const PYTHON_RESOURCES: &[TemplateEntry] = &[
    TemplateEntry {
        path: "main.py.tmpl",
        contents: include_str!("templates/python/main.py.tmpl"),
    },
    TemplateEntry {
        path: "requirements.txt.tmpl",
        contents: include_str!("templates/python/requirements.txt.tmpl"),
    },
    TemplateEntry {
        path: "Containerfile.tmpl",
        contents: include_str!("templates/python/Containerfile.tmpl"),
    },
];

impl TemplateSource for EmbeddedTemplates {
    fn templates(&self, language: Language) -> Result<Vec<TemplateEntry>> {
        let resources = match language {
            Language::Go => GO_RESOURCES,
            Language::Python => PYTHON_RESOURCES,
        };

        Ok(select_templates(resources))
    }
}

/// Keep entries carrying the template suffix, in stable logical-path order.
///
/// Non-template entries under a language root are ignored, which leaves room
/// for colocating static assets that should not be rendered.
fn select_templates(resources: &[TemplateEntry]) -> Vec<TemplateEntry> {
    let mut templates: Vec<TemplateEntry> = resources
        .iter()
        .copied()
        .filter(|entry| entry.path.ends_with(TEMPLATE_SUFFIX))
        .collect();
    templates.sort_by(|a, b| a.path.cmp(b.path));
    templates
}
