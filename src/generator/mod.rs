//! Scaffold generation: target-directory creation, per-template rendering,
//! and output placement.
//!
//! A run processes one language's template set start to finish, sequentially
//! and in stable logical-path order. The first failure aborts the run and
//! surfaces that entry's error; entries already written stay on disk. There
//! is no rollback and no cross-file transaction — partial output on mid-run
//! failure is a documented outcome.

use crate::error::{Result, ScaffoldError};
use crate::registry::{EmbeddedTemplates, Language, TemplateEntry, TemplateSource};
use crate::template::Template;
use crate::toolchain;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};


/// Inputs for one scaffold generation run.
///
/// Constructed from parsed CLI arguments (or directly by embedders) and
/// passed by reference; there is no process-global configuration.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// The run task name, used verbatim as a path component and substituted
    /// into generated sources. No sanitization is applied.
    pub run_task_name: String,
    /// Directory under which `<working_dir>/<run_task_name>` becomes the
    /// target.
    pub working_dir: PathBuf,
    /// The language whose template set is rendered.
    pub language: Language,
}

/// The fixed two-field substitution context supplied to every template of a
/// run.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub run_task_name: String,
    pub runtime_version: String,
}

impl RenderContext {
    fn variables(&self) -> HashMap<String, String> {
        HashMap::from([
            ("RunTaskName".to_string(), self.run_task_name.clone()),
            ("RuntimeVersion".to_string(), self.runtime_version.clone()),
        ])
    }
}

/// Generate a scaffold, resolving the runtime version from the host
/// toolchain (`go version` for Go; Python carries no version).
pub fn generate(request: &ScaffoldRequest) -> Result<()> {
    let runtime_version = match request.language {
        Language::Go => toolchain::go_runtime_version()?,
        Language::Python => String::new(),
    };

    generate_with_version(request, &EmbeddedTemplates, &runtime_version)
}

/// Generate a scaffold from an explicit template source and runtime version.
///
/// [`generate`] resolves the live toolchain version and delegates here;
/// tests inject a fixed version to stay independent of the host environment.
pub fn generate_with_version(
    request: &ScaffoldRequest,
    source: &dyn TemplateSource,
    runtime_version: &str,
) -> Result<()> {
    let target_dir = create_target_dir(&request.working_dir, &request.run_task_name)?;

    let context = RenderContext {
        run_task_name: request.run_task_name.clone(),
        runtime_version: runtime_version.to_string(),
    };
    let variables = context.variables();

    for entry in source.templates(request.language)? {
        render_entry(&entry, request, &target_dir, &variables)?;
    }

    Ok(())
}

/// Create `<working dir>/<run task name>`, reusing a pre-existing directory
/// without touching its unrelated contents.
fn create_target_dir(working_dir: &Path, run_task_name: &str) -> Result<PathBuf> {
    let target_dir = working_dir.join(run_task_name);

    match fs::metadata(&target_dir) {
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(&target_dir).map_err(|source| ScaffoldError::DirectoryCreate {
                path: target_dir.clone(),
                source,
            })?;
        }
        Err(source) => {
            return Err(ScaffoldError::DirectoryStat {
                path: target_dir,
                source,
            });
        }
    }

    Ok(target_dir)
}

/// Render one template entry and write it under the target directory.
fn render_entry(
    entry: &TemplateEntry,
    request: &ScaffoldRequest,
    target_dir: &Path,
    variables: &HashMap<String, String>,
) -> Result<()> {
    let template =
        Template::parse(entry.name(), entry.contents).map_err(|source| {
            ScaffoldError::TemplateParse {
                name: entry.name().to_string(),
                source,
            }
        })?;

    let output_path = target_dir.join(output_relative_path(entry, request));

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|source| ScaffoldError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let rendered = template
        .render(variables)
        .map_err(|source| ScaffoldError::TemplateExecute {
            name: template.name().to_string(),
            source,
        })?;

    let mut file = File::create(&output_path).map_err(|source| ScaffoldError::FileCreate {
        path: output_path.clone(),
        source,
    })?;
    file.write_all(rendered.as_bytes())
        .map_err(|source| ScaffoldError::FileWrite {
            path: output_path.clone(),
            source,
        })?;

    Ok(())
}

/// Output path relative to the target directory: the logical path with the
/// template suffix stripped; the language's primary module (if any) is
/// renamed to `<run task name>.<ext>` with its directory component kept.
fn output_relative_path(entry: &TemplateEntry, request: &ScaffoldRequest) -> PathBuf {
    if let Some(primary) = request.language.primary_module() {
        if entry.path == primary.template_path {
            let renamed = format!("{}.{}", request.run_task_name, primary.extension);
            return match Path::new(entry.output_path()).parent() {
                Some(parent) if parent != Path::new("") => parent.join(renamed),
                _ => PathBuf::from(renamed),
            };
        }
    }

    PathBuf::from(entry.output_path())
}
