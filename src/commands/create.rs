//! Create command - scaffold a new project in the current directory

use anyhow::{Context, Result};
use scaffold::scaffold::{OutputMode, ProjectRequest, Scaffold};
use scaffold::ProjectType;

/// Scaffold `name` and return the process exit code
///
/// `0` when the project was created, `1` when it was refused (unknown type or
/// existing target).
/// Filesystem failures are returned as errors.
pub fn execute(
    name: &str,
    project_type: ProjectType,
    json: bool,
    keep_partial: bool,
) -> Result<i32> {
    let output = if json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let created = Scaffold::in_current_dir()
        .with_output(output)
        .keep_partial(keep_partial)
        .execute(&ProjectRequest::new(name, project_type.key()))
        .with_context(|| format!("Failed to create project '{name}'"))?;

    Ok(if created { 0 } else { 1 })
}
