//! Internal implementation for the scaffold module

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::ScaffoldError;
use crate::registry::{ProjectType, ProjectTypeDefinition};
use crate::templates;

/// Marker file placed in every scaffolded folder
pub const MARKER_FILE: &str = ".gitkeep";

// =============================================================================
// Types
// =============================================================================

/// A request to scaffold one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    /// Root directory name, also interpolated into generated content
    pub name: String,
    /// Registry key, validated when the request runs
    pub project_type: String,
}

impl ProjectRequest {
    pub fn new(name: impl Into<String>, project_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_type: project_type.into(),
        }
    }
}

/// Summary of what a successful run wrote
///
/// Folder and file entries are relative to `root`, in creation order.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedProject {
    pub name: String,
    pub project_type: ProjectType,
    pub root: PathBuf,
    pub folders: Vec<String>,
    pub files: Vec<String>,
}

/// Where progress and results go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable progress lines on stdout
    #[default]
    Text,
    /// A single JSON document on stdout
    Json,
    /// Nothing printed
    Quiet,
}

pub struct Scaffold {
    base_dir: PathBuf,
    output: OutputMode,
    rollback: bool,
}

// =============================================================================
// Runner
// =============================================================================

impl Scaffold {
    /// Scaffold projects relative to `base_dir`.
    ///
    /// An absolute project name replaces `base_dir` entirely.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            output: OutputMode::Text,
            rollback: true,
        }
    }

    pub fn in_current_dir() -> Self {
        Self::new(".")
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Leave a partially written tree in place when a write fails
    pub fn keep_partial(mut self, keep: bool) -> Self {
        self.rollback = !keep;
        self
    }

    /// Run the request and report the outcome.
    ///
    /// Returns `Ok(false)` after reporting an unknown type or an existing
    /// target. Filesystem failures propagate.
    pub fn execute(&self, request: &ProjectRequest) -> Result<bool> {
        match self.run(request) {
            Ok(project) => {
                self.report_success(&project)?;
                Ok(true)
            }
            Err(err) if err.is_recognised() => {
                self.report_failure(&err)?;
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Validate the request and write the project tree
    pub fn run(&self, request: &ProjectRequest) -> Result<GeneratedProject, ScaffoldError> {
        let project_type = ProjectType::from_key(&request.project_type)?;
        self.build(&request.name, project_type, project_type.definition())
    }

    pub(crate) fn build(
        &self,
        name: &str,
        project_type: ProjectType,
        definition: &ProjectTypeDefinition,
    ) -> Result<GeneratedProject, ScaffoldError> {
        let root = self.base_dir.join(name);

        // symlink_metadata so a dangling link still counts as occupied
        if fs::symlink_metadata(&root).is_ok() {
            return Err(ScaffoldError::TargetAlreadyExists {
                name: name.to_string(),
            });
        }

        fs::create_dir(&root).map_err(|e| ScaffoldError::io("create directory", &root, e))?;
        debug!(path = %root.display(), "created project root");
        self.progress(format!("Created project folder: {name}/"));

        let mut project = GeneratedProject {
            name: name.to_string(),
            project_type,
            root,
            folders: Vec::new(),
            files: Vec::new(),
        };

        if let Err(err) = self.populate(&mut project, definition) {
            if self.rollback {
                self.roll_back(&project.root);
            }
            return Err(err);
        }

        info!(
            project = name,
            project_type = %project_type,
            folders = project.folders.len(),
            files = project.files.len(),
            "project scaffolded"
        );
        Ok(project)
    }

    fn populate(
        &self,
        project: &mut GeneratedProject,
        definition: &ProjectTypeDefinition,
    ) -> Result<(), ScaffoldError> {
        for folder in definition.folders {
            let folder_path = project.root.join(folder);
            fs::create_dir_all(&folder_path)
                .map_err(|e| ScaffoldError::io("create directory", &folder_path, e))?;

            let marker = folder_path.join(MARKER_FILE);
            fs::File::create(&marker)
                .map_err(|e| ScaffoldError::io("create marker", &marker, e))?;
            debug!(path = %folder_path.display(), "created folder");

            project.folders.push(folder.to_string());
            self.progress(format!("  {folder}/"));
        }

        for file_name in definition.files {
            let file_path = project.root.join(file_name);
            let content = templates::render(file_name, &project.name);
            fs::write(&file_path, content)
                .map_err(|e| ScaffoldError::io("write file", &file_path, e))?;
            debug!(path = %file_path.display(), "wrote file");

            project.files.push(file_name.to_string());
            self.progress(format!("  {file_name}"));
        }

        Ok(())
    }

    fn roll_back(&self, root: &Path) {
        match fs::remove_dir_all(root) {
            Ok(()) => info!(path = %root.display(), "rolled back partial project"),
            Err(e) => warn!(path = %root.display(), error = %e, "rollback failed"),
        }
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    fn progress(&self, line: String) {
        if self.output == OutputMode::Text {
            println!("{line}");
        }
    }

    fn report_success(&self, project: &GeneratedProject) -> Result<()> {
        match self.output {
            OutputMode::Text => {
                let message = format!("Project '{}' created successfully!", project.name);
                println!("\n{}", message.green().bold());
            }
            OutputMode::Json => println!("{}", serde_json::to_string_pretty(project)?),
            OutputMode::Quiet => {}
        }
        Ok(())
    }

    fn report_failure(&self, err: &ScaffoldError) -> Result<()> {
        match self.output {
            OutputMode::Text => println!("{}", err.to_string().red()),
            OutputMode::Json => {
                let body = serde_json::json!({
                    "error": err.kind(),
                    "message": err.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
            OutputMode::Quiet => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BROKEN: ProjectTypeDefinition = ProjectTypeDefinition {
        folders: &["src"],
        files: &["README.md", "missing/parent.txt"],
    };

    fn quiet(dir: &TempDir) -> Scaffold {
        Scaffold::new(dir.path()).with_output(OutputMode::Quiet)
    }

    #[test]
    fn test_run_records_creation_order() -> Result<()> {
        let temp = TempDir::new()?;
        let project = quiet(&temp).run(&ProjectRequest::new("site", "web"))?;

        assert_eq!(project.project_type, ProjectType::Web);
        assert_eq!(project.root, temp.path().join("site"));
        assert_eq!(project.folders, vec!["src", "public", "tests", "docs"]);
        assert_eq!(
            project.files,
            vec!["README.md", ".gitignore", "requirements.txt", "index.html"]
        );
        Ok(())
    }

    #[test]
    fn test_marker_files_are_empty() -> Result<()> {
        let temp = TempDir::new()?;
        quiet(&temp).run(&ProjectRequest::new("demo", "python"))?;

        for folder in ProjectType::Python.definition().folders {
            let marker = temp.path().join("demo").join(folder).join(MARKER_FILE);
            assert_eq!(fs::metadata(&marker)?.len(), 0);
        }
        Ok(())
    }

    #[test]
    fn test_unknown_type_touches_nothing() -> Result<()> {
        let temp = TempDir::new()?;
        let err = quiet(&temp)
            .run(&ProjectRequest::new("demo", "bogus"))
            .unwrap_err();

        assert_eq!(err.kind(), "unknown_project_type");
        assert_eq!(fs::read_dir(temp.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn test_existing_file_blocks_creation() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("demo"), "taken")?;

        let err = quiet(&temp)
            .run(&ProjectRequest::new("demo", "standard"))
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::TargetAlreadyExists { ref name } if name == "demo"));
        assert_eq!(fs::read_to_string(temp.path().join("demo"))?, "taken");
        Ok(())
    }

    #[test]
    fn test_missing_parent_is_io_error() -> Result<()> {
        let temp = TempDir::new()?;
        let err = quiet(&temp)
            .run(&ProjectRequest::new("no/such/parent", "standard"))
            .unwrap_err();

        assert!(!err.is_recognised());
        assert!(!temp.path().join("no").exists());
        Ok(())
    }

    #[test]
    fn test_failed_write_rolls_back() -> Result<()> {
        let temp = TempDir::new()?;
        let err = quiet(&temp)
            .build("half", ProjectType::Standard, &BROKEN)
            .unwrap_err();

        assert_eq!(err.kind(), "io");
        assert!(!temp.path().join("half").exists());
        Ok(())
    }

    #[test]
    fn test_keep_partial_leaves_tree() -> Result<()> {
        let temp = TempDir::new()?;
        let result = quiet(&temp)
            .keep_partial(true)
            .build("half", ProjectType::Standard, &BROKEN);

        assert!(result.is_err());
        let root = temp.path().join("half");
        assert!(root.join("src").join(MARKER_FILE).is_file());
        assert!(root.join("README.md").is_file());
        assert!(!root.join("missing").exists());
        Ok(())
    }

    #[test]
    fn test_execute_maps_recognised_errors_to_false() -> Result<()> {
        let temp = TempDir::new()?;
        let scaffold = quiet(&temp);
        let request = ProjectRequest::new("demo", "standard");

        assert!(scaffold.execute(&request)?);
        assert!(!scaffold.execute(&request)?);
        assert!(!scaffold.execute(&ProjectRequest::new("other", "bogus"))?);
        Ok(())
    }

    #[test]
    fn test_execute_propagates_io_errors() -> Result<()> {
        let temp = TempDir::new()?;
        let result = quiet(&temp).execute(&ProjectRequest::new("a/b", "standard"));
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_summary_serializes_lowercase_type() -> Result<()> {
        let temp = TempDir::new()?;
        let project = quiet(&temp).run(&ProjectRequest::new("demo", "python"))?;

        let value = serde_json::to_value(&project)?;
        assert_eq!(value["project_type"], "python");
        assert_eq!(value["name"], "demo");
        assert_eq!(value["files"][3], "setup.py");
        Ok(())
    }
}
