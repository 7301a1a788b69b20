//! Project scaffolder
//!
//! Creates a root directory, the registry's folders (each with a `.gitkeep`
//! marker) and the registry's template files for one project type.
//!
//! The target path must not exist beforehand. Re-running with the same
//! name fails without writing anything.
//!
//! # Example
//!
//! ```no_run
//! use scaffold::scaffold::{OutputMode, ProjectRequest, Scaffold};
//!
//! let project = Scaffold::new("/tmp")
//!     .with_output(OutputMode::Quiet)
//!     .run(&ProjectRequest::new("demo", "python"))?;
//! println!("{} files written", project.files.len());
//! # Ok::<(), scaffold::ScaffoldError>(())
//! ```

mod internal;

use anyhow::Result;

pub use internal::{GeneratedProject, OutputMode, ProjectRequest, Scaffold, MARKER_FILE};

/// Scaffold `name` as a `project_type` project in the current directory
///
/// Prints progress as it goes. Returns `Ok(false)` after reporting an
/// unknown type or an existing target; no filesystem changes are made in
/// either case.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be written. The partial
/// tree is removed before the error is returned.
pub fn create_project(name: &str, project_type: &str) -> Result<bool> {
    Scaffold::in_current_dir().execute(&ProjectRequest::new(name, project_type))
}
