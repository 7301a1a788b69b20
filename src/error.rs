//! Error types for scaffolding runs
//!
//! Two kinds are *recognised*: the run reports them and returns cleanly
//! without touching disk. Everything else is an I/O fault that propagates.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Unknown project type: {requested}\nAvailable types: {}", .available.join(", "))]
    UnknownProjectType {
        requested: String,
        available: Vec<&'static str>,
    },

    #[error("Error: '{name}' already exists!")]
    TargetAlreadyExists { name: String },

    #[error("Failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// True for the two kinds that are reported without any disk changes
    pub fn is_recognised(&self) -> bool {
        matches!(
            self,
            Self::UnknownProjectType { .. } | Self::TargetAlreadyExists { .. }
        )
    }

    /// Stable snake_case name, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownProjectType { .. } => "unknown_project_type",
            Self::TargetAlreadyExists { .. } => "target_already_exists",
            Self::Io { .. } => "io",
        }
    }
}
