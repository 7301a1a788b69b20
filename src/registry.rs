//! Static registry of project types
//!
//! Each type maps to a fixed, ordered list of folders and files. The table
//! is immutable and the order of both lists is the order they are created.

use serde::Serialize;

use crate::error::ScaffoldError;

/// Folders and files scaffolded for one project type
#[derive(Debug, PartialEq, Eq)]
pub struct ProjectTypeDefinition {
    pub folders: &'static [&'static str],
    pub files: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Standard,
    Python,
    Web,
}

// =============================================================================
// Registry Table
// =============================================================================

const STANDARD: ProjectTypeDefinition = ProjectTypeDefinition {
    folders: &["src", "tests", "docs"],
    files: &["README.md", ".gitignore", "requirements.txt"],
};

const PYTHON: ProjectTypeDefinition = ProjectTypeDefinition {
    folders: &["src", "tests", "docs", ".github"],
    files: &["README.md", ".gitignore", "requirements.txt", "setup.py"],
};

const WEB: ProjectTypeDefinition = ProjectTypeDefinition {
    folders: &["src", "public", "tests", "docs"],
    files: &["README.md", ".gitignore", "requirements.txt", "index.html"],
};

impl ProjectType {
    /// All types in registry order
    pub fn all() -> [ProjectType; 3] {
        [ProjectType::Standard, ProjectType::Python, ProjectType::Web]
    }

    /// Registry key used on the command line
    pub fn key(self) -> &'static str {
        match self {
            ProjectType::Standard => "standard",
            ProjectType::Python => "python",
            ProjectType::Web => "web",
        }
    }

    pub fn definition(self) -> &'static ProjectTypeDefinition {
        match self {
            ProjectType::Standard => &STANDARD,
            ProjectType::Python => &PYTHON,
            ProjectType::Web => &WEB,
        }
    }

    /// Look up a type by its exact key
    pub fn from_key(key: &str) -> Result<ProjectType, ScaffoldError> {
        Self::all()
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| ScaffoldError::UnknownProjectType {
                requested: key.to_string(),
                available: available_types(),
            })
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Keys of every registered type, in registry order
pub fn available_types() -> Vec<&'static str> {
    ProjectType::all().into_iter().map(ProjectType::key).collect()
}
