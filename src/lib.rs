pub mod error;
pub mod logging;
pub mod registry;
pub mod scaffold;
pub mod templates;

// Re-export commonly used types
pub use error::ScaffoldError;
pub use registry::{ProjectType, ProjectTypeDefinition};
pub use scaffold::{create_project, GeneratedProject, ProjectRequest, Scaffold};
