//! Template content for scaffolded files
//!
//! Content is resolved by file name. Each entry is a pure function of the
//! project name; names without an entry get a one-line placeholder.
//! The project name is inserted verbatim everywhere (no escaping).

// =============================================================================
// Embedded Templates
// =============================================================================

mod embedded {
    pub const GITIGNORE: &str = include_str!("../resources/templates/gitignore");
}

type Renderer = fn(&str) -> String;

const CONTENT_TABLE: &[(&str, Renderer)] = &[
    ("README.md", readme),
    (".gitignore", gitignore),
    ("requirements.txt", requirements),
    ("setup.py", setup_py),
    ("index.html", index_html),
];

// =============================================================================
// Public API
// =============================================================================

/// Whether `file_name` has dedicated content (otherwise the placeholder is used)
pub fn has_template(file_name: &str) -> bool {
    lookup(file_name).is_some()
}

/// Render the content for `file_name` in project `project_name`
pub fn render(file_name: &str, project_name: &str) -> String {
    match lookup(file_name) {
        Some(renderer) => renderer(project_name),
        None => placeholder(file_name),
    }
}

fn lookup(file_name: &str) -> Option<Renderer> {
    CONTENT_TABLE
        .iter()
        .find(|(name, _)| *name == file_name)
        .map(|(_, renderer)| *renderer)
}

// =============================================================================
// Renderers
// =============================================================================

fn placeholder(file_name: &str) -> String {
    format!("# {file_name}\n")
}

// No trailing newline after the license line.
fn readme(project_name: &str) -> String {
    format!(
        "# {project_name}\n\
         \n\
         A description of your project goes here.\n\
         \n\
         ## Installation\n\
         \n\
         ```bash\n\
         pip install -r requirements.txt\n\
         ```\n\
         \n\
         ## Usage\n\
         \n\
         Describe how to use your project.\n\
         \n\
         ## License\n\
         \n\
         MIT License"
    )
}

fn gitignore(_project_name: &str) -> String {
    embedded::GITIGNORE.to_string()
}

fn requirements(_project_name: &str) -> String {
    String::new()
}

fn setup_py(project_name: &str) -> String {
    format!(
        "from setuptools import setup, find_packages\n\
         \n\
         setup(\n    \
             name='{project_name}',\n    \
             version='0.1.0',\n    \
             description='A brief description',\n    \
             packages=find_packages(),\n    \
             python_requires='>=3.7',\n\
         )\n"
    )
}

fn index_html(project_name: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n    \
             <meta charset=\"UTF-8\">\n    \
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    \
             <title>{project_name}</title>\n\
         </head>\n\
         <body>\n    \
             <h1>{project_name}</h1>\n\
         </body>\n\
         </html>\n"
    )
}
