//! Project template rendering using Handlebars.
//!
//! Each scaffolded project receives a README, a dependency manifest with
//! placeholder comments and an ignore file listing build artifacts.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

/// README template; `name` is the project name.
pub const README_TEMPLATE: &str = "# {{name}}

Description of the project.

## Installation

```
pip install -r requirements.txt
```

## Usage

Explain how to use the script.
";

/// Dependency manifest with no dependencies, only placeholder comments.
pub const REQUIREMENTS_TEMPLATE: &str = "# Add your dependencies here, e.g.,
# requests
# pytest
";

/// Ignore file listing interpreter build artifacts.
pub const GITIGNORE_TEMPLATE: &str = "__pycache__/
*.pyc
";

/// A file written into every new project.
#[derive(Debug, Clone, Copy)]
pub struct ProjectFile {
    /// Path relative to the project root.
    pub path: &'static str,
    /// Handlebars template for the file contents.
    pub template: &'static str,
}

/// Files created by scaffolding, in creation order.
pub const PROJECT_FILES: [ProjectFile; 3] = [
    ProjectFile {
        path: "README.md",
        template: README_TEMPLATE,
    },
    ProjectFile {
        path: "requirements.txt",
        template: REQUIREMENTS_TEMPLATE,
    },
    ProjectFile {
        path: ".gitignore",
        template: GITIGNORE_TEMPLATE,
    },
];
