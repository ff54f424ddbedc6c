//! Template renderer.

use super::{ProjectFile, TemplateError};
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown and plain-text output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Template renderer for scaffolded project files.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders a project file for the project called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_project_file(
        &self,
        file: &ProjectFile,
        name: &str,
    ) -> Result<String, TemplateError> {
        let data = json!({ "name": name });
        self.render_template(file.template, &data)
    }

    /// Renders a template with the given data.
    fn render_template(&self, template: &str, data: &Value) -> Result<String, TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
