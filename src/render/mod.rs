//! Template rendering module
//!
//! Thin wrapper around a handlebars registry: templates are loaded from the
//! views directory at startup (partials from `partials/`), helpers are
//! registered once, and pages render from a name plus a context mapping.

pub mod helpers;

use handlebars::Handlebars;
use serde_json::Value;
use std::path::Path;

/// The rendering collaborator: `render(name, context) -> markup`
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Build a renderer from `views_dir`.
    ///
    /// Every `*.hbs` directly under the directory becomes a template named by
    /// its file stem; `*.hbs` files under `partials/` register the shared
    /// fragments referenced as `{{> name}}`.
    pub fn from_views_dir(views_dir: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let views = Path::new(views_dir);
        if !views.is_dir() {
            return Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("views directory not found: {views_dir}"),
            )));
        }

        let mut registry = Handlebars::new();
        helpers::register(&mut registry);

        register_templates(&mut registry, views)?;
        register_templates(&mut registry, &views.join("partials"))?;

        Ok(Self { registry })
    }

    /// Render a named template with an opaque context mapping.
    /// Context keys are not validated; missing keys expand empty.
    pub fn render(&self, name: &str, context: &Value) -> Result<String, handlebars::RenderError> {
        self.registry.render(name, context)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }
}

/// Register every `*.hbs` file in `dir` by file stem; a missing directory
/// registers nothing
fn register_templates(
    registry: &mut Handlebars,
    dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("hbs") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        registry.register_template_file(name, &path)?;
    }

    Ok(())
}
