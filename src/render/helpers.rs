//! Template helpers
//!
//! Pure functions exposed to templates: the current calendar year (copyright
//! footers) and an uppercase transform. No side effects, no error cases.

use chrono::{Datelike, Local};
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};

/// Register all site helpers on a registry
pub fn register(registry: &mut Handlebars) {
    registry.register_helper("current_year", Box::new(current_year_helper));
    registry.register_helper("scream", Box::new(scream_helper));
}

/// The host system's current calendar year
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Uppercase a text value
pub fn scream(text: &str) -> String {
    text.to_uppercase()
}

/// `{{current_year}}` - no arguments
fn current_year_helper(
    _: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&current_year().to_string())?;
    Ok(())
}

/// `{{scream value}}` - one text argument; non-string arguments expand empty
fn scream_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let text = h.param(0).and_then(|p| p.value().as_str()).unwrap_or_default();
    out.write(&scream(text))?;
    Ok(())
}
