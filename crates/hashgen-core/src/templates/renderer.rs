//! Handlebars-based renderer for output file names.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and HTML
//! escaping turned off. Strict mode makes a pattern like `hash{{sise}}_stack.c` fail
//! instead of silently producing `hash_stack.c` for every size.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::renderer::TemplateRenderer;
//!
//! let renderer = TemplateRenderer::new();
//! let name = renderer.output_name("hash{{size}}_{{kind}}.c", 243, "stack")?;
//! assert_eq!(name, "hash243_stack.c");
//! ```

use std::path::{Component, Path};

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{HashgenError, Result};

/// Template renderer using Handlebars for generating output file names.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| HashgenError::OutputName(e.to_string()))
    }

    /// Render the output file name for one size of one template.
    ///
    /// The result must be a single plain file name: outputs always land next to the
    /// templates, so separators, `.` and `..` are rejected.
    pub fn output_name(&self, pattern: &str, size: u64, kind: &str) -> Result<String> {
        let data = serde_json::json!({
            "size": size,
            "kind": kind,
        });
        let name = self.render(pattern, &data)?;

        let mut components = Path::new(&name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(name),
            _ => Err(HashgenError::OutputName(format!(
                "pattern '{pattern}' renders to '{name}', which is not a plain file name"
            ))),
        }
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_name_default_patterns() {
        let renderer = TemplateRenderer::new();
        assert_eq!(
            renderer.output_name("hash{{size}}_stack.c", 27, "stack").unwrap(),
            "hash27_stack.c"
        );
        assert_eq!(
            renderer.output_name("hash{{size}}_queue.h", 8019, "queue").unwrap(),
            "hash8019_queue.h"
        );
    }

    #[test]
    fn test_output_name_uses_kind() {
        let renderer = TemplateRenderer::new();
        assert_eq!(
            renderer.output_name("hash{{size}}_{{kind}}.h", 81, "queue").unwrap(),
            "hash81_queue.h"
        );
    }

    #[test]
    fn test_output_name_is_not_html_escaped() {
        let renderer = TemplateRenderer::new();
        assert_eq!(
            renderer.output_name("{{kind}}{{size}}.c", 3, "a&b").unwrap(),
            "a&b3.c"
        );
    }

    #[test]
    fn test_strict_mode_rejects_unknown_variable() {
        let renderer = TemplateRenderer::new();
        let result = renderer.output_name("hash{{sise}}_stack.c", 27, "stack");
        assert!(matches!(result, Err(HashgenError::OutputName(_))));
    }

    #[test]
    fn test_rejects_paths() {
        let renderer = TemplateRenderer::new();
        assert!(renderer.output_name("out/hash{{size}}.c", 27, "stack").is_err());
        assert!(renderer.output_name("../hash{{size}}.c", 27, "stack").is_err());
        assert!(renderer.output_name("{{kind}}", 27, "..").is_err());
    }
}
