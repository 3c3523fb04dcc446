//! MiniJinja-backed page renderer
//!
//! Templates are compiled into the binary and share `base.html` as layout.
//! Auto-escaping is enabled for `.html` templates.

use crate::api::render::{RenderError, Renderer, View};
use minijinja::Environment;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../../templates/base.html")),
    ("index.html", include_str!("../../../templates/index.html")),
    ("contact.html", include_str!("../../../templates/contact.html")),
    ("about.html", include_str!("../../../templates/about.html")),
    ("update.html", include_str!("../../../templates/update.html")),
];

pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Build the environment, failing if any bundled template does not parse
    pub fn new() -> anyhow::Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| anyhow::anyhow!("invalid template '{}': {}", name, e))?;
        }
        Ok(Self { env })
    }
}

impl Renderer for MiniJinjaRenderer {
    fn render(&self, view: View, context: serde_json::Value) -> Result<String, RenderError> {
        let template = view.template_name();
        let to_error = |e: minijinja::Error| RenderError {
            template,
            message: e.to_string(),
        };

        self.env
            .get_template(template)
            .map_err(to_error)?
            .render(&context)
            .map_err(to_error)
    }
}
