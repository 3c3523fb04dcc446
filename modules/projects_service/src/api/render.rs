//! Page rendering capability used by the REST handlers
//!
//! Handlers only know about [`View`]s and a JSON context; the template engine
//! behind [`Renderer`] is chosen by the module wiring.

/// Pages the service can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Project listing
    Index,
    /// Static contact page
    Contact,
    /// Static about page
    About,
    /// Project submission form
    Update,
}

impl View {
    /// Template file backing this view
    pub fn template_name(self) -> &'static str {
        match self {
            View::Index => "index.html",
            View::Contact => "contact.html",
            View::About => "about.html",
            View::Update => "update.html",
        }
    }
}

/// Rendering failure
#[derive(Debug, thiserror::Error)]
#[error("failed to render '{template}': {message}")]
pub struct RenderError {
    pub template: &'static str,
    pub message: String,
}

/// Render a view with a context into an HTML document
pub trait Renderer: Send + Sync {
    fn render(&self, view: View, context: serde_json::Value) -> Result<String, RenderError>;
}
