//! Laptop Out: presentation adapter
//!
//! Turns shaped candidate lists, comparison results and service metrics into
//! view models and plain text. Nothing here fails on bad record fields:
//! missing prices show as "—", trends are clamped, garbage reads as absent.
//!
//! # Example
//!
//! ```
//! use laptop_core::ComparisonResult;
//! use laptop_out::Presenter;
//!
//! let presenter = Presenter::builtin().unwrap();
//! let text = presenter
//!     .comparison(&ComparisonResult::from_predictions(15_000_000.0, 17_500_000.0))
//!     .unwrap();
//! assert!(text.contains("Rp -2.500.000"));
//! ```

pub mod format;
pub mod renderer;
pub mod templates;
pub mod views;

pub use format::{format_rupiah, trend_percent, NOT_AVAILABLE};
pub use renderer::TemplateRenderer;
pub use templates::TemplatesFile;
pub use views::{CandidateView, Cheaper, ComparisonView, ListView, MetricsView};

use laptop_core::{ComparisonResult, PresentationConfig, ServiceMetrics};
use laptop_shaping::ShapedList;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("TEMPLATE/{0}")]
    Template(String),
    #[error("RENDER/{0}")]
    Render(String),
}

/// Renders each panel through its named template
pub struct Presenter {
    renderer: TemplateRenderer,
}

impl Presenter {
    pub fn builtin() -> Result<Self, RenderError> {
        Ok(Self {
            renderer: TemplateRenderer::builtin()?,
        })
    }

    /// Configured templates file, or the built-in set
    pub fn from_config(config: &PresentationConfig) -> Result<Self, RenderError> {
        let renderer = match config.templates_path.as_deref() {
            Some(path) => TemplateRenderer::load(path)?,
            None => TemplateRenderer::builtin()?,
        };
        Ok(Self { renderer })
    }

    pub fn candidates(&self, list: &ShapedList) -> Result<String, RenderError> {
        self.renderer.render("candidate_list", &ListView::from(list))
    }

    pub fn comparison(&self, result: &ComparisonResult) -> Result<String, RenderError> {
        self.renderer.render("comparison", &ComparisonView::from(result))
    }

    pub fn metrics(&self, metrics: &ServiceMetrics) -> Result<String, RenderError> {
        self.renderer.render("metrics", &MetricsView::from(metrics))
    }
}
