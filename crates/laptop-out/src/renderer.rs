//! Handlebars rendering with the advisor's helpers:
//! - rupiah: whole Rupiah with id-ID grouping
//! - percent: append a percent sign
//! - inc: one-based position inside `#each`
//!
//! Output is plain text, so HTML escaping is off.

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};
use serde::Serialize;

use crate::format::{format_rupiah, NOT_AVAILABLE};
use crate::templates::TemplatesFile;
use crate::RenderError;

pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new(templates: TemplatesFile) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars.register_helper("rupiah", Box::new(RupiahHelper));
        handlebars.register_helper("percent", Box::new(PercentHelper));
        handlebars.register_helper("inc", Box::new(IncHelper));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| RenderError::Template(format!("{}: {}", name, e)))?;
        }

        Ok(TemplateRenderer { handlebars })
    }

    pub fn builtin() -> Result<Self, RenderError> {
        Self::new(TemplatesFile::builtin().map_err(RenderError::Template)?)
    }

    pub fn load(path: &str) -> Result<Self, RenderError> {
        Self::new(TemplatesFile::load(path).map_err(RenderError::Template)?)
    }

    pub fn render<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String, RenderError> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| RenderError::Render(format!("{}: {}", template_name, e)))
    }
}

// ============================================================================
// Helpers
// ============================================================================

struct RupiahHelper;

impl HelperDef for RupiahHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        match h.param(0).and_then(|v| v.value().as_f64()) {
            Some(amount) => out.write(&format_rupiah(amount))?,
            None => out.write(NOT_AVAILABLE)?,
        }
        Ok(())
    }
}

struct PercentHelper;

impl HelperDef for PercentHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        match h.param(0).and_then(|v| v.value().as_f64()) {
            Some(value) => out.write(&format!("{}%", value.round() as i64))?,
            None => out.write(NOT_AVAILABLE)?,
        }
        Ok(())
    }
}

struct IncHelper;

impl HelperDef for IncHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let index = h.param(0).and_then(|v| v.value().as_u64()).unwrap_or(0);
        out.write(&(index + 1).to_string())?;
        Ok(())
    }
}
