use serde::Serialize;
use tera::{Context, Tera};

use crate::context::CoverSheet;
use crate::error::ExportError;

/// The built-in fax cover sheet template.
pub const COVER_SHEET_TEMPLATE: &str = include_str!("../templates/fax_cover.md.tera");

/// Render the cover sheet with the built-in template.
pub fn render_cover_sheet(sheet: &CoverSheet) -> Result<String, ExportError> {
    render_template("fax_cover.md", COVER_SHEET_TEMPLATE, sheet)
}

/// Render a Tera template with any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// fields of `data` become the template context variables. Names without an
/// `.html` extension are not autoescaped.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    data: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the data to a Tera context via serde_json
    let value = serde_json::to_value(data)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "rendered template");
    Ok(rendered)
}
