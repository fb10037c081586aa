use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Width of the divider drawn for `---`, in underscore characters.
const RULE_WIDTH: usize = 72;

/// Generate a DOCX document from the rendered cover sheet.
///
/// The `rendered` content uses a simple subset:
/// - `# Heading` → centered title (Heading 1)
/// - `## Heading` → centered report heading (Heading 2)
/// - `### Heading` → section heading (Heading 3)
/// - `- item` → bullet list item (prefixed with bullet character)
/// - `**bold**` → bold run
/// - `---` → horizontal divider
/// - Everything else → normal paragraph
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new();

    docx = docx
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    let mut paragraphs = 0usize;
    for line in rendered.lines() {
        let trimmed = line.trim();
        let paragraph = if trimmed.is_empty() {
            Paragraph::new()
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            heading_paragraph(text, "Heading3", AlignmentType::Left, styles)
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            heading_paragraph(text, "Heading2", AlignmentType::Center, styles)
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            heading_paragraph(text, "Heading1", AlignmentType::Center, styles)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            bullet_paragraph(text, styles)
        } else if trimmed == "---" {
            Paragraph::new().add_run(body_run(&"_".repeat(RULE_WIDTH), styles))
        } else {
            body_paragraph(trimmed, styles)
        };
        docx = docx.add_paragraph(paragraph);
        paragraphs += 1;
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    tracing::debug!(paragraphs, bytes = bytes.len(), "generated docx");
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(
    text: &str,
    style_id: &str,
    alignment: AlignmentType,
    styles: &DocumentStyles,
) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .align(alignment)
        .add_run(
            Run::new()
                .add_text(text)
                .bold()
                .fonts(RunFonts::new().ascii(&styles.heading_font)),
        )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("\u{2022} ", styles));

    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }

    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Parse simple inline formatting: **bold** segments.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(body_run(before, styles));
        }

        let after_start = &remaining[start + 2..];
        if let Some(end) = after_start.find("**") {
            runs.push(body_run(&after_start[..end], styles).bold());
            remaining = &after_start[end + 2..];
        } else {
            // No closing **, treat rest as normal text
            runs.push(body_run(remaining, styles));
            return runs;
        }
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }

    runs
}
