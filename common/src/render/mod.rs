//! Turns saved inspection results into the visible checklist.
//!
//! The renderers here produce a view model ([`RenderedSection`]) rather than
//! markup; the backend turns it into HTML for the public viewer and the yew
//! client turns it into virtual DOM.

pub mod families;
pub mod mismatch;
pub mod sections;
pub mod strike;

pub use families::render_static_sections;
pub use mismatch::{check_template_match, TemplateMismatch};
pub use sections::{has_real_data, render_template_sections, RenderedRow, RenderedSection, RowKind};
pub use strike::{annotate_label, label_words, WordSpan};

use crate::model::inspection::Inspection;
use crate::model::template::InspectionTemplate;

/// Renders an inspection with whichever engine applies: its template when it
/// is template-driven and the template is available, otherwise the built-in
/// catalog of its equipment family.
pub fn render_inspection(
    inspection: &Inspection,
    template: Option<&InspectionTemplate>,
) -> Vec<RenderedSection> {
    match (inspection.is_template_driven(), template) {
        (true, Some(template)) => render_template_sections(template, inspection),
        (true, None) => Vec::new(),
        (false, _) => render_static_sections(inspection),
    }
}
