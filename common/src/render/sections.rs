//! Template-driven section renderer.
//!
//! Only subsections that carry a signal entered by the inspector are shown:
//! a printed sheet lists the defects, comments and struck words, not the
//! dozens of items that were checked and found fine.

use crate::model::inspection::Inspection;
use crate::model::point::{field_key, has_struck_word, CrossedOutWords, InspectionPoint, PointStatus};
use crate::model::template::{InspectionTemplate, SectionLayout, TemplateSection, TemplateSubsection};
use crate::render::strike::{annotate_label, WordSpan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    Subtitle,
    ListItem,
    Item,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedRow {
    pub subsection_id: String,
    pub field_key: String,
    pub kind: RowKind,
    pub label: Vec<WordSpan>,
    /// Present only for subsections that carry a status.
    pub status: Option<PointStatus>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedSection {
    pub id: String,
    pub title: String,
    pub layout: SectionLayout,
    /// Index of the section in the template (or catalog) order.
    pub position: usize,
    pub rows: Vec<RenderedRow>,
}

/// Decides whether a subsection is worth showing.
///
/// - subtitles are always shown;
/// - with a status: shown when the status is not `V`, or a comment or a
///   struck word is present;
/// - without a status: shown when a comment or a struck word is present.
pub fn has_real_data(
    subsection: &TemplateSubsection,
    point: Option<&InspectionPoint>,
    crossed: &CrossedOutWords,
    key: &str,
) -> bool {
    if subsection.is_subtitle {
        return true;
    }
    let struck = has_struck_word(crossed, key);
    let commented = point.and_then(InspectionPoint::comment_text).is_some();
    if subsection.has_status {
        let non_default = point.map_or(false, |p| !p.status.is_default());
        non_default || commented || struck
    } else {
        commented || struck
    }
}

/// Renders one section against its saved results. Returns `None` when no
/// subsection qualifies.
pub(crate) fn render_section(
    section: &TemplateSection,
    position: usize,
    results: Option<&BTreeMap<String, InspectionPoint>>,
    lookup_key: impl Fn(&str) -> String,
    crossed: &CrossedOutWords,
) -> Option<RenderedSection> {
    let mut rows = Vec::new();
    for sub in &section.subsections {
        let key = field_key(&section.id, &sub.id);
        let point = results.and_then(|r| r.get(&lookup_key(&sub.id)));
        if has_real_data(sub, point, crossed, &key) {
            rows.push(render_row(sub, point, key, crossed));
        }
    }

    if rows.is_empty() {
        return None;
    }
    Some(RenderedSection {
        id: section.id.clone(),
        title: section.title.clone(),
        layout: section.layout,
        position,
        rows,
    })
}

fn render_row(
    sub: &TemplateSubsection,
    point: Option<&InspectionPoint>,
    key: String,
    crossed: &CrossedOutWords,
) -> RenderedRow {
    let kind = if sub.is_subtitle {
        RowKind::Subtitle
    } else if sub.is_list_item {
        RowKind::ListItem
    } else {
        RowKind::Item
    };
    // Struck words always show, crossable or not.
    let label = if sub.crossable_words || has_struck_word(crossed, &key) {
        annotate_label(&sub.label, &key, crossed)
    } else {
        vec![WordSpan {
            text: sub.label.clone(),
            is_word: true,
            struck: false,
        }]
    };
    let status = if sub.has_status && !sub.is_subtitle {
        Some(point.map(|p| p.status).unwrap_or_default())
    } else {
        None
    };
    RenderedRow {
        subsection_id: sub.id.clone(),
        field_key: key,
        kind,
        label,
        status,
        comment: point.and_then(InspectionPoint::comment_text).map(str::to_string),
    }
}

/// Renders the saved template results of `inspection`.
///
/// Sections are taken from the saved results, matched to the template by id
/// and dropped when the template no longer has them. The output follows the
/// template order.
pub fn render_template_sections(
    template: &InspectionTemplate,
    inspection: &Inspection,
) -> Vec<RenderedSection> {
    let Some(saved) = inspection.template_sections.as_ref() else {
        return Vec::new();
    };

    let mut rendered: Vec<RenderedSection> = saved
        .iter()
        .filter_map(|(section_id, results)| {
            let position = template.section_position(section_id)?;
            let section = &template.structure.sections[position];
            if section.subsections.is_empty() {
                return None;
            }
            render_section(
                section,
                position,
                Some(results),
                |sub_id| sub_id.to_string(),
                &inspection.crossed_out_words,
            )
        })
        .collect();

    rendered.sort_by_key(|s| s.position);
    rendered
}
