//! Server-side HTML for the public inspection viewer.
//!
//! The public page is reached by scanning the QR code on the equipment, often
//! from a phone with a poor connection, so it is rendered in one piece on the
//! server with inline styles and no script.

use chrono::NaiveDate;
use common::model::inspection::Inspection;
use common::model::template::SectionLayout;
use common::render::{RenderedRow, RenderedSection, RowKind, WordSpan};
use std::fmt::Write;

const STYLE: &str = "
body { font-family: Arial, sans-serif; margin: 0; background: #f4f4f4; color: #222; }
main { max-width: 820px; margin: 0 auto; padding: 16px; background: #fff; }
h1 { font-size: 1.4em; margin: 0 0 8px; }
.meta { display: grid; grid-template-columns: max-content 1fr; gap: 4px 12px; margin: 12px 0; }
.meta dt { font-weight: bold; }
.photo { max-width: 200px; max-height: 200px; float: right; margin-left: 12px; }
.state { display: inline-block; padding: 2px 8px; border-radius: 4px; color: #fff; }
.state-ok { background: #2e7d32; } .state-warn { background: #ef6c00; } .state-ko { background: #c62828; }
.overdue { color: #c62828; font-weight: bold; }
section { border-top: 1px solid #ddd; padding: 8px 0; }
section.title-content { display: grid; grid-template-columns: 30% 1fr; gap: 12px; }
section h2 { font-size: 1.05em; margin: 4px 0; }
.row { margin: 4px 0; }
.row.subtitle { font-weight: bold; margin-top: 8px; }
.row.list-item::before { content: '• '; }
.status { font-size: 0.85em; padding: 0 6px; border-radius: 3px; margin-left: 6px; }
.status-v { background: #e8f5e9; } .status-na { background: #eceff1; } .status-x { background: #ffebee; color: #c62828; }
.comment { display: block; font-style: italic; color: #555; margin-left: 12px; }
.warning { border: 1px solid #c62828; background: #ffebee; color: #c62828; padding: 8px; margin: 8px 0; }
.empty { color: #555; font-style: italic; }
";

/// Escapes special HTML characters in a string.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn push_label(out: &mut String, spans: &[WordSpan]) {
    for span in spans {
        if span.struck {
            let _ = write!(out, "<s>{}</s>", escape_html(&span.text));
        } else {
            out.push_str(&escape_html(&span.text));
        }
    }
}

fn push_row(out: &mut String, row: &RenderedRow) {
    let class = match row.kind {
        RowKind::Subtitle => "row subtitle",
        RowKind::ListItem => "row list-item",
        RowKind::Item => "row",
    };
    let _ = write!(out, "<div class=\"{}\">", class);
    push_label(out, &row.label);
    if let Some(status) = row.status {
        let _ = write!(
            out,
            "<span class=\"status {}\">{}</span>",
            status.css_class(),
            status.label()
        );
    }
    if let Some(comment) = &row.comment {
        let _ = write!(out, "<span class=\"comment\">{}</span>", escape_html(comment));
    }
    out.push_str("</div>");
}

/// Renders the checklist sections.
pub fn render_sections(sections: &[RenderedSection]) -> String {
    let mut out = String::new();
    if sections.is_empty() {
        out.push_str("<p class=\"empty\">Aucune anomalie ni remarque relevée.</p>");
        return out;
    }
    for section in sections {
        match section.layout {
            SectionLayout::TitleContent => {
                let _ = write!(
                    out,
                    "<section class=\"title-content\"><h2>{}</h2><div>",
                    escape_html(&section.title)
                );
                for row in &section.rows {
                    push_row(&mut out, row);
                }
                out.push_str("</div></section>");
            }
            SectionLayout::Stacked => {
                let _ = write!(
                    out,
                    "<section class=\"stacked\"><h2>{}</h2>",
                    escape_html(&section.title)
                );
                for row in &section.rows {
                    push_row(&mut out, row);
                }
                out.push_str("</section>");
            }
        }
    }
    out
}

fn push_meta(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        let _ = write!(out, "<dt>{}</dt><dd>{}</dd>", label, escape_html(value));
    }
}

fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%d/%m/%Y").to_string())
}

/// Renders the complete public page of an inspection.
///
/// `checklist` is `None` when the checklist could not be rendered at all; the
/// page then carries only the warning, never the "no anomaly" placeholder.
pub fn render_public_page(
    inspection: &Inspection,
    checklist: Option<&[RenderedSection]>,
    warning: Option<&str>,
    today: NaiveDate,
) -> String {
    let title = format!(
        "{} {}",
        inspection.equipment_type.label(),
        inspection.reference
    );
    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        "<!DOCTYPE html><html lang=\"fr\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{}</title><style>{}</style></head><body><main>",
        escape_html(&title),
        STYLE
    );

    if let Some(photo) = &inspection.photo_url {
        let _ = write!(
            out,
            "<img class=\"photo\" src=\"{}\" alt=\"Photo de l'équipement\">",
            escape_html(photo)
        );
    }
    let _ = write!(
        out,
        "<h1>{}</h1><span class=\"state {}\">{}</span>",
        escape_html(&title),
        inspection.state.css_class(),
        inspection.state.label()
    );

    out.push_str("<dl class=\"meta\">");
    push_meta(&mut out, "Produit", inspection.product_name.as_deref());
    push_meta(&mut out, "Fabricant", inspection.manufacturer.as_deref());
    push_meta(&mut out, "N° de série", Some(inspection.serial_number.as_str()));
    push_meta(&mut out, "Fabrication", format_date(inspection.manufacture_date).as_deref());
    push_meta(&mut out, "Mise en service", format_date(inspection.first_use_date).as_deref());
    push_meta(&mut out, "Contrôlé le", format_date(inspection.inspection_date).as_deref());
    push_meta(&mut out, "Contrôleur", inspection.inspector.as_deref());
    if let Some(due) = format_date(inspection.next_inspection_due()) {
        if inspection.is_overdue(today) {
            let _ = write!(
                out,
                "<dt>Prochain contrôle</dt><dd class=\"overdue\">{} (dépassé)</dd>",
                due
            );
        } else {
            push_meta(&mut out, "Prochain contrôle", Some(due.as_str()));
        }
    }
    out.push_str("</dl>");

    if let Some(warning) = warning {
        let _ = write!(out, "<div class=\"warning\">{}</div>", escape_html(warning));
    }

    if let Some(sections) = checklist {
        out.push_str(&render_sections(sections));
    }
    out.push_str("</main></body></html>");
    out
}

/// Minimal error page shown on the public route.
pub fn render_error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"fr\"><head><meta charset=\"utf-8\"><title>Inspection</title>\
         <style>{}</style></head><body><main><div class=\"warning\">{}</div></main></body></html>",
        STYLE,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::point::PointStatus;

    fn span(text: &str, struck: bool) -> WordSpan {
        WordSpan {
            text: text.to_string(),
            is_word: true,
            struck,
        }
    }

    fn section(layout: SectionLayout) -> RenderedSection {
        RenderedSection {
            id: "calotte".to_string(),
            title: "Calotte <ext>".to_string(),
            layout,
            position: 0,
            rows: vec![
                RenderedRow {
                    subsection_id: "t".to_string(),
                    field_key: "calotte.t".to_string(),
                    kind: RowKind::Subtitle,
                    label: vec![span("Extérieur", false)],
                    status: None,
                    comment: None,
                },
                RenderedRow {
                    subsection_id: "impacts".to_string(),
                    field_key: "calotte.impacts".to_string(),
                    kind: RowKind::Item,
                    label: vec![span("Impacts", false), span(", ", false), span("fissures", true)],
                    status: Some(PointStatus::X),
                    comment: Some("choc à l'arrière".to_string()),
                },
            ],
        }
    }

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn struck_words_use_s_tags_and_text_is_escaped() {
        let html = render_sections(&[section(SectionLayout::Stacked)]);
        assert!(html.contains("Impacts, <s>fissures</s>"));
        assert!(html.contains("<h2>Calotte &lt;ext&gt;</h2>"));
        assert!(html.contains("<span class=\"status status-x\">Non conforme</span>"));
        assert!(html.contains("choc à l&#39;arrière"));
        assert!(html.contains("<div class=\"row subtitle\">Extérieur</div>"));
    }

    #[test]
    fn layout_flag_selects_the_section_class() {
        assert!(render_sections(&[section(SectionLayout::TitleContent)])
            .starts_with("<section class=\"title-content\">"));
        assert!(render_sections(&[section(SectionLayout::Stacked)])
            .starts_with("<section class=\"stacked\">"));
    }

    #[test]
    fn empty_checklist_has_a_placeholder() {
        assert!(render_sections(&[]).contains("Aucune anomalie"));
    }

    fn inspection() -> Inspection {
        serde_json::from_value::<common::model::inspection::NewInspection>(serde_json::json!({
            "reference": "H1",
            "equipmentType": "harness",
            "inspectionDate": "2025-01-10",
        }))
        .unwrap()
        .into_inspection(4, chrono::Utc::now())
    }

    #[test]
    fn unavailable_checklist_shows_the_warning_without_placeholder() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let page = render_public_page(&inspection(), None, Some("Modèle <absent>"), today);
        assert!(page.contains("<div class=\"warning\">Modèle &lt;absent&gt;</div>"));
        assert!(!page.contains("Aucune anomalie"));

        let page = render_public_page(&inspection(), Some(&[][..]), None, today);
        assert!(page.contains("Aucune anomalie"));
        assert!(!page.contains("class=\"warning\""));
    }
}
