//! Virtual-DOM rendering of the checklist view model.
//!
//! Mirrors the markup of the server-side public page (`backend/src/html.rs`)
//! so both share one stylesheet.

use common::model::template::SectionLayout;
use common::render::{RenderedRow, RenderedSection, RowKind, WordSpan};
use yew::{html, Html};

fn label(spans: &[WordSpan]) -> Html {
    spans
        .iter()
        .map(|span| {
            if span.struck {
                html! { <s>{ span.text.clone() }</s> }
            } else {
                html! { { span.text.clone() } }
            }
        })
        .collect()
}

fn row(row: &RenderedRow) -> Html {
    let class = match row.kind {
        RowKind::Subtitle => "row subtitle",
        RowKind::ListItem => "row list-item",
        RowKind::Item => "row",
    };
    html! {
        <div class={class} key={row.field_key.clone()}>
            { label(&row.label) }
            {
                match row.status {
                    Some(status) => html! {
                        <span class={format!("status {}", status.css_class())}>{ status.label() }</span>
                    },
                    None => html! {},
                }
            }
            {
                match &row.comment {
                    Some(comment) => html! { <span class="comment">{ comment.clone() }</span> },
                    None => html! {},
                }
            }
        </div>
    }
}

pub fn render_sections(sections: &[RenderedSection]) -> Html {
    if sections.is_empty() {
        return html! { <p class="empty">{"Aucune anomalie ni remarque relevée."}</p> };
    }
    sections
        .iter()
        .map(|section| match section.layout {
            SectionLayout::TitleContent => html! {
                <section class="title-content" key={section.id.clone()}>
                    <h2>{ section.title.clone() }</h2>
                    <div>{ for section.rows.iter().map(row) }</div>
                </section>
            },
            SectionLayout::Stacked => html! {
                <section class="stacked" key={section.id.clone()}>
                    <h2>{ section.title.clone() }</h2>
                    { for section.rows.iter().map(row) }
                </section>
            },
        })
        .collect()
}
