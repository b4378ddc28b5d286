use yew::prelude::*;

use crate::components::helpers::{format_date, today};
use crate::components::sections::render_sections;
use crate::print_sheet::PrintSheet;
use crate::tops_sheet::qr_top_sheet::QrTopSheet;

use super::messages::Msg;
use super::state::InspectionViewerComponent;

pub fn view(component: &InspectionViewerComponent, ctx: &Context<InspectionViewerComponent>) -> Html {
    if let Some(error) = &component.error {
        return html! { <div class="error-box">{ error.clone() }</div> };
    }
    if component.is_loading() {
        return html! { <div class="spinner" /> };
    }
    let Some(inspection) = &component.inspection else {
        return html! {};
    };
    let link = ctx.link();
    let overdue = today().is_some_and(|today| inspection.is_overdue(today));
    let title = format!("{} {}", inspection.equipment_type.label(), inspection.reference);
    let public_url = component.qr.as_ref().map(|qr| qr.public_url.clone());

    html! {
        <>
            <PrintSheet>
                <header class="inspection-header">
                    {
                        match &inspection.photo_url {
                            Some(photo) => html! { <img class="photo" src={photo.clone()} alt="Photo de l'équipement" /> },
                            None => html! {},
                        }
                    }
                    <h1>{ title }</h1>
                    <span class={classes!("state", inspection.state.css_class())}>{ inspection.state.label() }</span>
                    <dl class="meta">
                        { meta("Produit", inspection.product_name.clone()) }
                        { meta("Fabricant", inspection.manufacturer.clone()) }
                        { meta("N° de série", Some(inspection.serial_number.clone())) }
                        { meta("Fabrication", inspection.manufacture_date.map(|d| format_date(Some(d)))) }
                        { meta("Mise en service", inspection.first_use_date.map(|d| format_date(Some(d)))) }
                        { meta("Contrôlé le", inspection.inspection_date.map(|d| format_date(Some(d)))) }
                        { meta("Contrôleur", inspection.inspector.clone()) }
                        <dt>{"Prochain contrôle"}</dt>
                        <dd class={classes!(overdue.then_some("overdue"))}>{ format_date(inspection.next_inspection_due()) }</dd>
                    </dl>
                    {
                        match component.qr_src() {
                            Some(src) => html! {
                                <img class="qr" src={src} alt="QR code" onclick={link.callback(|_| Msg::OpenQrSheet)} />
                            },
                            None => html! {},
                        }
                    }
                    {
                        match &public_url {
                            Some(url) => html! { <a class="public-link" href={url.clone()}>{ url.clone() }</a> },
                            None => html! {},
                        }
                    }
                </header>
                {
                    match component.mismatch() {
                        Some(mismatch) => html! { <div class="warning">{ mismatch.to_string() }</div> },
                        None => html! {},
                    }
                }
                { render_sections(&component.sections()) }
            </PrintSheet>
            {
                if ctx.props().admin {
                    html! {
                        <div class="admin-toolbar">
                            <button
                                class="icon-btn"
                                disabled={component.regenerating}
                                onclick={link.callback(|_| Msg::RegenerateQr)}
                            >
                                <i class="material-icons">{"qr_code"}</i>
                                <span class="icon-label">{"Régénérer le QR code"}</span>
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                match component.qr_src() {
                    Some(src) => html! {
                        <QrTopSheet
                            node_ref={component.qr_sheet_ref.clone()}
                            src={src}
                            public_url={public_url.unwrap_or_default()}
                            on_close={link.callback(|_| Msg::CloseQrSheet)}
                        />
                    },
                    None => html! {},
                }
            }
        </>
    }
}

fn meta(label: &'static str, value: Option<String>) -> Html {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(value) => html! { <><dt>{ label }</dt><dd>{ value }</dd></> },
        None => html! {},
    }
}
