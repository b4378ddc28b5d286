//! Message handling for the inspection viewer.
//!
//! Loading runs in two steps: the inspection, then the template to render it
//! with (the `?template=` override, else the inspection's own). Inspections
//! without a template skip the second request.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{fetch_qr_code, fetch_template, store_qr_code};
use crate::components::helpers::{show_toast, ToastKind};
use crate::tops_sheet::qr_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::state::{InspectionViewerComponent, LOAD_ERROR};

pub fn update(
    component: &mut InspectionViewerComponent,
    ctx: &Context<InspectionViewerComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::InspectionLoaded(inspection) => {
            let template_id = ctx
                .props()
                .template_id
                .clone()
                .or_else(|| inspection.template_id.clone());
            match template_id {
                Some(template_id) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match fetch_template(&template_id).await {
                            Ok(template) => link.send_message(Msg::TemplateLoaded(template)),
                            Err(e) => link.send_message(Msg::TemplateFailed(format!(
                                "template {}: {}",
                                template_id, e
                            ))),
                        }
                    });
                }
                None => component.template_resolved = true,
            }
            request_qr(ctx, inspection.id);
            component.inspection = Some(inspection);
            true
        }
        Msg::TemplateLoaded(template) => {
            component.template = Some(template);
            component.template_resolved = true;
            true
        }
        Msg::TemplateFailed(e) => {
            gloo_console::error!(format!("Inspection {} cannot be displayed, {}", ctx.props().id, e));
            component.template_failed();
            true
        }
        Msg::QrLoaded(qr) => {
            component.qr = Some(qr);
            true
        }
        Msg::LoadFailed(e) => {
            gloo_console::error!(format!("Inspection {} failed to load: {}", ctx.props().id, e));
            component.error = Some(LOAD_ERROR.to_string());
            true
        }
        Msg::RegenerateQr => {
            if component.regenerating {
                return false;
            }
            component.regenerating = true;
            let id = ctx.props().id;
            let codeword = component.inspection.as_ref().map(|i| i.reference.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = async {
                    let qr = fetch_qr_code(id, codeword.as_deref()).await?;
                    let stored = store_qr_code(id, qr.url.clone()).await?;
                    Ok::<_, String>((qr, stored.changed))
                }
                .await;
                match result {
                    Ok((qr, changed)) => link.send_message(Msg::QrStored { qr, changed }),
                    Err(e) => link.send_message(Msg::QrFailed(e)),
                }
            });
            true
        }
        Msg::QrStored { qr, changed } => {
            component.regenerating = false;
            if let Some(inspection) = component.inspection.as_mut() {
                inspection.qr_code = Some(qr.url.clone());
            }
            component.qr = Some(qr);
            show_toast(
                if changed {
                    "QR code enregistré."
                } else {
                    "QR code inchangé."
                },
                ToastKind::Success,
            );
            true
        }
        Msg::QrFailed(e) => {
            component.regenerating = false;
            gloo_console::error!(format!("QR regeneration failed: {}", e));
            show_toast("Erreur lors de la génération du QR code.", ToastKind::Failure);
            true
        }
        Msg::OpenQrSheet => {
            open_top_sheet(component.qr_sheet_ref.clone());
            false
        }
        Msg::CloseQrSheet => {
            close_top_sheet(component.qr_sheet_ref.clone());
            false
        }
    }
}

/// Asks the backend for a QR code without storing it. The answer also
/// carries the public link shown next to the stored image.
fn request_qr(ctx: &Context<InspectionViewerComponent>, id: i64) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match fetch_qr_code(id, None).await {
            Ok(qr) => link.send_message(Msg::QrLoaded(qr)),
            Err(e) => gloo_console::warn!(format!("QR code unavailable: {}", e)),
        }
    });
}
