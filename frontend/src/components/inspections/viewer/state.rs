//! Runtime state of the inspection viewer.

use common::model::inspection::Inspection;
use common::model::template::InspectionTemplate;
use common::render::{check_template_match, render_inspection, RenderedSection, TemplateMismatch};
use common::requests::QrCodeResponse;
use yew::NodeRef;

pub const LOAD_ERROR: &str = "Impossible de charger cette inspection.";

pub struct InspectionViewerComponent {
    pub inspection: Option<Inspection>,
    /// Template the sections are rendered with, once fetched.
    pub template: Option<InspectionTemplate>,
    /// Set once the template request (if any) has completed.
    pub template_resolved: bool,
    pub qr: Option<QrCodeResponse>,
    /// User-facing message; details go to the console.
    pub error: Option<String>,
    pub regenerating: bool,
    pub qr_sheet_ref: NodeRef,
}

impl InspectionViewerComponent {
    pub fn new() -> Self {
        Self {
            inspection: None,
            template: None,
            template_resolved: false,
            qr: None,
            error: None,
            regenerating: false,
            qr_sheet_ref: NodeRef::default(),
        }
    }

    /// Without its template a template-driven inspection has no checklist to
    /// show; an empty sheet would read as "no anomaly", so the whole view
    /// fails instead.
    pub fn template_failed(&mut self) {
        self.template = None;
        self.template_resolved = true;
        self.error = Some(LOAD_ERROR.to_string());
    }

    pub fn is_loading(&self) -> bool {
        self.error.is_none() && (self.inspection.is_none() || !self.template_resolved)
    }

    pub fn sections(&self) -> Vec<RenderedSection> {
        match &self.inspection {
            Some(inspection) => render_inspection(inspection, self.template.as_ref()),
            None => Vec::new(),
        }
    }

    pub fn mismatch(&self) -> Option<TemplateMismatch> {
        match (&self.inspection, &self.template) {
            (Some(inspection), Some(template)) => check_template_match(inspection, template),
            _ => None,
        }
    }

    /// Image shown for the QR code: the stored one, else the generated one.
    pub fn qr_src(&self) -> Option<String> {
        self.inspection
            .as_ref()
            .and_then(|i| i.qr_code.clone())
            .or_else(|| self.qr.as_ref().map(|qr| qr.url.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_template_stops_loading_with_an_error() {
        let mut viewer = InspectionViewerComponent::new();
        assert!(viewer.is_loading());

        viewer.template_failed();
        assert!(!viewer.is_loading());
        assert_eq!(viewer.error.as_deref(), Some(LOAD_ERROR));
        assert!(viewer.sections().is_empty());
    }
}
