use crate::model::inspection::Inspection;
use crate::model::template::InspectionTemplate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The template loaded for display is not the one the inspection was filled
/// against. Viewers show it as a warning and render anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMismatch {
    pub expected: Option<String>,
    pub loaded: String,
}

impl fmt::Display for TemplateMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expected {
            Some(expected) => write!(
                f,
                "Le modèle chargé ({}) ne correspond pas au modèle de l'inspection ({}).",
                self.loaded, expected
            ),
            None => write!(
                f,
                "Le modèle chargé ({}) est ignoré: cette inspection n'utilise pas de modèle.",
                self.loaded
            ),
        }
    }
}

pub fn check_template_match(
    inspection: &Inspection,
    template: &InspectionTemplate,
) -> Option<TemplateMismatch> {
    if inspection.template_id.as_deref() == Some(template.id.as_str()) {
        return None;
    }
    Some(TemplateMismatch {
        expected: inspection.template_id.clone(),
        loaded: template.id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inspection::{EquipmentType, NewInspection};
    use crate::model::template::TemplateStructure;
    use chrono::Utc;

    fn inspection(template_id: Option<&str>) -> Inspection {
        let payload: NewInspection = serde_json::from_value(serde_json::json!({
            "reference": "M-1",
            "equipmentType": "carabiner",
            "templateId": template_id,
        }))
        .unwrap();
        payload.into_inspection(9, Utc::now())
    }

    fn template(id: &str) -> InspectionTemplate {
        InspectionTemplate {
            id: id.to_string(),
            name: "Mousqueton".to_string(),
            equipment_type: Some(EquipmentType::Carabiner),
            structure: TemplateStructure::default(),
        }
    }

    #[test]
    fn matching_ids_produce_no_warning() {
        assert_eq!(check_template_match(&inspection(Some("t1")), &template("t1")), None);
    }

    #[test]
    fn mismatch_names_both_templates() {
        let warning = check_template_match(&inspection(Some("t1")), &template("t2")).unwrap();
        let text = warning.to_string();
        assert!(text.contains("t1") && text.contains("t2"));

        let warning = check_template_match(&inspection(None), &template("t2")).unwrap();
        assert_eq!(warning.expected, None);
    }
}
