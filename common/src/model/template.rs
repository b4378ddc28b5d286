//! Configurable inspection templates.
//!
//! A template is an ordered list of sections, each holding an ordered list of
//! subsections. The order of `structure.sections` is the print order: the
//! section renderer sorts its output by it, regardless of the order in which
//! results were saved.

use crate::model::inspection::EquipmentType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub equipment_type: Option<EquipmentType>,
    pub structure: TemplateStructure,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemplateStructure {
    #[serde(default)]
    pub sections: Vec<TemplateSection>,
}

/// How a section is laid out on the printed sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionLayout {
    /// Title on top, rows stacked below.
    #[default]
    Stacked,
    /// Title in a left column, rows in a right column.
    TitleContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub layout: SectionLayout,
    #[serde(default)]
    pub subsections: Vec<TemplateSubsection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSubsection {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub has_status: bool,
    #[serde(default)]
    pub is_subtitle: bool,
    #[serde(default)]
    pub is_list_item: bool,
    /// Words of the label may be struck individually.
    #[serde(default)]
    pub crossable_words: bool,
}

impl TemplateSubsection {
    /// Regular checklist item carrying a status.
    pub fn item(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            has_status: true,
            is_subtitle: false,
            is_list_item: false,
            crossable_words: false,
        }
    }

    /// Free-text field without a status.
    pub fn note(id: &str, label: &str) -> Self {
        Self {
            has_status: false,
            ..Self::item(id, label)
        }
    }

    pub fn subtitle(id: &str, label: &str) -> Self {
        Self {
            has_status: false,
            is_subtitle: true,
            ..Self::item(id, label)
        }
    }

    pub fn crossable(mut self) -> Self {
        self.crossable_words = true;
        self
    }

    pub fn list_item(mut self) -> Self {
        self.is_list_item = true;
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template id must not be empty")]
    EmptyId,
    #[error("duplicate section id '{0}'")]
    DuplicateSection(String),
    #[error("duplicate subsection id '{subsection}' in section '{section}'")]
    DuplicateSubsection { section: String, subsection: String },
}

impl InspectionTemplate {
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.id.trim().is_empty() {
            return Err(TemplateError::EmptyId);
        }
        let mut sections = HashSet::new();
        for section in &self.structure.sections {
            if !sections.insert(section.id.as_str()) {
                return Err(TemplateError::DuplicateSection(section.id.clone()));
            }
            let mut subsections = HashSet::new();
            for sub in &section.subsections {
                if !subsections.insert(sub.id.as_str()) {
                    return Err(TemplateError::DuplicateSubsection {
                        section: section.id.clone(),
                        subsection: sub.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Position of a section in print order.
    pub fn section_position(&self, section_id: &str) -> Option<usize> {
        self.structure
            .sections
            .iter()
            .position(|s| s.id == section_id)
    }

    pub fn section(&self, section_id: &str) -> Option<&TemplateSection> {
        self.structure.sections.iter().find(|s| s.id == section_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(sections: Vec<TemplateSection>) -> InspectionTemplate {
        InspectionTemplate {
            id: "tpl-1".to_string(),
            name: "Casque".to_string(),
            equipment_type: Some(EquipmentType::Helmet),
            structure: TemplateStructure { sections },
        }
    }

    fn section(id: &str, subs: Vec<TemplateSubsection>) -> TemplateSection {
        TemplateSection {
            id: id.to_string(),
            title: id.to_uppercase(),
            layout: SectionLayout::Stacked,
            subsections: subs,
        }
    }

    #[test]
    fn flags_default_to_false_when_absent() {
        let sub: TemplateSubsection =
            serde_json::from_str(r#"{"id":"a","label":"Sangles"}"#).unwrap();
        assert!(!sub.has_status && !sub.is_subtitle && !sub.crossable_words);

        let section: TemplateSection =
            serde_json::from_str(r#"{"id":"s","title":"S","layout":"title-content"}"#).unwrap();
        assert_eq!(section.layout, SectionLayout::TitleContent);
        assert!(section.subsections.is_empty());
    }

    #[test]
    fn validate_detects_duplicates() {
        let dup = template(vec![section("a", vec![]), section("a", vec![])]);
        assert_eq!(
            dup.validate(),
            Err(TemplateError::DuplicateSection("a".to_string()))
        );

        let dup_sub = template(vec![section(
            "a",
            vec![TemplateSubsection::item("x", "X"), TemplateSubsection::note("x", "X")],
        )]);
        assert!(matches!(
            dup_sub.validate(),
            Err(TemplateError::DuplicateSubsection { .. })
        ));

        let mut empty = template(vec![]);
        empty.id = " ".to_string();
        assert_eq!(empty.validate(), Err(TemplateError::EmptyId));
    }

    #[test]
    fn section_position_follows_structure_order() {
        let tpl = template(vec![section("b", vec![]), section("a", vec![])]);
        assert_eq!(tpl.section_position("a"), Some(1));
        assert_eq!(tpl.section_position("zz"), None);
    }
}
