//! Inspection records.
//!
//! An inspection describes one physical unit of safety equipment and the
//! point-by-point result of its periodic check. Two storage shapes coexist:
//!
//! - **static**: results live in `points`, keyed `section.field`, and the
//!   layout comes from the built-in catalog of the equipment family
//!   (see `render::families`);
//! - **template-driven**: `template_id` names an [`InspectionTemplate`] and the
//!   results live in `template_sections`, keyed by section then subsection id.
//!
//! Both shapes share `crossed_out_words`, so a label word can be struck in
//! either mode.
//!
//! [`InspectionTemplate`]: crate::model::template::InspectionTemplate

use crate::model::point::{CrossedOutWords, InspectionPoint, TemplateSections};
use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Months between two periodic inspections when no explicit date is recorded.
pub const DEFAULT_INSPECTION_INTERVAL_MONTHS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentType {
    #[serde(alias = "casque")]
    Helmet,
    #[serde(alias = "harnais")]
    Harness,
    #[serde(alias = "mousqueton")]
    Carabiner,
    #[serde(other)]
    Other,
}

impl EquipmentType {
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentType::Helmet => "Casque",
            EquipmentType::Harness => "Harnais",
            EquipmentType::Carabiner => "Mousqueton",
            EquipmentType::Other => "Équipement",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::Helmet => "helmet",
            EquipmentType::Harness => "harness",
            EquipmentType::Carabiner => "carabiner",
            EquipmentType::Other => "other",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "helmet" | "casque" => Ok(EquipmentType::Helmet),
            "harness" | "harnais" => Ok(EquipmentType::Harness),
            "carabiner" | "mousqueton" => Ok(EquipmentType::Carabiner),
            "other" => Ok(EquipmentType::Other),
            other => Err(format!("unknown equipment type '{}'", other)),
        }
    }
}

/// Verdict of the inspection for the unit as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InspectionState {
    #[default]
    InService,
    ToMonitor,
    Rejected,
}

impl InspectionState {
    pub fn label(&self) -> &'static str {
        match self {
            InspectionState::InService => "En service",
            InspectionState::ToMonitor => "À surveiller",
            InspectionState::Rejected => "Rebut",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            InspectionState::InService => "state-ok",
            InspectionState::ToMonitor => "state-warn",
            InspectionState::Rejected => "state-ko",
        }
    }
}

/// A stored inspection record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub id: i64,
    pub reference: String,
    #[serde(default)]
    pub serial_number: String,
    pub equipment_type: EquipmentType,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub manufacture_date: Option<NaiveDate>,
    #[serde(default)]
    pub first_use_date: Option<NaiveDate>,
    #[serde(default)]
    pub inspection_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_inspection_date: Option<NaiveDate>,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Last stored QR image, as a data URL or a remote URL.
    #[serde(default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub inspector: Option<String>,
    #[serde(default)]
    pub state: InspectionState,
    #[serde(default)]
    pub points: BTreeMap<String, InspectionPoint>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub template_sections: Option<TemplateSections>,
    #[serde(default)]
    pub crossed_out_words: CrossedOutWords,
    pub created_at: DateTime<Utc>,
}

/// Payload of the admin creation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInspection {
    pub reference: String,
    #[serde(default)]
    pub serial_number: String,
    pub equipment_type: EquipmentType,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub manufacture_date: Option<NaiveDate>,
    #[serde(default)]
    pub first_use_date: Option<NaiveDate>,
    #[serde(default)]
    pub inspection_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_inspection_date: Option<NaiveDate>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub inspector: Option<String>,
    #[serde(default)]
    pub state: InspectionState,
    #[serde(default)]
    pub points: BTreeMap<String, InspectionPoint>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub template_sections: Option<TemplateSections>,
    #[serde(default)]
    pub crossed_out_words: CrossedOutWords,
}

impl NewInspection {
    /// Checks the fields the store cannot default.
    pub fn validate(&self) -> Result<(), String> {
        if self.reference.trim().is_empty() {
            return Err("La référence de l'équipement est obligatoire".to_string());
        }
        if self.template_id.is_none() && self.template_sections.is_some() {
            return Err("Des résultats de modèle sont fournis sans identifiant de modèle".to_string());
        }
        Ok(())
    }

    /// Turns the payload into a record once the store has assigned an id.
    pub fn into_inspection(self, id: i64, created_at: DateTime<Utc>) -> Inspection {
        Inspection {
            id,
            reference: self.reference.trim().to_string(),
            serial_number: self.serial_number,
            equipment_type: self.equipment_type,
            product_name: self.product_name,
            manufacturer: self.manufacturer,
            manufacture_date: self.manufacture_date,
            first_use_date: self.first_use_date,
            inspection_date: self.inspection_date,
            next_inspection_date: self.next_inspection_date,
            photo_url: self.photo_url,
            qr_code: None,
            inspector: self.inspector,
            state: self.state,
            points: self.points,
            template_id: self.template_id,
            template_sections: self.template_sections,
            crossed_out_words: self.crossed_out_words,
            created_at,
        }
    }
}

impl Inspection {
    pub fn is_template_driven(&self) -> bool {
        self.template_id.is_some()
    }

    /// Date of the next periodic check: the recorded one, otherwise the
    /// inspection date plus the default interval.
    pub fn next_inspection_due(&self) -> Option<NaiveDate> {
        self.next_inspection_date.or_else(|| {
            self.inspection_date.and_then(|d| {
                d.checked_add_months(Months::new(DEFAULT_INSPECTION_INTERVAL_MONTHS))
            })
        })
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.next_inspection_due().map_or(false, |due| due < today)
    }

    pub fn summary(&self) -> InspectionSummary {
        InspectionSummary {
            id: self.id,
            reference: self.reference.clone(),
            serial_number: self.serial_number.clone(),
            equipment_type: self.equipment_type,
            state: self.state,
            inspection_date: self.inspection_date,
            next_inspection_date: self.next_inspection_due(),
        }
    }
}

/// Row of the inspection list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionSummary {
    pub id: i64,
    pub reference: String,
    pub serial_number: String,
    pub equipment_type: EquipmentType,
    pub state: InspectionState,
    pub inspection_date: Option<NaiveDate>,
    pub next_inspection_date: Option<NaiveDate>,
}
