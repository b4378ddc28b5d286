use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of a single checklist item.
///
/// `V` is the value every point starts with, so a point still in `V` carries no
/// information on its own: the renderers only show it when a comment or a
/// struck word is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PointStatus {
    /// Valid.
    #[default]
    V,
    /// Not applicable.
    NA,
    /// Invalid, the equipment fails on this point.
    X,
}

impl PointStatus {
    /// Short French label printed next to the checklist item.
    pub fn label(&self) -> &'static str {
        match self {
            PointStatus::V => "Conforme",
            PointStatus::NA => "Non applicable",
            PointStatus::X => "Non conforme",
        }
    }

    /// CSS class used by both the server-side and the client-side views.
    pub fn css_class(&self) -> &'static str {
        match self {
            PointStatus::V => "status-v",
            PointStatus::NA => "status-na",
            PointStatus::X => "status-x",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == PointStatus::V
    }
}

/// The atomic result of one checklist item: a status plus an optional comment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InspectionPoint {
    #[serde(default)]
    pub status: PointStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl InspectionPoint {
    pub fn new(status: PointStatus) -> Self {
        Self {
            status,
            comment: None,
        }
    }

    pub fn with_comment(status: PointStatus, comment: impl Into<String>) -> Self {
        Self {
            status,
            comment: Some(comment.into()),
        }
    }

    /// Comment with surrounding whitespace removed, `None` when blank.
    pub fn comment_text(&self) -> Option<&str> {
        self.comment
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Per-field word strike marks: `"section.subsection"` -> word -> struck.
pub type CrossedOutWords = BTreeMap<String, BTreeMap<String, bool>>;

/// Saved template results: section id -> subsection id -> point.
pub type TemplateSections = BTreeMap<String, BTreeMap<String, InspectionPoint>>;

/// Builds the key under which a field's struck words are stored.
pub fn field_key(section_id: &str, subsection_id: &str) -> String {
    format!("{}.{}", section_id, subsection_id)
}

/// Returns `true` if at least one word of the field is marked as struck.
pub fn has_struck_word(crossed: &CrossedOutWords, key: &str) -> bool {
    crossed
        .get(key)
        .map_or(false, |words| words.values().any(|struck| *struck))
}
