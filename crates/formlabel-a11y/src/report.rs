//! Report entries

use serde::Serialize;

use crate::label::LabelSource;

/// First remediation for an unlabeled field
pub const SUGGEST_ADD_LABEL: &str =
    "Add a label element associated with this field or an aria-label attribute.";

/// Second remediation for an unlabeled field
pub const SUGGEST_ARIA_CONTEXT: &str =
    "Consider providing additional context with aria-label or aria-describedby.";

/// One analysis result per field element.
///
/// Serializes to `{"field", "hasLabel", "suggestions", "snippet", "context"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    /// Markup of the field element itself
    pub field: String,
    pub has_label: bool,
    /// Empty when `has_label` is true
    pub suggestions: Vec<String>,
    /// Markup of the surrounding container
    pub snippet: String,
    /// Nearby plain text
    pub context: String,
    /// Which mechanism labeled the field. Library-only.
    #[serde(skip)]
    pub label_source: Option<LabelSource>,
}

impl FieldReport {
    /// Remediation list for a field with the given labeling outcome
    pub fn suggestions_for(has_label: bool) -> Vec<String> {
        if has_label {
            Vec::new()
        } else {
            vec![SUGGEST_ADD_LABEL.to_string(), SUGGEST_ARIA_CONTEXT.to_string()]
        }
    }
}
