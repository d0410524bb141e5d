//! formlabel Accessibility
//!
//! Label-association analysis for form fields.
//!
//! For every `input`, `select` and `textarea` in a document, in document
//! order, the analyzer decides whether the field is labeled by:
//! - an explicit `<label for="...">` matching the field's `id`
//! - an enclosing `<label>`
//! - a non-blank `aria-label`
//! - an `aria-describedby` that names an existing element
//!
//! and reports the field's markup, surrounding snippet, nearby text and
//! remediation suggestions.

pub mod analyzer;
pub mod context;
pub mod field;
pub mod label;
pub mod report;

pub use analyzer::{AnalyzerOptions, LabelAnalyzer};
pub use field::{FieldKind, find_fields};
pub use label::{LabelAssociation, LabelIndex, LabelSource, resolve_label};
pub use report::{FieldReport, SUGGEST_ADD_LABEL, SUGGEST_ARIA_CONTEXT};

/// Analyze an HTML string with default options.
///
/// Never fails. Malformed markup is recovered by the parser; a document
/// without form fields yields an empty report.
pub fn analyze(html: &str) -> Vec<FieldReport> {
    LabelAnalyzer::default().analyze(html)
}
