//! Label Analyzer

use formlabel_dom::Document;
use formlabel_html::{HtmlParser, HtmlSerializer};

use crate::context;
use crate::field::find_fields;
use crate::label::LabelIndex;
use crate::report::FieldReport;

/// Output bounds for snippet and context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Maximum snippet length in characters before truncation
    pub snippet_max_chars: usize,
    /// Maximum context length in characters before truncation
    pub context_max_chars: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            snippet_max_chars: 2000,
            context_max_chars: 300,
        }
    }
}

/// Stateless analyzer; every call builds its own tree and report, so one
/// instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct LabelAnalyzer {
    options: AnalyzerOptions,
}

impl LabelAnalyzer {
    pub fn new(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Parse `html` and report on every field, in document order
    pub fn analyze(&self, html: &str) -> Vec<FieldReport> {
        let doc = HtmlParser::new().parse(html);
        self.analyze_document(&doc)
    }

    /// Report on every field of an already parsed document
    pub fn analyze_document(&self, doc: &Document) -> Vec<FieldReport> {
        let tree = doc.tree();
        let index = LabelIndex::build(doc);
        let compact = HtmlSerializer::new();

        let fields = find_fields(doc);
        tracing::debug!("Analyzing {} form fields in {}", fields.len(), doc.url());

        fields
            .into_iter()
            .map(|(id, kind)| {
                let association = index.resolve(tree, id);
                let has_label = association.is_some();
                let label_node = association.and_then(|a| a.label);

                tracing::debug!(
                    tag = kind.as_str(),
                    input_type = tree.element(id).and_then(|e| e.get_attr("type")).unwrap_or(""),
                    source = ?association.map(|a| a.source),
                    "field resolved"
                );

                FieldReport {
                    field: compact.serialize_outer(tree, id),
                    has_label,
                    suggestions: FieldReport::suggestions_for(has_label),
                    snippet: context::snippet(tree, id, self.options.snippet_max_chars),
                    context: context::context(tree, id, label_node, self.options.context_max_chars),
                    label_source: association.map(|a| a.source),
                }
            })
            .collect()
    }
}
