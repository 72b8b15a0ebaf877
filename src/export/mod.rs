//! Question export
//!
//! - [`QuestionSerializer`]: header line + one delimited row per question
//! - [`TemplateWriter`]: questions written back into the 4-row .xlsx template

mod serializer;
mod template;

pub use serializer::{QuestionSerializer, HEADER};
pub use template::TemplateWriter;

use crate::types::{ExportableQuestion, ImportItem, CATEGORY_ROOT};

/// File extension of export artifacts
pub const EXPORT_FILE_EXTENSION: &str = ".xlsx";

/// How partially-correct letters are written in multi-answer mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MultiSelectEncoding {
    /// Every letter followed by a comma (`A,` / `A,C,`), as older exports did
    #[default]
    Legacy,
    /// Letters padded to at least the `Answer 1`/`Answer 2` fields (`A, ,` / `A,C,`)
    ///
    /// Three or four partially correct answers are all written, so the row
    /// carries one extra field per letter beyond the second (`A,B,C,`).
    Padded,
}

/// Export settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub multi_select: MultiSelectEncoding,
}

/// Serialize a full export run: header once, then every qualifying row
///
/// Each call uses its own serializer, so concurrent runs never share the
/// header state.
pub fn export_lines(questions: &[ExportableQuestion], options: ExportOptions) -> Vec<String> {
    let mut serializer = QuestionSerializer::with_options(options);
    let mut lines = Vec::with_capacity(questions.len() + 1);

    for question in questions {
        let header = serializer.serialize_header_once();
        if !header.is_empty() {
            lines.push(header);
        }
        let row = serializer.serialize_row(question);
        if !row.is_empty() {
            lines.push(row);
        }
    }

    lines
}

/// Convert an import sequence into exportable questions
///
/// Each question takes the category label of the marker preceding it.
pub fn exportables_from_items(items: &[ImportItem]) -> Vec<ExportableQuestion> {
    let root = format!("{}/", CATEGORY_ROOT);
    let mut category: Option<String> = None;
    let mut questions = Vec::new();

    for item in items {
        match item {
            ImportItem::Category(marker) => {
                let label = marker
                    .category
                    .strip_prefix(&root)
                    .unwrap_or(&marker.category);
                category = Some(label.to_string());
            }
            ImportItem::Multichoice(question) => {
                let mut exportable = ExportableQuestion::from(question);
                exportable.category = category.clone();
                questions.push(exportable);
            }
        }
    }

    questions
}
