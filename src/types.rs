use serde::{Deserialize, Serialize};

/// Number of answer options in every template question
pub const ANSWER_COUNT: usize = 4;

/// Type tag of the only question kind this format round-trips
pub const MULTICHOICE: &str = "multichoice";

/// Answer numbering used for imported questions (1, 2, 3, ...)
pub const NUMBERING_NUMERIC: &str = "123";

/// Root of every imported category path
pub const CATEGORY_ROOT: &str = "top";

//==============================================================================
// Import: raw template records
//==============================================================================

/// One question block as read from the spreadsheet, before normalization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    /// Question text cells joined with `<br/>`
    pub question_text: String,
    /// One answer per row of the block, in row order
    pub answers: [String; ANSWER_COUNT],
    /// 1-4 selects the correct answer; anything else means none
    pub correct_indicator: i64,
    /// Reserved per-answer feedback, always empty in the current template
    pub feedback: [String; ANSWER_COUNT],
    /// General feedback cells joined with `<br/>`
    pub general_feedback: String,
    /// Category label, trimmed
    pub category: String,
}

impl RawRecord {
    /// Zero-based index of the correct answer, if the indicator selects one
    pub fn correct_index(&self) -> Option<usize> {
        match self.correct_indicator {
            1..=4 => Some((self.correct_indicator - 1) as usize),
            _ => None,
        }
    }
}

//==============================================================================
// Import: canonical question model
//==============================================================================

/// Text format of a rich-text field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Html,
    Plain,
}

/// Rich-text field: text plus format plus attached files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    pub text: String,
    pub format: TextFormat,
    #[serde(default)]
    pub files: Vec<String>,
}

impl RichText {
    /// HTML-formatted field with no attached files
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Html,
            files: Vec::new(),
        }
    }
}

/// Synthetic record that switches the target category for the next question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMarker {
    /// Category path, e.g. `top/algebra`
    pub category: String,
}

/// Normalized multiple-choice question ready for a question bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalQuestion {
    pub name: String,
    pub question_text: String,
    pub question_text_format: TextFormat,
    /// Answer numbering style (`123`)
    pub answer_numbering: String,
    /// Single-answer mode
    pub single: bool,
    pub answers: [RichText; ANSWER_COUNT],
    /// 1.0 at the correct answer, 0.0 elsewhere
    pub fractions: [f64; ANSWER_COUNT],
    pub feedback: [RichText; ANSWER_COUNT],
    pub general_feedback: String,
    pub general_feedback_format: TextFormat,
}

impl CanonicalQuestion {
    /// Index of the answer carrying a full fraction, if any
    pub fn correct_index(&self) -> Option<usize> {
        self.fractions.iter().position(|f| *f == 1.0)
    }
}

/// One entry of the import output sequence
///
/// Import always produces a `Category` entry immediately followed by the
/// `Multichoice` entry it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "qtype", rename_all = "lowercase")]
pub enum ImportItem {
    Category(CategoryMarker),
    Multichoice(CanonicalQuestion),
}

impl ImportItem {
    pub fn as_question(&self) -> Option<&CanonicalQuestion> {
        match self {
            ImportItem::Multichoice(q) => Some(q),
            ImportItem::Category(_) => None,
        }
    }

    pub fn as_category(&self) -> Option<&CategoryMarker> {
        match self {
            ImportItem::Category(c) => Some(c),
            ImportItem::Multichoice(_) => None,
        }
    }
}

//==============================================================================
// Export: question objects from an external store
//==============================================================================

/// Answer of an exportable question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportAnswer {
    pub answer: String,
    /// 1.0 correct, 0.5 partially correct, 0.0 incorrect
    #[serde(default)]
    pub fraction: f64,
}

impl ExportAnswer {
    pub fn new(answer: impl Into<String>, fraction: f64) -> Self {
        Self {
            answer: answer.into(),
            fraction,
        }
    }
}

fn default_mark() -> f64 {
    1.0
}

/// Question as exposed by a question bank for export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportableQuestion {
    /// Question type tag; only `multichoice` is exported
    pub qtype: String,
    pub name: String,
    pub question_text: String,
    pub answers: Vec<ExportAnswer>,
    #[serde(default)]
    pub single: bool,
    #[serde(default)]
    pub answer_numbering: String,
    #[serde(default)]
    pub correct_feedback: String,
    #[serde(default)]
    pub partially_correct_feedback: String,
    #[serde(default)]
    pub incorrect_feedback: String,
    /// Feedback shown regardless of the answer; only written to templates
    #[serde(default)]
    pub general_feedback: String,
    #[serde(default = "default_mark")]
    pub default_mark: f64,
    /// Category label, used when writing a template workbook
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&CanonicalQuestion> for ExportableQuestion {
    fn from(question: &CanonicalQuestion) -> Self {
        let answers = question
            .answers
            .iter()
            .zip(question.fractions.iter())
            .map(|(answer, fraction)| ExportAnswer::new(answer.text.clone(), *fraction))
            .collect();

        Self {
            qtype: MULTICHOICE.to_string(),
            name: question.name.clone(),
            question_text: question.question_text.clone(),
            answers,
            single: question.single,
            answer_numbering: question.answer_numbering.clone(),
            correct_feedback: String::new(),
            partially_correct_feedback: String::new(),
            incorrect_feedback: String::new(),
            general_feedback: question.general_feedback.clone(),
            default_mark: default_mark(),
            category: None,
        }
    }
}
