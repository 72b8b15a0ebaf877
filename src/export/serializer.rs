//! Delimited text serialization of multiple-choice questions
//!
//! Row layout, one field per comma:
//!
//! ```text
//! "name","text","A","B","C","D",<answer letters>"numbering","correct","partial","incorrect","mark",
//! ```
//!
//! Text fields are wrapped in double quotes but never escaped, so embedded
//! quotes or commas pass through as-is. Consumers of this format expect that.

use super::{ExportOptions, MultiSelectEncoding};
use crate::types::{ExportableQuestion, ANSWER_COUNT, MULTICHOICE};
use tracing::debug;

/// Header line emitted once per export run
pub const HEADER: &str = "questionname,questiontext,A,B,C,D,Answer 1,Answer 2,answernumbering, correctfeedback, partiallycorrectfeedback, incorrectfeedback, defaultmark";

/// Answer letters by position
const LETTERS: [char; ANSWER_COUNT] = ['A', 'B', 'C', 'D'];

/// Number of answer-letter fields in the header (`Answer 1`, `Answer 2`)
const LETTER_FIELDS: usize = 2;

/// Serializer state for one export run
#[derive(Debug, Default)]
pub struct QuestionSerializer {
    header_emitted: bool,
    options: ExportOptions,
}

impl QuestionSerializer {
    /// Start a new export run
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExportOptions) -> Self {
        Self {
            header_emitted: false,
            options,
        }
    }

    /// Whether the header has been returned in this run
    pub fn header_emitted(&self) -> bool {
        self.header_emitted
    }

    /// Header line on the first call, empty afterwards
    pub fn serialize_header_once(&mut self) -> String {
        if self.header_emitted {
            return String::new();
        }
        self.header_emitted = true;
        HEADER.to_string()
    }

    /// Delimited row for `question`, or an empty string when the question is
    /// not a four-answer multiple-choice question
    pub fn serialize_row(&self, question: &ExportableQuestion) -> String {
        if question.qtype != MULTICHOICE {
            debug!(name = %question.name, qtype = %question.qtype, "skipping non-multichoice question");
            return String::new();
        }
        if question.answers.len() != ANSWER_COUNT {
            debug!(
                name = %question.name,
                answers = question.answers.len(),
                "skipping question without exactly four answers"
            );
            return String::new();
        }

        let mut row = String::new();
        push_field(&mut row, &question.name);
        push_field(&mut row, &question.question_text);
        for answer in &question.answers {
            push_field(&mut row, &answer.answer);
        }
        row.push_str(&self.answer_letters(question));
        push_field(&mut row, &question.answer_numbering);
        push_field(&mut row, &question.correct_feedback);
        push_field(&mut row, &question.partially_correct_feedback);
        push_field(&mut row, &question.incorrect_feedback);
        push_field(&mut row, &format_mark(question.default_mark));
        row
    }

    /// The `Answer 1`/`Answer 2` fields
    ///
    /// Single-answer mode writes the letter of the full-fraction answer
    /// followed by an empty second field; the last such answer wins.
    /// Multi-answer mode collects the letters of every half-fraction answer.
    fn answer_letters(&self, question: &ExportableQuestion) -> String {
        let mut single: Option<char> = None;
        let mut partial: Vec<char> = Vec::new();

        for (letter, answer) in LETTERS.iter().zip(&question.answers) {
            if question.single && answer.fraction == 1.0 {
                single = Some(*letter);
            } else if !question.single && answer.fraction == 0.5 {
                partial.push(*letter);
            }
        }

        if let Some(letter) = single {
            return format!("{}, ,", letter);
        }

        match self.options.multi_select {
            MultiSelectEncoding::Legacy => partial.iter().map(|l| format!("{},", l)).collect(),
            MultiSelectEncoding::Padded => {
                let mut fields: Vec<String> = partial.iter().map(char::to_string).collect();
                while fields.len() < LETTER_FIELDS {
                    fields.push(" ".to_string());
                }
                fields.iter().map(|f| format!("{},", f)).collect()
            }
        }
    }
}

/// Append `"value",`
fn push_field(row: &mut String, value: &str) {
    row.push('"');
    row.push_str(value);
    row.push_str("\",");
}

/// Format a mark without unnecessary decimal places
pub(crate) fn format_mark(n: f64) -> String {
    let rounded = (n * 1e7).round() / 1e7;
    format!("{:.7}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
