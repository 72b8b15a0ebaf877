//! Raw record → canonical question

use crate::html::decode_entities;
use crate::types::{
    CanonicalQuestion, CategoryMarker, RawRecord, RichText, TextFormat, ANSWER_COUNT,
    CATEGORY_ROOT, NUMBERING_NUMERIC,
};

/// Builds the question-bank model from template records
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordNormalizer;

impl RecordNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize one record into its category marker and question
    pub fn normalize(&self, record: &RawRecord) -> (CategoryMarker, CanonicalQuestion) {
        let marker = CategoryMarker {
            category: Self::category_path(&record.category),
        };

        let question = CanonicalQuestion {
            name: record.name.clone(),
            question_text: decode_entities(&record.question_text),
            question_text_format: TextFormat::Html,
            answer_numbering: NUMBERING_NUMERIC.to_string(),
            single: true,
            answers: std::array::from_fn(|i| Self::text_field(&record.answers[i])),
            fractions: Self::fractions(record.correct_indicator),
            feedback: std::array::from_fn(|i| Self::text_field(&record.feedback[i])),
            general_feedback: decode_entities(&record.general_feedback),
            general_feedback_format: TextFormat::Html,
        };

        (marker, question)
    }

    /// `top/<category>` with the label trimmed and lowercased
    pub fn category_path(category: &str) -> String {
        format!("{}/{}", CATEGORY_ROOT, category.trim().to_lowercase())
    }

    /// 1.0 at `indicator - 1`, 0.0 elsewhere; all zero when out of range
    pub fn fractions(indicator: i64) -> [f64; ANSWER_COUNT] {
        std::array::from_fn(|i| if indicator == i as i64 + 1 { 1.0 } else { 0.0 })
    }

    fn text_field(text: &str) -> RichText {
        RichText::html(decode_entities(text.trim()))
    }
}
