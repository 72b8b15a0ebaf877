//! Questions → blank template workbook (.xlsx)

use crate::error::{QuizError, QuizResult};
use crate::layout::{
    binding, column_index, Field, BLOCK_ROWS, FIRST_BLOCK_ROW, LINE_BREAK, TEMPLATE_HEADERS,
};
use crate::types::{ExportableQuestion, ANSWER_COUNT, MULTICHOICE};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::debug;

/// Worksheet name of written templates
pub const TEMPLATE_SHEET: &str = "Questions";

/// Writes questions into the 4-row block layout read by the importer
pub struct TemplateWriter {
    questions: Vec<ExportableQuestion>,
}

impl TemplateWriter {
    pub fn new(questions: Vec<ExportableQuestion>) -> Self {
        Self { questions }
    }

    /// Save the template workbook, returning the number of blocks written
    pub fn write(&self, output_path: &Path) -> QuizResult<usize> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(TEMPLATE_SHEET)
            .map_err(|e| QuizError::Export(format!("Failed to set worksheet name: {}", e)))?;

        let header_format = Format::new().set_bold();
        for (column, title) in TEMPLATE_HEADERS {
            worksheet
                .write_string_with_format(0, column_index(column), title, &header_format)
                .map_err(|e| QuizError::Export(format!("Failed to write header: {}", e)))?;
        }

        let mut written = 0;
        for question in &self.questions {
            if question.qtype != MULTICHOICE || question.answers.len() != ANSWER_COUNT {
                debug!(name = %question.name, "question does not fit the template, skipped");
                continue;
            }
            let block_row = FIRST_BLOCK_ROW + written as u32 * BLOCK_ROWS;
            Self::write_block(worksheet, block_row, question)?;
            written += 1;
        }

        workbook
            .save(output_path)
            .map_err(|e| QuizError::Export(format!("Failed to save template: {}", e)))?;

        Ok(written)
    }

    fn write_block(
        worksheet: &mut Worksheet,
        block_row: u32,
        question: &ExportableQuestion,
    ) -> QuizResult<()> {
        let (text, text_extra) = split_lines(&question.question_text);
        let (feedback, feedback_extra) = split_lines(&question.general_feedback);

        let mut cells: Vec<(Field, &str)> = vec![
            (Field::Name, question.name.as_str()),
            (Field::Category, question.category.as_deref().unwrap_or_default()),
            (Field::QuestionText, text),
            (Field::QuestionTextExtra, text_extra),
            (Field::GeneralFeedback, feedback),
            (Field::GeneralFeedbackExtra, feedback_extra),
        ];
        for (i, answer) in question.answers.iter().enumerate() {
            cells.push((Field::Answer(i), answer.answer.as_str()));
        }

        for (field, value) in cells {
            if value.is_empty() {
                continue;
            }
            let cell = binding(field);
            worksheet
                .write_string(cell.row(block_row) - 1, column_index(cell.column), value)
                .map_err(|e| QuizError::Export(format!("Failed to write cell: {}", e)))?;
        }

        // Indicator stays empty when no answer is fully correct. With several
        // full-fraction answers the first one is written here, while the
        // delimited row export takes the last one.
        if let Some(index) = question.answers.iter().position(|a| a.fraction == 1.0) {
            let cell = binding(Field::CorrectIndicator);
            worksheet
                .write_number(
                    cell.row(block_row) - 1,
                    column_index(cell.column),
                    (index + 1) as f64,
                )
                .map_err(|e| QuizError::Export(format!("Failed to write cell: {}", e)))?;
        }

        Ok(())
    }
}

/// Split a joined text field back into its two template cells
fn split_lines(text: &str) -> (&str, &str) {
    text.split_once(LINE_BREAK).unwrap_or((text, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::QuestionSerializer;
    use crate::grid::{open_sheet, Grid};
    use crate::types::ExportAnswer;
    use tempfile::TempDir;

    fn question(name: &str, correct: usize) -> ExportableQuestion {
        ExportableQuestion {
            qtype: MULTICHOICE.to_string(),
            name: name.to_string(),
            question_text: "3, 4, 7, 8<br/>What comes next?".to_string(),
            answers: ["7", "10", "14", "15"]
                .iter()
                .enumerate()
                .map(|(i, t)| ExportAnswer::new(*t, if i == correct { 1.0 } else { 0.0 }))
                .collect(),
            single: true,
            answer_numbering: "123".to_string(),
            correct_feedback: String::new(),
            partially_correct_feedback: String::new(),
            incorrect_feedback: String::new(),
            general_feedback: "Add 4<br/>".to_string(),
            default_mark: 1.0,
            category: Some("Algebra".to_string()),
        }
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a<br/>b"), ("a", "b"));
        assert_eq!(split_lines("a<br/>b<br/>c"), ("a", "b<br/>c"));
        assert_eq!(split_lines("plain"), ("plain", ""));
        assert_eq!(split_lines("<br/>"), ("", ""));
    }

    #[test]
    fn test_write_template_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("template.xlsx");

        let mut skipped = question("T1", 0);
        skipped.qtype = "truefalse".to_string();
        let writer = TemplateWriter::new(vec![question("Q1", 3), skipped, question("Q2", 0)]);
        assert_eq!(writer.write(&path).unwrap(), 2);

        let grid = open_sheet(&path, Some(TEMPLATE_SHEET)).unwrap();
        assert_eq!(grid.cell(1, 'A'), "Name");
        assert_eq!(grid.cell(2, 'A'), "Q1");
        assert_eq!(grid.cell(2, 'B'), "Algebra");
        assert_eq!(grid.cell(2, 'E'), "3, 4, 7, 8");
        assert_eq!(grid.cell(2, 'I'), "What comes next?");
        assert_eq!(grid.cell(2, 'G'), "4");
        assert_eq!(grid.cell(2, 'H'), "Add 4");
        assert_eq!(grid.cell(5, 'F'), "15");
        assert_eq!(grid.cell(6, 'A'), "Q2");
        assert_eq!(grid.cell(6, 'G'), "1");
    }

    #[test]
    fn test_several_correct_answers_first_is_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("template.xlsx");

        let mut q = question("Q1", 1);
        q.answers[3].fraction = 1.0;
        TemplateWriter::new(vec![q.clone()]).write(&path).unwrap();

        let grid = open_sheet(&path, None).unwrap();
        assert_eq!(grid.cell(2, 'G'), "2");

        let row = QuestionSerializer::new().serialize_row(&q);
        assert!(row.contains("\"15\",D, ,"));
    }
}
