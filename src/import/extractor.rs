//! Fixed-layout block extraction

use crate::grid::Grid;
use crate::layout::{self, binding, Field, FIELDS, LINE_BREAK};
use crate::types::{RawRecord, ANSWER_COUNT};
use tracing::{debug, warn};

/// Reads question blocks from a grid at the fixed template offsets
#[derive(Debug, Clone, Copy)]
pub struct GridExtractor {
    max_row: u32,
}

impl Default for GridExtractor {
    fn default() -> Self {
        Self::new(layout::DEFAULT_MAX_ROW)
    }
}

impl GridExtractor {
    /// Create an extractor scanning block start rows up to `max_row`
    pub fn new(max_row: u32) -> Self {
        Self { max_row }
    }

    /// Extract one record per block, in ascending row order
    ///
    /// Blank blocks between filled ones still yield (empty) records; only the
    /// unused tail of the template after the last filled block is dropped.
    pub fn extract<G: Grid + ?Sized>(&self, grid: &G) -> Vec<RawRecord> {
        let rows: Vec<u32> = layout::block_rows(self.max_row).collect();
        let used = rows
            .iter()
            .rposition(|row| !Self::is_blank(grid, *row))
            .map_or(0, |last| last + 1);

        rows[..used]
            .iter()
            .map(|row| self.extract_block(grid, *row))
            .collect()
    }

    /// True when every templated cell of the block is empty
    fn is_blank<G: Grid + ?Sized>(grid: &G, row: u32) -> bool {
        FIELDS.iter().all(|field| {
            let cell = binding(*field);
            grid.cell(cell.row(row), cell.column).trim().is_empty()
        })
    }

    /// Read the block whose first row is `row`
    pub fn extract_block<G: Grid + ?Sized>(&self, grid: &G, row: u32) -> RawRecord {
        let read = |field: Field| {
            let cell = binding(field);
            grid.cell(cell.row(row), cell.column)
        };

        let answers: [String; ANSWER_COUNT] = std::array::from_fn(|i| read(Field::Answer(i)));

        let indicator_cell = read(Field::CorrectIndicator);
        let correct_indicator = parse_indicator(&indicator_cell);
        if !(1..=4).contains(&correct_indicator) && !indicator_cell.trim().is_empty() {
            warn!(
                row,
                indicator = %indicator_cell,
                "correct answer indicator out of range, question has no correct answer"
            );
        }

        let record = RawRecord {
            name: read(Field::Name),
            question_text: join_lines(&read(Field::QuestionText), &read(Field::QuestionTextExtra)),
            answers,
            correct_indicator,
            feedback: Default::default(),
            general_feedback: join_lines(
                &read(Field::GeneralFeedback),
                &read(Field::GeneralFeedbackExtra),
            ),
            category: read(Field::Category).trim().to_string(),
        };

        debug!(row, name = %record.name, "extracted question block");
        record
    }
}

/// Join the two cells of a split text field
fn join_lines(first: &str, second: &str) -> String {
    format!("{}{}{}", first, LINE_BREAK, second)
}

/// Parse the correct-answer cell; non-numeric or fractional values read as 0
fn parse_indicator(cell: &str) -> i64 {
    let value = match cell.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return 0,
    };
    if value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
        return 0;
    }
    value as i64
}
