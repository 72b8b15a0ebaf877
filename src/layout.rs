//! Fixed spreadsheet template layout
//!
//! Every question occupies a block of four rows. Blocks start at row 2
//! (row 1 holds the template headers) and repeat every four rows. Each
//! field of a question lives at a fixed row offset inside the block and a
//! fixed column:
//!
//! | Field               | Row offset | Column |
//! |---------------------|------------|--------|
//! | name                | 0          | A      |
//! | category            | 0          | B      |
//! | question text       | 0          | E + I  |
//! | answers 1-4         | 0..=3      | F      |
//! | correct indicator   | 0          | G      |
//! | general feedback    | 0          | H + J  |

/// First row of the first block (1-based)
pub const FIRST_BLOCK_ROW: u32 = 2;

/// Rows per question block
pub const BLOCK_ROWS: u32 = 4;

/// Last block start row scanned by default
pub const DEFAULT_MAX_ROW: u32 = 1454;

/// Line break inserted between the two cells of a joined text field
pub const LINE_BREAK: &str = "<br/>";

/// Position of a cell relative to the first row of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBinding {
    pub row_offset: u32,
    pub column: char,
}

impl CellBinding {
    const fn at(row_offset: u32, column: char) -> Self {
        Self { row_offset, column }
    }

    /// Absolute 1-based row of this binding inside the block starting at `block_row`
    pub fn row(&self, block_row: u32) -> u32 {
        block_row + self.row_offset
    }
}

/// Question fields stored in the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    QuestionText,
    QuestionTextExtra,
    Answer(usize),
    CorrectIndicator,
    GeneralFeedback,
    GeneralFeedbackExtra,
}

/// Every templated field, in column order of the first block row
pub const FIELDS: [Field; 11] = [
    Field::Name,
    Field::Category,
    Field::QuestionText,
    Field::Answer(0),
    Field::Answer(1),
    Field::Answer(2),
    Field::Answer(3),
    Field::CorrectIndicator,
    Field::GeneralFeedback,
    Field::QuestionTextExtra,
    Field::GeneralFeedbackExtra,
];

/// Header cells written to row 1 of a blank template
pub const TEMPLATE_HEADERS: [(char, &str); 8] = [
    ('A', "Name"),
    ('B', "Category"),
    ('E', "Question"),
    ('F', "Answers"),
    ('G', "Correct"),
    ('H', "Feedback"),
    ('I', "Question (continued)"),
    ('J', "Feedback (continued)"),
];

/// Cell binding of a field
pub fn binding(field: Field) -> CellBinding {
    match field {
        Field::Name => CellBinding::at(0, 'A'),
        Field::Category => CellBinding::at(0, 'B'),
        Field::QuestionText => CellBinding::at(0, 'E'),
        Field::QuestionTextExtra => CellBinding::at(0, 'I'),
        Field::Answer(index) => CellBinding::at(index as u32, 'F'),
        Field::CorrectIndicator => CellBinding::at(0, 'G'),
        Field::GeneralFeedback => CellBinding::at(0, 'H'),
        Field::GeneralFeedbackExtra => CellBinding::at(0, 'J'),
    }
}

/// Start rows of every block up to and including `max_row`
pub fn block_rows(max_row: u32) -> impl Iterator<Item = u32> {
    (FIRST_BLOCK_ROW..=max_row).step_by(BLOCK_ROWS as usize)
}

/// Convert a column letter to a zero-based column index (A→0, B→1, ...)
pub fn column_index(column: char) -> u16 {
    (column.to_ascii_uppercase() as u8).saturating_sub(b'A') as u16
}
