//! Template import: spreadsheet grid → canonical questions
//!
//! - [`GridExtractor`] walks the fixed 4-row blocks and produces [`RawRecord`]s
//! - [`RecordNormalizer`] turns each record into a category marker plus a
//!   multiple-choice question

mod extractor;
mod normalizer;

pub use extractor::GridExtractor;
pub use normalizer::RecordNormalizer;

use crate::error::{QuizError, QuizResult};
use crate::grid::Grid;
use crate::layout::{DEFAULT_MAX_ROW, FIRST_BLOCK_ROW};
use crate::types::{ImportItem, RawRecord};

/// Import settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Last block start row to scan
    pub max_row: u32,
    /// Worksheet to read; the first one when unset
    pub sheet: Option<String>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            max_row: DEFAULT_MAX_ROW,
            sheet: None,
        }
    }
}

impl ImportOptions {
    pub fn validate(&self) -> QuizResult<()> {
        if self.max_row < FIRST_BLOCK_ROW {
            return Err(QuizError::Config(format!(
                "max row {} is before the first question row {}",
                self.max_row, FIRST_BLOCK_ROW
            )));
        }
        Ok(())
    }
}

/// Extract and normalize every block of `grid`
pub fn import_grid<G: Grid + ?Sized>(grid: &G, options: &ImportOptions) -> QuizResult<Vec<ImportItem>> {
    options.validate()?;

    let records: Vec<RawRecord> = GridExtractor::new(options.max_row).extract(grid);
    let normalizer = RecordNormalizer::new();

    let mut items = Vec::with_capacity(records.len() * 2);
    for record in &records {
        let (marker, question) = normalizer.normalize(record);
        items.push(ImportItem::Category(marker));
        items.push(ImportItem::Multichoice(question));
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MemoryGrid;

    #[test]
    fn test_options_validate() {
        assert!(ImportOptions::default().validate().is_ok());

        let options = ImportOptions {
            max_row: 1,
            sheet: None,
        };
        assert!(matches!(options.validate(), Err(QuizError::Config(_))));
    }

    #[test]
    fn test_import_grid_interleaves_markers() {
        let grid = MemoryGrid::new()
            .with(2, 'A', "Q1")
            .with(2, 'B', "Algebra")
            .with(6, 'A', "Q2")
            .with(6, 'B', "Geometry");
        let options = ImportOptions {
            max_row: 6,
            sheet: None,
        };

        let items = import_grid(&grid, &options).unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].as_category().unwrap().category, "top/algebra");
        assert_eq!(items[1].as_question().unwrap().name, "Q1");
        assert_eq!(items[2].as_category().unwrap().category, "top/geometry");
        assert_eq!(items[3].as_question().unwrap().name, "Q2");
    }
}
