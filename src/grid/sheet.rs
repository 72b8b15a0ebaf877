//! Worksheet-backed grid (calamine)

use super::Grid;
use crate::error::{QuizError, QuizResult};
use crate::layout::column_index;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;
use tracing::debug;

/// Grid over one worksheet of an .xlsx workbook
pub struct SheetGrid {
    name: String,
    range: Range<Data>,
}

impl SheetGrid {
    pub fn new(name: impl Into<String>, range: Range<Data>) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }

    /// Worksheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render a cell value as template text
    fn cell_text(cell: &Data) -> String {
        match cell {
            Data::Empty | Data::Error(_) => String::new(),
            Data::String(s) => s.clone(),
            Data::Bool(true) => "1".to_string(),
            Data::Bool(false) => "0".to_string(),
            other => other.to_string(),
        }
    }
}

impl Grid for SheetGrid {
    fn cell(&self, row: u32, column: char) -> String {
        if row == 0 {
            return String::new();
        }
        // calamine positions are absolute and 0-based
        let position = (row - 1, column_index(column) as u32);
        self.range
            .get_value(position)
            .map(Self::cell_text)
            .unwrap_or_default()
    }
}

/// Open `path` and select the worksheet named `sheet`, or the first worksheet
pub fn open_sheet<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> QuizResult<SheetGrid> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        QuizError::Workbook(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    let name = match sheet {
        Some(wanted) => sheet_names
            .iter()
            .find(|n| n.as_str() == wanted)
            .cloned()
            .ok_or_else(|| QuizError::SheetNotFound(wanted.to_string()))?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| QuizError::SheetNotFound("workbook has no worksheets".to_string()))?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| QuizError::Workbook(format!("Failed to read sheet '{}': {}", name, e)))?;

    if let Some((start_row, start_col)) = range.start() {
        debug!(sheet = %name, start_row, start_col, "loaded worksheet");
    }

    Ok(SheetGrid::new(name, range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("fixture.xlsx");
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Questions").unwrap();
        worksheet.write_string(1, 0, "Q1").unwrap();
        worksheet.write_number(1, 6, 4.0).unwrap();
        worksheet.write_number(2, 5, 2.5).unwrap();
        workbook.add_worksheet().set_name("Other").unwrap();
        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_open_first_sheet() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir);

        let grid = open_sheet(&path, None).unwrap();
        assert_eq!(grid.name(), "Questions");
        assert_eq!(grid.cell(2, 'A'), "Q1");
        assert_eq!(grid.cell(2, 'G'), "4");
        assert_eq!(grid.cell(3, 'F'), "2.5");
    }

    #[test]
    fn test_missing_cells_are_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir);

        let grid = open_sheet(&path, None).unwrap();
        assert_eq!(grid.cell(0, 'A'), "");
        assert_eq!(grid.cell(1, 'A'), "");
        assert_eq!(grid.cell(2, 'B'), "");
        assert_eq!(grid.cell(5000, 'F'), "");
    }

    #[test]
    fn test_open_named_sheet() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir);

        let grid = open_sheet(&path, Some("Other")).unwrap();
        assert_eq!(grid.name(), "Other");
        assert_eq!(grid.cell(2, 'A'), "");

        let missing = open_sheet(&path, Some("Nope"));
        assert!(matches!(missing, Err(QuizError::SheetNotFound(_))));
    }

    #[test]
    fn test_boolean_indicator_reads_as_number() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bool.xlsx");
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(1, 0, "Q1").unwrap();
        worksheet.write_boolean(1, 6, true).unwrap();
        worksheet.write_boolean(5, 6, false).unwrap();
        worksheet.write_string(5, 0, "Q2").unwrap();
        workbook.save(&path).unwrap();

        let grid = open_sheet(&path, None).unwrap();
        assert_eq!(grid.cell(2, 'G'), "1");
        assert_eq!(grid.cell(6, 'G'), "0");

        let items = crate::import::import_grid(&grid, &Default::default()).unwrap();
        let questions: Vec<_> = items.iter().filter_map(|i| i.as_question()).collect();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].fractions, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(questions[1].fractions, [0.0; 4]);
    }

    #[test]
    fn test_open_nonexistent_workbook() {
        let result = open_sheet("does-not-exist.xlsx", None);
        assert!(matches!(result, Err(QuizError::Workbook(_))));
    }
}
