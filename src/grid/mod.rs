//! Read-only cell grids
//!
//! The importer only needs one capability from a spreadsheet: look up a cell
//! by 1-based row and column letter and get its value as text. Missing and
//! out-of-range cells read as the empty string.

mod sheet;

pub use sheet::{open_sheet, SheetGrid};

use std::collections::HashMap;

/// Cell lookup by 1-based row and column letter
pub trait Grid {
    /// Value of the cell, or an empty string when the cell is missing
    fn cell(&self, row: u32, column: char) -> String;
}

/// In-memory grid, mostly useful for building fixtures
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    cells: HashMap<(u32, char), String>,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell value
    pub fn set(&mut self, row: u32, column: char, value: impl Into<String>) {
        self.cells
            .insert((row, column.to_ascii_uppercase()), value.into());
    }

    /// Builder-style variant of [`MemoryGrid::set`]
    pub fn with(mut self, row: u32, column: char, value: impl Into<String>) -> Self {
        self.set(row, column, value);
        self
    }

    /// Number of populated cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Grid for MemoryGrid {
    fn cell(&self, row: u32, column: char) -> String {
        self.cells
            .get(&(row, column.to_ascii_uppercase()))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_grid_lookup() {
        let grid = MemoryGrid::new().with(2, 'A', "Q1").with(3, 'f', "10");

        assert_eq!(grid.cell(2, 'A'), "Q1");
        assert_eq!(grid.cell(3, 'F'), "10");
        assert_eq!(grid.cell(3, 'f'), "10");
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_memory_grid_missing_cell_is_empty() {
        let grid = MemoryGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.cell(1, 'A'), "");
        assert_eq!(grid.cell(u32::MAX, 'Z'), "");
    }
}
