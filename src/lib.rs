//! Quizsheet - multiple-choice questions in a fixed spreadsheet template
//!
//! This library converts between a rigid spreadsheet layout (one question
//! per 4-row block) and a structured multiple-choice question model, and
//! serializes question objects as delimited text rows.
//!
//! # Features
//!
//! - Fixed-offset block extraction from any [`grid::Grid`] (.xlsx via calamine)
//! - Normalization to category markers + questions with HTML entity decoding
//! - Delimited export with the single/multi answer letter encoding
//! - Writing questions back into a template workbook
//!
//! # Example
//!
//! ```no_run
//! use quizsheet::grid::open_sheet;
//! use quizsheet::import::{import_grid, ImportOptions};
//!
//! let grid = open_sheet("questions.xlsx", None)?;
//! let items = import_grid(&grid, &ImportOptions::default())?;
//!
//! println!("Imported {} entries", items.len());
//! # Ok::<(), quizsheet::error::QuizError>(())
//! ```

pub mod cli;
pub mod error;
pub mod export;
pub mod grid;
pub mod html;
pub mod import;
pub mod layout;
pub mod types;

// Re-export commonly used types
pub use error::{QuizError, QuizResult};
pub use types::{CanonicalQuestion, CategoryMarker, ExportableQuestion, ImportItem, RawRecord};
