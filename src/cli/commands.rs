use crate::error::{QuizError, QuizResult};
use crate::export::{export_lines, exportables_from_items, ExportOptions, TemplateWriter};
use crate::grid::open_sheet;
use crate::import::{import_grid, ImportOptions};
use crate::types::{ExportableQuestion, ImportItem};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Document format chosen from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Read questions for export
///
/// Accepts either a list of exportable questions or the output of `import`
/// (category markers interleaved with questions).
pub fn load_questions(path: &Path) -> QuizResult<Vec<ExportableQuestion>> {
    let content = fs::read_to_string(path)?;

    match DocumentFormat::for_path(path) {
        DocumentFormat::Json => match serde_json::from_str::<Vec<ExportableQuestion>>(&content) {
            Ok(questions) => Ok(questions),
            Err(e) => serde_json::from_str::<Vec<ImportItem>>(&content)
                .map(|items| exportables_from_items(&items))
                .map_err(|_| QuizError::Json(e)),
        },
        DocumentFormat::Yaml => match serde_yaml::from_str::<Vec<ExportableQuestion>>(&content) {
            Ok(questions) => Ok(questions),
            Err(e) => serde_yaml::from_str::<Vec<ImportItem>>(&content)
                .map(|items| exportables_from_items(&items))
                .map_err(|_| QuizError::Yaml(e)),
        },
    }
}

/// Execute the import command
pub fn import(
    input: PathBuf,
    output: PathBuf,
    options: ImportOptions,
    verbose: bool,
) -> QuizResult<()> {
    println!("{}", "📥 Quizsheet - Template Import".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    options.validate()?;

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }

    let grid = open_sheet(&input, options.sheet.as_deref())?;
    if verbose {
        println!("   Sheet: {}", grid.name().bright_blue());
        println!("   Scanning blocks up to row {}\n", options.max_row);
    }

    let items = import_grid(&grid, &options)?;
    let questions: Vec<_> = items.iter().filter_map(ImportItem::as_question).collect();
    let unanswered = questions
        .iter()
        .filter(|q| q.correct_index().is_none())
        .count();

    info!(questions = questions.len(), unanswered, "import finished");
    if unanswered > 0 {
        warn!(unanswered, "questions without a correct answer");
    }

    if verbose {
        for question in &questions {
            println!("   ❓ {}", question.name.bright_blue());
        }
        println!();
    }

    let document = match DocumentFormat::for_path(&output) {
        DocumentFormat::Json => serde_json::to_string_pretty(&items)?,
        DocumentFormat::Yaml => serde_yaml::to_string(&items)?,
    };
    fs::write(&output, document)?;

    println!("{}", "✅ Import Complete!".bold().green());
    println!("   Questions: {}", questions.len());
    if unanswered > 0 {
        println!(
            "   {}",
            format!("⚠️  {} without a correct answer", unanswered).yellow()
        );
    }
    println!("   Written: {}\n", output.display());

    Ok(())
}

/// Execute the export command
pub fn export(
    input: PathBuf,
    output: PathBuf,
    options: ExportOptions,
    verbose: bool,
) -> QuizResult<()> {
    println!("{}", "📤 Quizsheet - Question Export".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if verbose {
        println!("{}", "📖 Reading questions...".cyan());
    }

    let questions = load_questions(&input)?;
    let lines = export_lines(&questions, options);
    // Header line is not a question row
    let rows = lines.len().saturating_sub(1);
    let skipped = questions.len() - rows;

    info!(rows, skipped, "export finished");
    if verbose {
        println!("   Found {} questions\n", questions.len());
    }

    let mut text = lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    fs::write(&output, text)?;

    println!("{}", "✅ Export Complete!".bold().green());
    println!("   Rows: {}", rows);
    if skipped > 0 {
        println!(
            "   {}",
            format!("⚠️  {} skipped (not four-answer multichoice)", skipped).yellow()
        );
    }
    println!("   Written: {}\n", output.display());

    Ok(())
}

/// Execute the template command
pub fn template(input: PathBuf, output: PathBuf, verbose: bool) -> QuizResult<()> {
    println!("{}", "📄 Quizsheet - Template Export".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    let questions = load_questions(&input)?;
    if verbose {
        println!("   Found {} questions\n", questions.len());
    }

    let total = questions.len();
    let written = TemplateWriter::new(questions).write(&output)?;
    info!(written, skipped = total - written, "template written");

    println!("{}", "✅ Template Complete!".bold().green());
    println!("   Blocks: {}", written);
    println!("   Workbook: {}\n", output.display());

    Ok(())
}
