use clap::{Parser, Subcommand};
use quizsheet::cli;
use quizsheet::error::QuizResult;
use quizsheet::export::{ExportOptions, MultiSelectEncoding};
use quizsheet::import::ImportOptions;
use quizsheet::layout::DEFAULT_MAX_ROW;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quizsheet")]
#[command(about = "Spreadsheet template ↔ multiple-choice question bank adapter")]
#[command(long_about = "Quizsheet - multiple-choice questions in a fixed spreadsheet template

TEMPLATE LAYOUT (one question per 4-row block, starting at row 2):
  A  question name          B  category
  E  question text          I  question text (continued)
  F  answers (one per row)  G  correct answer number (1-4)
  H  feedback               J  feedback (continued)

COMMANDS:
  import    - Template workbook (.xlsx) to question document (YAML/JSON)
  export    - Question document to delimited rows
  template  - Question document to template workbook (.xlsx)

EXAMPLES:
  quizsheet import questions.xlsx questions.yaml
  quizsheet export questions.yaml questions.csv
  quizsheet template questions.yaml blank.xlsx")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Import a template workbook into a question document.

Every 4-row block becomes a category marker (top/<category>) followed by a
multiple-choice question. Blocks are read until the last filled block or the
max row, whichever comes first. Missing cells are read as empty text.

The output format follows the extension: .json writes JSON, anything else YAML.")]
    /// Import template .xlsx to YAML/JSON questions
    Import {
        /// Path to template workbook (.xlsx)
        input: PathBuf,

        /// Output question document (.yaml or .json)
        output: PathBuf,

        /// Worksheet to read (default: first worksheet)
        #[arg(short, long, env = "QUIZSHEET_SHEET")]
        sheet: Option<String>,

        /// Last block start row to scan
        #[arg(long, default_value_t = DEFAULT_MAX_ROW, env = "QUIZSHEET_MAX_ROW")]
        max_row: u32,

        /// Show verbose import steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Export questions as delimited rows.

Writes one header line, then one line per four-answer multichoice question.
Other questions are skipped. Text fields are double-quoted without escaping.

The input may be a list of questions or the output of 'import'.")]
    /// Export questions to delimited rows
    Export {
        /// Question document (.yaml or .json)
        input: PathBuf,

        /// Output text file
        output: PathBuf,

        /// Pad multi-answer letters to the two answer fields
        #[arg(long)]
        padded_multi_select: bool,

        /// Show verbose export steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write questions into a template workbook (.xlsx)
    Template {
        /// Question document (.yaml or .json)
        input: PathBuf,

        /// Output workbook (.xlsx)
        output: PathBuf,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Commands::Import { verbose, .. }
            | Commands::Export { verbose, .. }
            | Commands::Template { verbose, .. } => *verbose,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "quizsheet=debug"
    } else {
        "quizsheet=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> QuizResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbose());

    match cli.command {
        Commands::Import {
            input,
            output,
            sheet,
            max_row,
            verbose,
        } => cli::import(input, output, ImportOptions { max_row, sheet }, verbose),

        Commands::Export {
            input,
            output,
            padded_multi_select,
            verbose,
        } => {
            let multi_select = if padded_multi_select {
                MultiSelectEncoding::Padded
            } else {
                MultiSelectEncoding::Legacy
            };
            cli::export(input, output, ExportOptions { multi_select }, verbose)
        }

        Commands::Template {
            input,
            output,
            verbose,
        } => cli::template(input, output, verbose),
    }
}
