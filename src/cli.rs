//! Command-line interface implementation

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::action::Position;
use crate::buffer::Buffer;
use crate::classify::classify;
use crate::complete::{complete_statement, Line};
use crate::config::load_config;
use crate::host::{apply_action, HostEditor};

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// cst - Complete the statement under the cursor
#[derive(Parser)]
#[command(name = "cst")]
#[command(about = "Complete the statement under the cursor: append terminators, open blocks, step out of braces")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the completion command on one line of a file
    Complete {
        /// Input file
        input: PathBuf,

        /// Line the cursor is on (1-based)
        #[arg(short, long)]
        line: usize,

        /// Column the cursor is at (1-based). Defaults to end of line.
        #[arg(short, long)]
        column: Option<usize>,

        /// Override the configured indentation width
        #[arg(long)]
        tab_stop: Option<usize>,

        /// Opening brace on its own line (Allman style)
        #[arg(long)]
        allman: bool,

        /// Config file to use instead of discovery
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the edit plan as JSON instead of applying it
        #[arg(long)]
        json: bool,

        /// Write the edited text back to the input file
        #[arg(long)]
        write: bool,
    },

    /// Print the line kind the classifier assigns to a piece of text
    Classify {
        /// Line text to classify (classified after trimming)
        text: String,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Complete {
            input,
            line,
            column,
            tab_stop,
            allman,
            config,
            json,
            write,
        } => run_complete(&input, line, column, tab_stop, allman, config.as_deref(), json, write),
        Commands::Classify { text } => run_classify(&text),
    }
}

/// Execute the complete command
#[allow(clippy::too_many_arguments)]
fn run_complete(
    input: &PathBuf,
    line: usize,
    column: Option<usize>,
    tab_stop: Option<usize>,
    allman: bool,
    config_path: Option<&std::path::Path>,
    json: bool,
    write: bool,
) -> ExitCode {
    let mut config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    if let Some(width) = tab_stop {
        config.editor.tab_size = width;
    }
    if allman {
        config.complete.allman = true;
    }
    if !config.is_valid() {
        for error in config.validate() {
            eprintln!("Error: {}", error);
        }
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let contents = match fs::read_to_string(input) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: Cannot open input file '{}': {}", input.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    if line == 0 {
        eprintln!("Error: --line is 1-based");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let mut buffer = Buffer::from_text(&contents);
    let line_index = line - 1;
    if line_index >= buffer.line_count() {
        eprintln!(
            "Error: line {} is out of range ({} lines)",
            line,
            buffer.line_count()
        );
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let line_len = buffer.line(line_index).map_or(0, |l| l.chars().count());
    let cursor_column = match column {
        Some(0) => {
            eprintln!("Error: --column is 1-based");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        Some(c) => (c - 1).min(line_len),
        None => line_len,
    };
    buffer.set_cursor(Position::new(line_index, cursor_column));

    let options = config.options();

    if json {
        // Print the plan without touching the buffer.
        let text = buffer.line(line_index).unwrap_or("").to_string();
        let current = Line::new(line_index, &text);
        let action = complete_statement(&current, buffer.active_cursor(), &options);
        match serde_json::to_string_pretty(&action) {
            Ok(plan) => {
                println!("{}", plan);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(EXIT_ERROR)
            }
        }
    } else {
        let text = buffer.line_text(line_index).unwrap_or_default();
        let current = Line::new(line_index, &text);
        let action = complete_statement(&current, buffer.active_cursor(), &options);
        apply_action(&mut buffer, &action);

        let cursor = buffer.cursor();
        eprintln!("cursor: line {}, column {}", cursor.line + 1, cursor.column + 1);

        if write {
            if let Err(e) = fs::write(input, buffer.to_text()) {
                eprintln!("Error: Failed to save '{}': {}", input.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            println!("Saved: {}", input.display());
        } else {
            print!("{}", buffer.to_text());
        }
        ExitCode::from(EXIT_SUCCESS)
    }
}

/// Execute the classify command
fn run_classify(text: &str) -> ExitCode {
    println!("{}", classify(text.trim()));
    ExitCode::from(EXIT_SUCCESS)
}
