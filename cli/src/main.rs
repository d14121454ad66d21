//! sheetlens CLI - worksheet extraction and forensic statistics
//!
//! A command-line tool for profiling xlsx worksheets and running
//! Benford's-Law analysis over a numeric column.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use sheetlens::analysis::DEFAULT_MIN_COUNT;
use sheetlens::{grid, render, AnalysisOptions};
use std::fs;
use std::path::PathBuf;

/// Spreadsheet extraction, descriptive statistics, and Benford analysis
#[derive(Parser)]
#[command(
    name = "sheetlens",
    version,
    about = "Profile xlsx worksheets and test numeric columns against Benford's Law",
    long_about = "sheetlens - worksheet extraction and forensic statistics.\n\n\
                  Decodes an xlsx container without a spreadsheet dependency, \
                  summarizes its columns, and compares leading digits against \
                  the Benford distribution."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile a worksheet: shape, missingness, dates, numeric stats
    Summary {
        /// Input workbook path
        input: PathBuf,

        /// Worksheet stream path inside the container (default: first)
        #[arg(long)]
        sheet: Option<String>,

        /// Output directory for report artifacts
        #[arg(short, long, default_value = "outputs")]
        output: PathBuf,
    },

    /// Run Benford's-Law analysis on a numeric column
    Benford {
        /// Input workbook path
        input: PathBuf,

        /// Column header to analyze (default: auto-selected)
        #[arg(short, long)]
        column: Option<String>,

        /// Worksheet stream path inside the container (default: first)
        #[arg(long)]
        sheet: Option<String>,

        /// Minimum numeric values for auto-selecting a column
        #[arg(long, default_value_t = DEFAULT_MIN_COUNT)]
        min_count: usize,

        /// Output directory for report artifacts
        #[arg(short, long, default_value = "outputs")]
        output: PathBuf,
    },

    /// Show workbook information
    Info {
        /// Input workbook path
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Summary {
            input,
            sheet,
            output,
        } => {
            let pb = create_spinner("Decoding worksheet...");

            let mut options = AnalysisOptions::default();
            if let Some(sheet) = sheet {
                options = options.with_sheet(sheet);
            }
            let summary = sheetlens::summarize_file(&input, &options)?;

            pb.set_message("Writing reports...");
            fs::create_dir_all(&output)?;
            fs::write(
                output.join("summary.json"),
                render::summary_to_json(&summary)?,
            )?;
            fs::write(
                output.join("numeric_summary.csv"),
                render::numeric_summary_table(&summary),
            )?;
            fs::write(output.join("summary.md"), render::summary_markdown(&summary))?;

            pb.finish_and_clear();
            println!(
                "{} Summarized {}: {} rows, {} columns",
                "✓".green().bold(),
                input.display(),
                summary.row_count,
                summary.column_count
            );
            println!("  Reports written to {}", output.display());
        }

        Commands::Benford {
            input,
            column,
            sheet,
            min_count,
            output,
        } => {
            let pb = create_spinner("Decoding worksheet...");

            let mut options = AnalysisOptions::default().with_min_count(min_count);
            if let Some(sheet) = sheet {
                options = options.with_sheet(sheet);
            }
            if let Some(column) = column {
                options = options.with_column(column);
            }
            let summary = sheetlens::benford_file(&input, &options)?;

            pb.set_message("Writing reports...");
            fs::create_dir_all(&output)?;
            fs::write(
                output.join("benford_summary.json"),
                render::benford_to_json(&summary)?,
            )?;
            fs::write(
                output.join("benford_summary.csv"),
                render::benford_table(&summary),
            )?;
            fs::write(
                output.join("benford_chart.svg"),
                render::benford_chart(&summary),
            )?;
            let artifacts: Vec<String> = [
                "benford_summary.json",
                "benford_summary.csv",
                "benford_chart.svg",
            ]
            .iter()
            .map(|name| output.join(name).display().to_string())
            .collect();
            fs::write(
                output.join("benford_summary.md"),
                render::benford_markdown(&summary, &artifacts),
            )?;

            pb.finish_and_clear();
            println!(
                "{} Analyzed column {} ({} values)",
                "✓".green().bold(),
                summary.column.bold(),
                summary.total_values
            );
            println!("  Reports written to {}", output.display());
        }

        Commands::Info { input } => {
            let pb = create_spinner("Reading container...");

            let reader = grid::SheetReader::open(&input)?;
            let worksheets = reader.worksheet_paths();
            let shared = reader.shared_strings().len();

            let sheet = reader.first_worksheet()?;
            let grid = reader.read_grid(&sheet)?;
            let projection = grid::project(&grid)?;

            pb.finish_and_clear();

            println!("{}", "Workbook Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!("{}: {}", "File".bold(), input.display());
            println!("{}: {}", "Worksheets".bold(), worksheets.len());
            for path in &worksheets {
                println!("  - {}", path);
            }
            println!("{}: {}", "Shared strings".bold(), shared);
            println!("{}: {} (first worksheet)", "Data rows".bold(), projection.row_count);
            println!("{}: {}", "Columns".bold(), projection.headers.len());
        }
    }

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
