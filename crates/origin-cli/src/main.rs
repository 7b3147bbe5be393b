use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

use origin_core::{aggregate, io, Report, Severity, SourceDescriptor};

/// Platforms advertised by the source descriptor. Website tables are
/// consumed separately and are not advertised.
const DESCRIPTOR_PLATFORMS: [&str; 5] = ["Instagram", "Facebook", "X", "LinkedIn", "YouTube"];

/// origin - candidate contact origin dataset converter
///
/// Convert a candidate contact export into an origin data source:
/// canonical per-platform handles mapped to candidate indices, with an
/// embedded source descriptor.
#[derive(Parser)]
#[command(name = "origin", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a contact export and logo into an origin dataset
    Convert {
        /// Path to the records JSON file
        records: PathBuf,
        /// Path to the source logo image (embedded as a data URL)
        logo: PathBuf,
        /// Output path
        #[arg(short, long, default_value = "origin.json")]
        output: PathBuf,
        /// Source name embedded in the descriptor
        #[arg(long, default_value = "Ballotpedia")]
        source_name: String,
        /// Source website embedded in the descriptor
        #[arg(long, default_value = "https://www.ballotpedia.org")]
        source_website: String,
        /// Suppress the summary printed after conversion
        #[arg(long)]
        quiet: bool,
    },

    /// Check an export without writing anything
    Check {
        /// Path to the records JSON file
        records: PathBuf,
        /// Output diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Convert {
            records,
            logo,
            output,
            source_name,
            source_website,
            quiet,
        } => run_convert(&records, &logo, &output, source_name, source_website, quiet),
        Commands::Check { records, json } => run_check(&records, json),
    };

    process::exit(exit_code);
}

fn run_convert(
    records_path: &Path,
    logo_path: &Path,
    output: &Path,
    source_name: String,
    source_website: String,
    quiet: bool,
) -> i32 {
    let records = match io::read_records(records_path) {
        Ok(records) => records,
        Err(err) => return fatal(&err),
    };
    let logo = match io::logo_data_url(logo_path) {
        Ok(logo) => logo,
        Err(err) => return fatal(&err),
    };

    let source = SourceDescriptor {
        name: source_name,
        logo,
        website: source_website,
        supported_platforms: DESCRIPTOR_PLATFORMS.iter().map(|p| p.to_string()).collect(),
    };

    let mut report = Report::new();
    let dataset = aggregate(&records, source, &mut report);
    print_diagnostics(&report);

    if let Err(err) = io::write_dataset(output, &dataset) {
        return fatal(&err);
    }

    if !quiet {
        println!("{} records, {} candidates", records.len(), dataset.entry.len());
        for (platform, count) in dataset.table_sizes() {
            println!("{platform} entries: {count}");
        }
        println!("dataset written to {}", output.display());
    }
    0
}

fn run_check(records_path: &Path, json: bool) -> i32 {
    let records = match io::read_records(records_path) {
        Ok(records) => records,
        Err(err) => return fatal(&err),
    };

    // Placeholder descriptor: check only exercises routing and
    // canonicalization, nothing from the descriptor is inspected.
    let source = SourceDescriptor {
        name: String::new(),
        logo: String::new(),
        website: String::new(),
        supported_platforms: vec![],
    };

    let mut report = Report::new();
    let dataset = aggregate(&records, source, &mut report);

    if json {
        match serde_json::to_string_pretty(&report.diagnostics) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("{} failed to render diagnostics: {err}", "error:".red().bold());
                return 2;
            }
        }
    } else {
        print_diagnostics(&report);
        println!(
            "{} records, {} candidates, {} diagnostics",
            records.len(),
            dataset.entry.len(),
            report.diagnostics.len()
        );
    }

    if report.is_valid() {
        0
    } else {
        1
    }
}

fn print_diagnostics(report: &Report) {
    for diagnostic in &report.diagnostics {
        let tag = match diagnostic.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        eprintln!(
            "{tag} [{}] {}/{}: {}",
            diagnostic.kind, diagnostic.candidate, diagnostic.platform, diagnostic.message
        );
    }
}

fn fatal(err: &origin_core::Error) -> i32 {
    eprintln!("{} {err}", "error:".red().bold());
    2
}
