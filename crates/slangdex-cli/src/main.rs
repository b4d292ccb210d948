use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::process;

use slangdex_core::cleaner::run_clean;
use slangdex_core::config::{CleanConfig, DEFAULT_INPUT, DEFAULT_OUT_DIR};
use slangdex_core::validator::{validate_file, Severity, ValidationReport};

/// slangdex — slang dictionary cleaner and validator
///
/// Clean and de-duplicate a dictionary dataset, or validate it.
#[derive(Parser)]
#[command(name = "slangdex", version, about, long_about = None)]
struct Cli {
    /// Suppress success output on stdout
    #[arg(short, long, global = true)]
    quiet: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize, de-duplicate and sort a dataset into the output directory
    Clean {
        /// Dataset to clean
        #[arg(long, env = "SLANGDEX_INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,
        /// Directory the cleaned dataset is written to
        #[arg(long, env = "SLANGDEX_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,
    },

    /// Check a dataset and report every violation
    Validate {
        /// Dataset to validate
        #[arg(env = "SLANGDEX_INPUT", default_value = DEFAULT_INPUT)]
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let exit_code = match cli.command {
        Commands::Clean { input, out_dir } => cmd_clean(CleanConfig::new(input, out_dir), cli.quiet),
        Commands::Validate { file, json } => cmd_validate(&file, json, cli.quiet),
        Commands::Version => {
            println!(
                "slangdex {} (slangdex-core {})",
                env!("CARGO_PKG_VERSION"),
                slangdex_core::VERSION
            );
            0
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("SLANGDEX_LOG")
        .format_timestamp(None)
        .format_target(false)
        .init();
}

// ── Clean ─────────────────────────────────────────────────

fn cmd_clean(config: CleanConfig, quiet: bool) -> i32 {
    log::debug!("clean: {:?}", config);

    let summary = match run_clean(&config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            return 1;
        }
    };

    if !quiet {
        println!(
            "{} Cleaned {} → {} entries ({} dropped) → {}",
            "✓".green(),
            summary.input_count,
            summary.kept,
            summary.dropped,
            summary.output.display()
        );
        if summary.mapping_copied.is_some() {
            println!(
                "{} Copied {} → {}/",
                "✓".green(),
                config.mapping_file_name,
                config.out_dir.display()
            );
        }
    }
    0
}

// ── Validate ──────────────────────────────────────────────

fn cmd_validate(file: &Path, json: bool, quiet: bool) -> i32 {
    let report = match validate_file(file) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            return 1;
        }
    };

    if json {
        return print_json_report(file, &report);
    }

    for diagnostic in &report.diagnostics {
        match diagnostic.severity {
            Severity::Error => eprintln!("{} {}", "✗".red(), diagnostic),
            Severity::Warning => eprintln!("{} {}", "!".yellow(), diagnostic),
        }
    }

    if report.is_valid() {
        if !quiet {
            println!(
                "{} {} is valid. Entries: {}",
                "✓".green(),
                file.display(),
                report.entries
            );
        }
        0
    } else {
        eprintln!(
            "\n{} Validation failed with {} error(s).",
            "✗".red(),
            report.error_count()
        );
        1
    }
}

fn print_json_report(file: &Path, report: &ValidationReport) -> i32 {
    let output = serde_json::json!({
        "file": file.display().to_string(),
        "valid": report.is_valid(),
        "entries": report.entries,
        "errors": report.error_count(),
        "warnings": report.warnings().len(),
        "diagnostics": report.diagnostics,
    });

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("{} cannot render report: {}", "✗".red(), e);
            return 1;
        }
    }

    if report.is_valid() {
        0
    } else {
        1
    }
}
