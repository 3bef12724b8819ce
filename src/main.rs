use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{CommandFactory, Parser, Subcommand};
use cred_expiry_tools::commands::{self, OutputFormat};
use cred_expiry_tools::config::{
    ReportConfig, DEFAULT_DATA_FILE, DEFAULT_DETAILED_OUTPUT, DEFAULT_EXPIRING_OUTPUT,
    DEFAULT_FILTERED_OUTPUT, DEFAULT_SUMMARY_OUTPUT, DEFAULT_THRESHOLD_DAYS,
};
use cred_expiry_tools::utils::time::parse_reference_time;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cred-expiry")]
#[command(about = "Application secret and certificate expiry reports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify all credentials and write the summary, detailed, filtered and expiring reports
    Report {
        /// Inventory JSON file (.json, .json.gz or .json.zst)
        #[arg(default_value = DEFAULT_DATA_FILE)]
        data_file: PathBuf,

        /// Days before expiry at which a credential counts as expiring soon
        #[arg(long, default_value_t = DEFAULT_THRESHOLD_DAYS, value_parser = clap::value_parser!(i64).range(0..))]
        threshold_days: i64,

        /// Summary table output file
        #[arg(long, default_value = DEFAULT_SUMMARY_OUTPUT)]
        summary_output: PathBuf,

        /// Detailed JSON output file
        #[arg(long, default_value = DEFAULT_DETAILED_OUTPUT)]
        detailed_output: PathBuf,

        /// Filtered JSON output file (exactly one active and one expiring credential)
        #[arg(long, default_value = DEFAULT_FILTERED_OUTPUT)]
        filtered_output: PathBuf,

        /// Expiring-soon table output file
        #[arg(long, default_value = DEFAULT_EXPIRING_OUTPUT)]
        expiring_output: PathBuf,

        /// Also export the expiring-soon rows to this CSV file
        #[arg(long)]
        expiring_csv: Option<PathBuf>,

        /// Reference date instead of the current time (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
        #[arg(long, value_parser = reference_date)]
        reference_date: Option<NaiveDateTime>,
    },

    /// Print the summary table without writing files
    Summary {
        /// Inventory JSON file (.json, .json.gz or .json.zst)
        #[arg(default_value = DEFAULT_DATA_FILE)]
        data_file: PathBuf,

        /// Days before expiry at which a credential counts as expiring soon
        #[arg(long, default_value_t = DEFAULT_THRESHOLD_DAYS, value_parser = clap::value_parser!(i64).range(0..))]
        threshold_days: i64,

        /// Reference date instead of the current time (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
        #[arg(long, value_parser = reference_date)]
        reference_date: Option<NaiveDateTime>,
    },

    /// Print credentials expiring within the threshold without writing files
    Expiring {
        /// Inventory JSON file (.json, .json.gz or .json.zst)
        #[arg(default_value = DEFAULT_DATA_FILE)]
        data_file: PathBuf,

        /// Days before expiry at which a credential counts as expiring soon
        #[arg(long, default_value_t = DEFAULT_THRESHOLD_DAYS, value_parser = clap::value_parser!(i64).range(0..))]
        threshold_days: i64,

        /// Reference date instead of the current time (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
        #[arg(long, value_parser = reference_date)]
        reference_date: Option<NaiveDateTime>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn reference_date(value: &str) -> Result<NaiveDateTime, String> {
    parse_reference_time(value).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            data_file,
            threshold_days,
            summary_output,
            detailed_output,
            filtered_output,
            expiring_output,
            expiring_csv,
            reference_date,
        } => commands::report::run(&ReportConfig {
            data_file,
            threshold_days,
            summary_output,
            detailed_output,
            filtered_output,
            expiring_output,
            expiring_csv,
            reference_time: reference_date,
        }),
        Commands::Summary {
            data_file,
            threshold_days,
            reference_date,
        } => commands::summary::run(&data_file, threshold_days, reference_date),
        Commands::Expiring {
            data_file,
            threshold_days,
            reference_date,
            format,
        } => commands::expiring::run(&data_file, threshold_days, reference_date, format),
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "cred-expiry", &mut std::io::stdout());
            Ok(())
        }
    }
}
