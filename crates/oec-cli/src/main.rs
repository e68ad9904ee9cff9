//! OEC CLI - Command-line interface for farm record validation.

use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod logging;
mod output;

use commands::{list, normalize, province, validate};
use logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(name = "oec")]
#[command(about = "Farm record validation and normalization CLI")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate farm records from a JSON file
    Validate {
        /// JSON file holding one record or an array of records
        input: String,
        /// Reference data file with countries and provinces
        #[arg(long, env = "OEC_REFERENCE")]
        reference: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if any record is rejected
        #[arg(long)]
        strict: bool,
        /// Evaluate date rules as of this time (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Run one field normalizer on a value
    Normalize {
        /// Normalizer to run
        #[arg(value_enum)]
        kind: normalize::Kind,
        /// Value to normalize (or stdin if not provided)
        value: Option<String>,
    },
    /// Check a province code against the reference data
    Province {
        /// Province or state code as entered
        code: String,
        /// Reference data file with countries and provinces
        #[arg(long, env = "OEC_REFERENCE")]
        reference: String,
    },
    /// List provinces in the reference data
    List {
        /// Reference data file with countries and provinces
        #[arg(long, env = "OEC_REFERENCE")]
        reference: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = LogConfig::from_verbosity(cli.verbose).with_format(cli.log_format);
    if let Err(e) = logging::init_logging(&config) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Validate {
            input,
            reference,
            json,
            strict,
            as_of,
        } => validate::run(input, reference, json, strict, as_of),
        Commands::Normalize { kind, value } => normalize::run(kind, value),
        Commands::Province { code, reference } => province::run(code, reference),
        Commands::List { reference, json } => list::run(reference, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
