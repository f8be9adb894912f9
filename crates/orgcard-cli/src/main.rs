//! orgcard CLI - Converts org/contact documents to and from vCard.

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{check, from_vcard, summary, to_vcard};
use input::Format;

/// Environment variable that overrides `--log-level`.
const LOG_ENV: &str = "ORGCARD_LOG";

#[derive(Parser)]
#[command(name = "orgcard")]
#[command(about = "Convert multilingual org documents to and from vCard")]
struct Cli {
    /// Log filter directive, e.g. `debug` or `orgcard_vcard=trace`
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a people document to vCard text
    ToVcard {
        /// Input document (or stdin if not provided)
        input: Option<String>,
        /// Write vCard text to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Input format (default: from the file extension, YAML for stdin)
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Convert vCard text to a people document
    FromVcard {
        /// Input vCard file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON instead of YAML
        #[arg(long)]
        json: bool,
        /// Skip malformed records instead of failing
        #[arg(long)]
        permissive: bool,
    },
    /// Validate a people document and run diagnostics
    Check {
        /// Input document (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code on diagnostic warnings too
        #[arg(long)]
        strict: bool,
        /// Input format (default: from the file extension, YAML for stdin)
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Print summary statistics for a people document
    Summary {
        /// Input document (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Input format (default: from the file extension, YAML for stdin)
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
}

fn init_logging(level: &str) {
    let directive = std::env::var(LOG_ENV).unwrap_or_else(|_| level.to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::ToVcard {
            input,
            output,
            format,
        } => to_vcard::run(input, output, format),
        Commands::FromVcard {
            input,
            json,
            permissive,
        } => from_vcard::run(input, json, permissive),
        Commands::Check {
            input,
            json,
            strict,
            format,
        } => check::run(input, json, strict, format),
        Commands::Summary {
            input,
            json,
            format,
        } => summary::run(input, json, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
