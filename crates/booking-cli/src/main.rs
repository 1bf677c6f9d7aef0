//! # booking-cli
//!
//! Command line front end for the reservation transcoding engine.
//!
//! Reads JSON records, routes them through the standard transcoder registry
//! and writes the converted record as JSON.

mod config;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use booking_mapping::{SchemaTag, Transcoder, TranscoderRegistry};
use booking_model::{Record, internal};
use chrono::{Duration, Utc};
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "booking")]
#[command(about = "Reservation transcoding CLI")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Convert a JSON record from one schema to another
    Transcode {
        /// Input JSON file
        input: PathBuf,

        /// Output file (stdout when omitted)
        output: Option<PathBuf>,

        /// Source schema tag (e.g. Model.Reservation)
        #[arg(long)]
        from: String,

        /// Target schema tag (e.g. Google.Reservation)
        #[arg(long)]
        to: String,
    },

    /// Write a sample internal reservation as JSON
    Sample {
        /// Output file (stdout when omitted)
        output: Option<PathBuf>,
    },

    /// List the registered schema tag pairs
    Pairs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load_or_default(cli.config.as_deref())?;
    init_tracing(&config, cli.verbose);

    let registry = TranscoderRegistry::standard();

    match cli.command {
        Commands::Transcode {
            input,
            output,
            from,
            to,
        } => {
            tracing::info!("Transcoding {} ({} -> {})", input.display(), from, to);
            let record = transcode(&registry, &input, &from, &to)?;
            write_output(output.as_deref(), &to_json(&record, config.pretty)?)
        }
        Commands::Sample { output } => {
            let record = Record::from(sample_reservation());
            write_output(output.as_deref(), &to_json(&record, config.pretty)?)
        }
        Commands::Pairs => {
            let pairs: Vec<String> = registry
                .iter()
                .map(|transcoder| {
                    let tags = transcoder.tag_pair();
                    format!("{}\t{}", tags.source, tags.target)
                })
                .collect();
            write_output(None, &pairs.join("\n"))
        }
    }
}

fn init_tracing(config: &CliConfig, verbose: u8) {
    let default_filter = match verbose {
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn transcode(
    registry: &TranscoderRegistry,
    input: &Path,
    source_tag: &str,
    target_tag: &str,
) -> anyhow::Result<Record> {
    // The resolved transcoder decides which record type the input must hold.
    let kind = registry
        .resolve(source_tag, target_tag)
        .map(|transcoder| transcoder.source_kind())
        .ok_or_else(|| booking_mapping::Error::mapping_not_found(source_tag, target_tag))?;

    let text = std::fs::read_to_string(input)
        .with_context(|| format!("cannot read input file {}", input.display()))?;
    let record = Record::from_json(kind, &text)
        .with_context(|| format!("cannot decode {}", input.display()))?;

    let result = registry
        .map(Some(&record), source_tag, target_tag)
        .with_context(|| format!("cannot transcode {}", input.display()))?;
    tracing::debug!(kind = %result.kind(), "Transcoded record");
    Ok(result)
}

fn to_json(record: &Record, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    };
    json.context("cannot encode record as JSON")
}

fn write_output(output: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("cannot write output file {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").context("cannot write to stdout")?;
        }
    }
    Ok(())
}

fn sample_reservation() -> internal::Reservation {
    let today = Utc::now().date_naive();
    let mut reservation = internal::Reservation::new(Uuid::new_v4(), Utc::now());
    reservation.check_in_date = Some(today + Duration::days(7));
    reservation.check_out_date = Some(today + Duration::days(10));
    reservation.total_amount = Decimal::new(45000, 2);
    reservation.status = Some("CONFIRMED".to_string());
    reservation.booking_channel = Some("Website".to_string());
    reservation.guest = Some(internal::Guest {
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        email: Some("john.doe@example.com".to_string()),
        phone: Some("+1-555-123-4567".to_string()),
        address: Some("123 Main St".to_string()),
        city: Some("Berlin".to_string()),
        country: Some("DE".to_string()),
    });
    reservation.rooms.push(internal::RoomLine {
        room_type_id: Some("DBL".to_string()),
        room_type_name: Some("Double Room".to_string()),
        quantity: 1,
        adults: 2,
        children: 0,
        rate_per_night: Decimal::new(15000, 2),
    });
    tracing::debug!(
        id = %reservation.id,
        tag = %SchemaTag::INTERNAL_RESERVATION,
        "Built sample reservation"
    );
    reservation
}
