//! Daily CLI binary entry point.

use clap::{Parser, Subcommand};
use daily_cli::commands::{self, OutputFormat};
use daily_cli::config::{build_config, CliArgs as ConfigCliArgs};
use daily_cli::Result;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Daily puzzle numbers, seeds and seeded streams
#[derive(Parser)]
#[command(name = "daily")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Epoch override (YYYY-MM-DD)
    #[arg(long, global = true)]
    epoch: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print today's puzzle number
    Day {
        /// Use this date instead of today (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Print today's seed
    Seed {
        /// Use this date instead of today (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Seed encoding (unpadded, zero-padded)
        #[arg(short, long)]
        encoding: Option<String>,
    },

    /// Print date, day number and seed
    Today {
        /// Use this date instead of today (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the first values of a seeded stream
    Sample {
        /// Explicit seed (defaults to the daily seed)
        #[arg(short, long, allow_negative_numbers = true, conflicts_with = "date")]
        seed: Option<i64>,

        /// Derive the seed from this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Number of values to print
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the calendar date of puzzle day N
    DateOf {
        /// Day number (day 1 is the epoch)
        #[arg(allow_negative_numbers = true)]
        day: i64,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let seed_encoding = match &cli.command {
        Commands::Seed { encoding, .. } => encoding.clone(),
        _ => None,
    };
    let config = build_config(&ConfigCliArgs {
        config_file: cli.config.clone(),
        epoch: cli.epoch.clone(),
        seed_encoding,
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
    })?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        version = daily_cli::VERSION,
        epoch = %config.epoch,
        seed_encoding = %config.seed_encoding,
        log_level = %config.log_level,
        "configuration loaded"
    );

    let calendar = config.calendar();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Day { date } => {
            let clock = commands::clock_for(date.as_deref())?;
            commands::day::run(&mut out, &calendar, clock.as_ref())
        }
        Commands::Seed { date, .. } => {
            let clock = commands::clock_for(date.as_deref())?;
            commands::seed::run(&mut out, &calendar, clock.as_ref())
        }
        Commands::Today { date, format } => {
            let clock = commands::clock_for(date.as_deref())?;
            commands::today::run(&mut out, &calendar, clock.as_ref(), format)
        }
        Commands::Sample {
            seed,
            date,
            count,
            format,
        } => {
            let clock = commands::clock_for(date.as_deref())?;
            let seed = commands::sample::resolve_seed(seed, &calendar, clock.as_ref());
            commands::sample::run(&mut out, seed, count, format)
        }
        Commands::DateOf { day } => commands::date_of::run(&mut out, &calendar, day),
    }
}
