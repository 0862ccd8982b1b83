//! Chronolink CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "chronolink")]
#[command(about = "Temporal social graph queries over link event logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to the network description file (JSON)
    #[arg(short, long, default_value = "network.json")]
    network: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List everyone reachable from a user on a given date
    Neighborhood {
        /// Root user id
        #[arg(long)]
        user: String,

        /// Date of the snapshot (YYYY-MM-DD)
        #[arg(long)]
        date: chronolink_core::Day,

        /// Maximum hop distance (unbounded when omitted)
        #[arg(long)]
        distance: Option<i32>,
    },
    /// Show the dates at which a user's reachable set changes size
    Trend {
        /// User whose neighborhood to track
        #[arg(long)]
        user: String,
    },
    /// Check whether the link between two users was active on a date
    Active {
        #[arg(long)]
        a: String,

        #[arg(long)]
        b: String,

        /// Date to inspect (YYYY-MM-DD)
        #[arg(long)]
        date: chronolink_core::Day,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "chronolink={0},chronolink_core={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Chronolink v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Neighborhood { user, date, distance } => {
            commands::neighborhood(&cli.network, &user, date, distance)
        }
        Commands::Trend { user } => commands::trend(&cli.network, &user),
        Commands::Active { a, b, date } => commands::active(&cli.network, &a, &b, date),
    }
}
