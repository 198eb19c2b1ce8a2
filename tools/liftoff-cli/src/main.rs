//! Liftoff CLI — desktop-environment helpers for launcher applications.
//!
//! Usage:
//!   liftoff monitor [--follow-pointer]   Show the monitor a launcher should use
//!   liftoff monitors                     List connected monitors
//!   liftoff scale                        Print the desktop text scaling factor
//!   liftoff raise <CLASS>                Raise a running app by window class
//!   liftoff check                        Check host tools and display server

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "liftoff",
    about = "Desktop helpers for launcher applications: monitors, scaling, window raising",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the monitor a launcher window should appear on
    Monitor {
        /// Select the monitor under the mouse pointer
        #[arg(long)]
        follow_pointer: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all connected monitors
    Monitors {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the desktop text scaling factor
    Scale,

    /// Raise a running application window by its window class
    Raise {
        /// Window class to search for (e.g. "org.mozilla.firefox")
        class: String,
    },

    /// Check host tools and display server
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = liftoff_common::config::AppConfig::load();

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    liftoff_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Monitor {
            follow_pointer,
            json,
        } => commands::monitor::run(follow_pointer || config.wm.follow_pointer, json),
        Commands::Monitors { json } => commands::monitors::run(json),
        Commands::Scale => commands::scale::run(),
        Commands::Raise { class } => commands::raise::run(&config.wm.kdotool_bin, &class),
        Commands::Check => commands::check::run(),
    }
}
