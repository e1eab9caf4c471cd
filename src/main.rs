use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{error, info};
use snapvault::configuration::config::AppConfig;
use snapvault::controller::controller_handler::CaptureController;
use snapvault::error_handling::types::ControllerError;
use snapvault::sequencing::report::TickStatus;

#[derive(Parser)]
#[command(name = "snapvault")]
#[command(version = "0.1.0")]
#[command(about = "Timed photo bursts into an insert-only secret store")]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long, env = "SNAPVAULT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one capture burst and print a per-tick report.
    Run {
        /// Print the burst report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Export the stored photo.
    Fetch {
        /// File to write the photo payload to. Defaults to
        /// snapvault_photo.<ext> named after the stored codec.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Remove the stored photo so the next burst can save again.
    Clear,
    /// Probe camera access, the camera itself, and the store.
    Doctor,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    println!(
        "
███████╗███╗   ██╗ █████╗ ██████╗ ██╗   ██╗ █████╗ ██╗   ██╗██╗  ████████╗
██╔════╝████╗  ██║██╔══██╗██╔══██╗██║   ██║██╔══██╗██║   ██║██║  ╚══██╔══╝
███████╗██╔██╗ ██║███████║██████╔╝██║   ██║███████║██║   ██║██║     ██║
╚════██║██║╚██╗██║██╔══██║██╔═══╝ ╚██╗ ██╔╝██╔══██║██║   ██║██║     ██║
███████║██║ ╚████║██║  ██║██║      ╚████╔╝ ██║  ██║╚██████╔╝███████╗██║
╚══════╝╚═╝  ╚═══╝╚═╝  ╚═╝╚═╝       ╚═══╝  ╚═╝  ╚═╝ ╚═════╝ ╚══════╝╚═╝
==========================================================================
           Timed photo bursts into an insert-only secret store
==========================================================================
"
    );

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match AppConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Unable to import configuration from file: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            info!("No configuration file given, using defaults");
            AppConfig::default()
        }
    };

    if let Err(e) = run(args.command, config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command, config: AppConfig) -> Result<(), ControllerError> {
    let controller = CaptureController::from_config(config)?;

    match command {
        Command::Run { json } => {
            let report = controller.run_burst().await?;
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(e) => error!("Unable to render the report as JSON: {}", e),
                }
            } else {
                println!(
                    "burst {}: {} tick(s) planned, {} saved, {} failed",
                    report.burst_id, report.planned_ticks, report.saved, report.failed
                );
                for record in &report.ticks {
                    let outcome = match &record.status {
                        TickStatus::Saved { payload_bytes } => {
                            format!("saved ({} bytes)", payload_bytes)
                        }
                        TickStatus::CaptureFailed { reason } => {
                            format!("capture failed: {}", reason)
                        }
                        TickStatus::CaptureTimedOut { after_ms } => {
                            format!("capture timed out after {}ms", after_ms)
                        }
                        TickStatus::SaveFailed { reason } => format!("save failed: {}", reason),
                    };
                    println!(
                        "  tick {:>2} ({:>4}ms left): {}",
                        record.tick, record.remaining_ms, outcome
                    );
                }
            }
        }
        Command::Fetch { output } => {
            let photo = controller.fetch_photo()?;
            let path = output.unwrap_or_else(|| {
                PathBuf::from(format!("snapvault_photo.{}", photo.codec.extension()))
            });
            if let Err(e) = std::fs::write(&path, &photo.payload) {
                error!("Unable to write {}: {}", path.display(), e);
                std::process::exit(1);
            }
            println!(
                "wrote {} byte(s) of {} to {}",
                photo.payload.len(),
                photo.codec,
                path.display()
            );
        }
        Command::Clear => {
            if controller.clear_photo()? {
                println!("stored photo cleared");
            } else {
                println!("no stored photo to clear");
            }
        }
        Command::Doctor => {
            for line in controller.doctor().await {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
