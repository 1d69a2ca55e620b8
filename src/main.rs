//! AgeAudit — point-in-time retention audit for mounted remote storage.
//!
//! Thin binary entry point. All logic lives in the `ageaudit-core` crate.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, warn};

use ageaudit_core::platform;
use ageaudit_core::report::{run_report, HistogramEmitter, ReportConfig};

/// Audited mount when no path is passed on the command line.
const DEFAULT_MOUNT_PATH: &str = "/mnt/ftp";

#[derive(Parser)]
#[command(
    name = "ageaudit",
    version,
    about = "Retention audit for mounted remote-storage directories",
    long_about = "Inventories every file under a mounted remote-storage directory, \
                  writes age-band manifests (10+ years, 9-10 years, full inventory) \
                  plus optional per-extension age histograms, and logs aggregate \
                  disk usage."
)]
struct Cli {
    /// Mounted remote-storage directory to audit
    mount_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mount_path = match cli.mount_path {
        Some(path) => {
            info!("mount path passed in: {}", path.display());
            path
        }
        None => {
            info!("defaulting to mount path: {DEFAULT_MOUNT_PATH}");
            PathBuf::from(DEFAULT_MOUNT_PATH)
        }
    };

    if !mount_path.is_dir() {
        error!("not a directory: {} — exiting", mount_path.display());
        std::process::exit(1);
    }
    info!("auditing mount path: {}", mount_path.display());

    let emitter = HistogramEmitter::detect();
    if emitter.is_enabled() {
        info!("plotting capability available: histograms will be created");
    } else {
        warn!("plotting capability unavailable: histograms will not be created");
    }

    let server_label = platform::resolve_server_label(&mount_path);
    info!("storage server being audited: {server_label}");

    let config = ReportConfig {
        mount_path,
        server_label,
        output_dir: PathBuf::from("."),
    };
    run_report(&config, &emitter)?;

    info!("audit complete");
    Ok(())
}

/// Structured logging to stderr. `DEBUG=<anything but 0>` raises the level
/// to DEBUG and adds file/line detail to each line.
fn init_logging() {
    let debug = std::env::var("DEBUG").map(|v| v != "0").unwrap_or(false);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_file(debug)
        .with_line_number(debug)
        .init();
}
