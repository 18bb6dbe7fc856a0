//! Scangate daemon entry point.
//!
//! Wires the production collaborators together (USB scanner port, remote
//! validator, GPIO relay pin) and runs the supervisor until an interrupt
//! signal arrives. Logging is configured through `RUST_LOG` (defaults to
//! `info`).

use scangate_core::constants::{RELAY_BCM_PIN, RELAY_HEADER_PIN};
use scangate_hardware::{GpioRelayPin, UsbScannerPort};
use scangate_supervisor::Supervisor;
use scangate_validate::{RemoteValidator, ValidatorConfig};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(version = scangate_core::VERSION, "scangate starting");

    let port = UsbScannerPort::new();
    let validator = RemoteValidator::new(ValidatorConfig::default())?;
    let relay = GpioRelayPin::new(RELAY_BCM_PIN)?;
    info!(
        bcm = RELAY_BCM_PIN,
        header = RELAY_HEADER_PIN,
        "relay pin acquired"
    );

    let supervisor = Supervisor::new(port, validator, relay)?;

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => signal_cancel.cancel(),
            Err(e) => error!(error = %e, "failed to listen for interrupt signal"),
        }
    });

    supervisor.run(cancel).await?;
    Ok(())
}
