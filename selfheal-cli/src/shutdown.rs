//! Interrupt handling for benchmark runs.

use tokio::signal;
use tracing::{info, warn};

/// Completes when SIGINT (Ctrl+C) or, on unix, SIGTERM is received.
///
/// If a handler cannot be installed that signal is never observed; the run
/// then only stops on completion or error.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), stopping benchmark");
        },
        _ = terminate => {
            info!("Received SIGTERM, stopping benchmark");
        },
    }
}
