/// Signal handling for graceful shutdown

/// Resolve on SIGINT (Ctrl+C) or SIGTERM
pub async fn wait_for_signal() {
    tokio::select! {
        _ = wait_for_sigint() => {
            tracing::info!("Received SIGINT");
        }
        _ = wait_for_sigterm() => {
            tracing::info!("Received SIGTERM");
        }
    }
}

async fn wait_for_sigint() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for SIGINT: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            tracing::error!("Failed to register SIGTERM handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await;
}
