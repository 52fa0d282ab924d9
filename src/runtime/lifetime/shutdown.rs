use tokio::signal;
#[cfg(unix)]
use tracing::debug;
use tracing::warn;

/// 等待 Ctrl+C 或 SIGTERM
#[cfg(unix)]
pub async fn listen_for_shutdown() {
    use signal::unix::{SignalKind, signal as unix_signal};

    match unix_signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = wait_for_ctrl_c() => {}
                _ = terminate.recv() => {
                    warn!("SIGTERM received, initiating graceful shutdown...");
                }
            }
        }
        Err(e) => {
            warn!("Failed to listen for SIGTERM: {}, falling back to Ctrl+C", e);
            wait_for_ctrl_c().await;
        }
    }

    cleanup_unix_socket();
}

/// 等待 Ctrl+C
#[cfg(not(unix))]
pub async fn listen_for_shutdown() {
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    warn!("Shutdown signal received, initiating graceful shutdown...");
}

/// 删除监听用的 Unix socket 文件
#[cfg(unix)]
fn cleanup_unix_socket() {
    if let Some(socket_path) = crate::config::AppConfig::get().unix_socket_path() {
        match std::fs::remove_file(socket_path) {
            Ok(()) => debug!("Removed unix socket {}", socket_path),
            Err(e) => debug!("Unix socket {} not removed: {}", socket_path, e),
        }
    }
}
