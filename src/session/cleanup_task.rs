use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, instrument, warn};

use super::repository::SessionRepository;
use crate::shared::AppError;

/// Configuration for the expiry sweep
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// How often to run the sweep
    pub cleanup_interval: Duration,
    /// How old a session must be before it is removed
    pub session_ttl: Duration,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            cleanup_interval: Duration::from_secs(60 * 60), // 1 hour
            session_ttl: Duration::from_secs(24 * 60 * 60), // 24 hours
        }
    }
}

/// Handle to the running sweep task
pub struct CleanupHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl CleanupHandle {
    /// Stops the sweep loop and waits for it to exit
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Err(e) = self.task.await {
            warn!(error = %e, "Cleanup task did not shut down cleanly");
        }
    }

    #[cfg(test)]
    fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns the background task that periodically removes expired sessions
pub fn start_cleanup_task(
    repository: Arc<dyn SessionRepository + Send + Sync>,
    config: CleanupConfig,
) -> CleanupHandle {
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let task = tokio::spawn(cleanup_loop(repository, config, shutdown_rx));

    CleanupHandle {
        shutdown: Some(shutdown_tx),
        task,
    }
}

#[instrument(skip(repository, shutdown))]
async fn cleanup_loop(
    repository: Arc<dyn SessionRepository + Send + Sync>,
    config: CleanupConfig,
    mut shutdown: oneshot::Receiver<()>,
) {
    info!(
        cleanup_interval_secs = config.cleanup_interval.as_secs(),
        session_ttl_secs = config.session_ttl.as_secs(),
        "Starting session cleanup background task"
    );

    let mut cleanup_interval = interval(config.cleanup_interval);
    cleanup_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; sweeps start one interval in
    cleanup_interval.tick().await;

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Session cleanup task stopping");
                break;
            }
            _ = cleanup_interval.tick() => {
                run_sweep(repository.as_ref(), config.session_ttl).await;
            }
        }
    }
}

/// Runs one sweep. Failures are logged and swallowed; returns how many
/// sessions were removed.
#[instrument(skip(repository))]
pub async fn run_sweep(repository: &(dyn SessionRepository + Send + Sync), ttl: Duration) -> u64 {
    match expire_sessions(repository, ttl).await {
        Ok(0) => {
            info!("No expired sessions to clean up");
            0
        }
        Ok(removed) => {
            info!(removed, "Session cleanup completed");
            removed
        }
        Err(e) => {
            error!(error = %e, "Session cleanup failed");
            0
        }
    }
}

async fn expire_sessions(
    repository: &(dyn SessionRepository + Send + Sync),
    ttl: Duration,
) -> Result<u64, AppError> {
    let ttl = chrono::Duration::from_std(ttl).map_err(|_| AppError::Internal)?;
    repository.expire_sessions(ttl, Utc::now()).await
}
