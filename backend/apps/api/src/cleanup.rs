//! Background Session Cleanup
//!
//! Expired sessions are never read again, but they stay in the store until
//! this task deletes them.

use std::sync::Arc;
use std::time::Duration;

use auth::domain::repository::SessionStore;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const SESSION_CLEANUP_PERIOD: Duration = Duration::from_secs(60 * 60);

/// Run `cleanup_expired` now and then once per `period`
///
/// Failures are logged and retried on the next tick.
pub fn spawn_session_cleanup<S>(store: Arc<S>, period: Duration) -> JoinHandle<()>
where
    S: SessionStore + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match store.cleanup_expired().await {
                Ok(deleted) => {
                    tracing::info!(sessions_deleted = deleted, "Session cleanup completed");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Session cleanup failed, retrying next period");
                }
            }
        }
    })
}
