#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Latency of the simulated grade server.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

/// Grades returned by the simulated grade server.
pub const DEFAULT_GRADES: [i32; 5] = [95, 87, 74, 88, 90];

/// Errors from fetching grades.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// The fetch did not finish within the allotted time.
    #[error("grade fetch timed out after {0:?}")]
    TimedOut(Duration),
    /// The fetch was cancelled before it finished.
    #[error("grade fetch was cancelled")]
    Cancelled,
    /// The task running the fetch panicked or was aborted.
    #[error("grade fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Something that can hand out a list of grades, possibly after a delay.
#[async_trait]
pub trait GradeSource: Send + Sync {
    /// Fetch the grades. Implementations that cannot fail return `Ok` always.
    async fn fetch(&self) -> Result<Vec<i32>, FetchError>;
}

/// In-memory stand-in for a remote grade server.
#[derive(Debug, Clone)]
pub struct SimulatedServer {
    /// How long each fetch waits before answering.
    latency: Duration,
    /// What each fetch answers with.
    grades:  Vec<i32>,
}

impl Default for SimulatedServer {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl SimulatedServer {
    /// Server answering with [`DEFAULT_GRADES`] after `latency`.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            grades: DEFAULT_GRADES.to_vec(),
        }
    }

    /// Replaces the payload served by this server.
    pub fn with_grades(mut self, grades: impl IntoIterator<Item = i32>) -> Self {
        self.grades = grades.into_iter().collect();
        self
    }

    /// Configured latency.
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl GradeSource for SimulatedServer {
    async fn fetch(&self) -> Result<Vec<i32>, FetchError> {
        tracing::debug!(latency = ?self.latency, "fetching grades from server");
        tokio::time::sleep(self.latency).await;
        tracing::info!(count = self.grades.len(), "grades received");
        Ok(self.grades.clone())
    }
}

/// Runs `source.fetch()` and gives up when `cancel` fires or `timeout` runs
/// out, whichever comes first. With no timeout and an untouched token this is
/// the same as calling `fetch` directly.
pub async fn fetch_grades(
    source: &dyn GradeSource,
    timeout: Option<Duration>,
    cancel: &CancellationToken,
) -> Result<Vec<i32>, FetchError> {
    let fetch = async {
        match timeout {
            Some(limit) => match tokio::time::timeout(limit, source.fetch()).await {
                Ok(result) => result,
                Err(_) => Err(FetchError::TimedOut(limit)),
            },
            None => source.fetch().await,
        }
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::warn!("grade fetch cancelled");
            Err(FetchError::Cancelled)
        }
        result = fetch => result,
    }
}

/// Starts [`fetch_grades`] on the runtime and returns its handle so the
/// caller can keep working before awaiting the result.
pub fn spawn_fetch(
    source: Arc<dyn GradeSource>,
    timeout: Option<Duration>,
    cancel: CancellationToken,
) -> JoinHandle<Result<Vec<i32>, FetchError>> {
    tokio::spawn(async move { fetch_grades(source.as_ref(), timeout, &cancel).await })
}

/// Awaits a handle from [`spawn_fetch`], folding task failures into
/// [`FetchError::Join`].
pub async fn join_fetch(
    handle: JoinHandle<Result<Vec<i32>, FetchError>>,
) -> Result<Vec<i32>, FetchError> {
    handle.await?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn default_server_waits_two_seconds() {
        let server = SimulatedServer::default();
        let start = tokio::time::Instant::now();
        let grades = server.fetch().await.expect("fetch");
        assert_eq!(grades, DEFAULT_GRADES);
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_shorter_than_latency_fails() {
        let server = SimulatedServer::default();
        let token = CancellationToken::new();
        let err = fetch_grades(&server, Some(Duration::from_millis(500)), &token)
            .await
            .expect_err("should time out");
        assert!(matches!(err, FetchError::TimedOut(d) if d == Duration::from_millis(500)));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_token_stops_fetch() {
        let server = SimulatedServer::default();
        let token = CancellationToken::new();
        token.cancel();
        let err = fetch_grades(&server, None, &token)
            .await
            .expect_err("should be cancelled");
        assert!(matches!(err, FetchError::Cancelled));
    }
}
