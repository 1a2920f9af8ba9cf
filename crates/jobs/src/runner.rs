use crate::{ChangeLogJob, HostSyncJob};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct JobRunner {
    host_sync: Option<HostSyncJob>,
    change_log: Option<ChangeLogJob>,
    shutdown: CancellationToken,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            host_sync: None,
            change_log: None,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_host_sync(mut self, job: HostSyncJob) -> Self {
        self.host_sync = Some(job);
        self
    }

    pub fn with_change_log(mut self, job: ChangeLogJob) -> Self {
        self.change_log = Some(job);
        self
    }

    /// Every job is stopped through this token.
    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Spawns the configured jobs. Await the returned handles after
    /// cancelling to wait for them to finish.
    pub async fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");
        let mut handles = Vec::new();

        if let Some(job) = self.change_log {
            let job = Arc::new(job.with_cancellation(self.shutdown.clone()));
            handles.push(tokio::spawn(async move {
                job.start().await;
            }));
        }

        if let Some(job) = self.host_sync {
            let job = Arc::new(job.with_cancellation(self.shutdown.clone()));
            handles.push(tokio::spawn(job.start()));
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
