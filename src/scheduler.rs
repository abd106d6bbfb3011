use std::time::Duration;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::cache::CachePublisher;
use crate::error::Result;

/// Owns the background job scheduler.
///
/// Jobs are registered by name from `main`, so the wiring stays explicit;
/// nothing in here is process-global state.
pub struct RefreshScheduler {
    sched: JobScheduler,
}

impl RefreshScheduler {
    pub async fn new() -> Result<Self> {
        Ok(Self {
            sched: JobScheduler::new().await?,
        })
    }

    /// Register the named periodic refresh job. A failed tick is logged and
    /// abandoned; the schedule keeps running and the next tick starts clean.
    pub async fn add_refresh_job(
        &self,
        name: &'static str,
        every: Duration,
        publisher: CachePublisher,
    ) -> Result<()> {
        let job = Job::new_repeated_async(every, move |_id, _sched| {
            let publisher = publisher.clone();
            Box::pin(async move {
                if let Err(e) = publisher.refresh().await {
                    tracing::error!("job {} failed: {}", name, e);
                }
            })
        })?;
        self.sched.add(job).await?;
        tracing::info!("scheduled job {} every {}s", name, every.as_secs());
        Ok(())
    }

    pub async fn start(&self) -> Result<()> {
        self.sched.start().await?;
        Ok(())
    }

    pub async fn shutdown(&mut self) -> Result<()> {
        self.sched.shutdown().await?;
        Ok(())
    }
}
