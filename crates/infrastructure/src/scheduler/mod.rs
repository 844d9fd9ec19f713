//! Cron-based daily trigger per chat
//!
//! Each subscribed chat owns exactly one job in a `tokio-cron-scheduler`
//! `JobScheduler`. Registering a chat again replaces its job, so a chat is
//! never prompted twice a day. Jobs fire in the binding's zone and hand the
//! chat to a [`TriggerCallback`].

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use application::error::ApplicationError;
use application::ports::SchedulerPort;
use async_trait::async_trait;
use chrono_tz::Tz;
use domain::{ChatId, ScheduleBinding};
use futures::future::BoxFuture;
use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Scheduler errors
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Invalid cron expression
    #[error("Invalid cron expression: {0}")]
    InvalidCronExpression(String),

    /// Internal scheduler error
    #[error("Internal scheduler error: {0}")]
    Internal(String),
}

impl From<JobSchedulerError> for SchedulerError {
    fn from(err: JobSchedulerError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<SchedulerError> for ApplicationError {
    fn from(err: SchedulerError) -> Self {
        Self::Scheduling(err.to_string())
    }
}

/// Work run when a chat's daily trigger fires
pub type TriggerCallback =
    Arc<dyn Fn(ChatId) -> BoxFuture<'static, Result<(), String>> + Send + Sync>;

/// Wrap a closure as a [`TriggerCallback`]
pub fn trigger_callback<F>(callback: F) -> TriggerCallback
where
    F: Fn(ChatId) -> BoxFuture<'static, Result<(), String>> + Send + Sync + 'static,
{
    Arc::new(callback)
}

/// Check a six-field cron expression (sec min hour day month weekday)
pub fn validate_cron(cron_expression: &str) -> Result<(), SchedulerError> {
    cron_expression
        .parse::<cron::Schedule>()
        .map(|_| ())
        .map_err(|e| SchedulerError::InvalidCronExpression(format!("{cron_expression}: {e}")))
}

#[derive(Debug, Clone)]
struct ScheduledJob {
    job_id: Uuid,
    cron_expression: String,
}

/// Daily trigger scheduler keyed by chat
pub struct DailyScheduler {
    scheduler: AsyncMutex<JobScheduler>,
    jobs: RwLock<HashMap<ChatId, ScheduledJob>>,
    on_trigger: TriggerCallback,
    running: AtomicBool,
}

impl std::fmt::Debug for DailyScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DailyScheduler")
            .field("running", &self.running.load(Ordering::Relaxed))
            .field("job_count", &self.jobs.read().len())
            .finish_non_exhaustive()
    }
}

impl DailyScheduler {
    /// Create and start a scheduler that runs `on_trigger` for due chats
    #[instrument(skip_all)]
    pub async fn new(on_trigger: TriggerCallback) -> Result<Self, SchedulerError> {
        let scheduler = JobScheduler::new().await?;
        scheduler.start().await?;

        info!("Daily scheduler started");
        Ok(Self {
            scheduler: AsyncMutex::new(scheduler),
            jobs: RwLock::new(HashMap::new()),
            on_trigger,
            running: AtomicBool::new(true),
        })
    }

    /// Register the binding's daily job, replacing any earlier one
    pub async fn schedule(&self, binding: &ScheduleBinding) -> Result<Uuid, SchedulerError> {
        self.schedule_cron(
            binding.chat_id,
            &binding.cron_expression(),
            binding.timezone.tz(),
        )
        .await
    }

    /// Register a job for `chat_id` on an arbitrary cron expression
    #[instrument(skip(self), fields(chat_id = %chat_id))]
    pub async fn schedule_cron(
        &self,
        chat_id: ChatId,
        cron_expression: &str,
        timezone: Tz,
    ) -> Result<Uuid, SchedulerError> {
        validate_cron(cron_expression)?;

        let on_trigger = Arc::clone(&self.on_trigger);
        let job = Job::new_async_tz(cron_expression, timezone, move |_uuid, _lock| {
            let on_trigger = Arc::clone(&on_trigger);
            Box::pin(async move {
                debug!(chat_id = %chat_id, "Daily trigger fired");
                match on_trigger(chat_id).await {
                    Ok(()) => info!(chat_id = %chat_id, "Daily prompt sent"),
                    Err(e) => error!(chat_id = %chat_id, error = %e, "Daily prompt failed"),
                }
            })
        })
        .map_err(|e| SchedulerError::InvalidCronExpression(e.to_string()))?;
        let job_id = job.guid();

        // Held across add and remove so concurrent reschedules of one chat
        // cannot leave two jobs behind
        let scheduler = self.scheduler.lock().await;

        // Add first: a failed add keeps the previous job in place
        scheduler.add(job).await?;
        let previous = self.jobs.write().insert(
            chat_id,
            ScheduledJob {
                job_id,
                cron_expression: cron_expression.to_string(),
            },
        );

        if let Some(previous) = previous {
            scheduler.remove(&previous.job_id).await?;
            debug!(
                old_job = %previous.job_id,
                old_cron = %previous.cron_expression,
                "Replaced existing daily trigger"
            );
        }

        info!(cron = %cron_expression, timezone = %timezone, "Daily trigger scheduled");
        Ok(job_id)
    }

    /// Cron expression of the chat's job, if any
    pub fn cron_for(&self, chat_id: ChatId) -> Option<String> {
        self.jobs
            .read()
            .get(&chat_id)
            .map(|job| job.cron_expression.clone())
    }

    /// Number of chats with a job
    pub fn job_count(&self) -> usize {
        self.jobs.read().len()
    }

    /// Check if the scheduler is running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Stop the scheduler gracefully
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), SchedulerError> {
        if !self.running.swap(false, Ordering::Relaxed) {
            debug!("Scheduler already stopped");
            return Ok(());
        }

        self.scheduler.lock().await.shutdown().await?;
        info!("Daily scheduler stopped");
        Ok(())
    }
}

#[async_trait]
impl SchedulerPort for DailyScheduler {
    async fn schedule_daily(&self, binding: &ScheduleBinding) -> Result<(), ApplicationError> {
        self.schedule(binding).await?;
        Ok(())
    }
}
