//! Subscription service - `start` and `test` commands

use std::{fmt, sync::Arc};

use domain::{ChatId, DailyTime, ScheduleBinding, Timezone};
use tracing::{info, instrument};

use crate::{
    chat_registry::ChatRegistry,
    error::ApplicationError,
    ports::{MessengerPort, SchedulerPort},
    services::MotivationService,
};

/// When subscribed chats are prompted
#[derive(Debug, Clone, Copy, Default)]
pub struct SubscriptionConfig {
    /// Local trigger time
    pub time: DailyTime,
    /// Zone the trigger time is interpreted in
    pub timezone: Timezone,
}

/// Greeting sent after `start`
pub fn greeting(time: DailyTime) -> String {
    format!(
        "Привет! Каждое утро в {time} я пришлю мотивацию. Напиши /test — чтобы попробовать сейчас."
    )
}

/// Service binding chats to the daily trigger
pub struct SubscriptionService {
    registry: Arc<ChatRegistry>,
    scheduler: Arc<dyn SchedulerPort>,
    messenger: Arc<dyn MessengerPort>,
    motivation: Arc<MotivationService>,
    config: SubscriptionConfig,
}

impl fmt::Debug for SubscriptionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SubscriptionService {
    /// Create a new subscription service
    pub fn new(
        registry: Arc<ChatRegistry>,
        scheduler: Arc<dyn SchedulerPort>,
        messenger: Arc<dyn MessengerPort>,
        motivation: Arc<MotivationService>,
        config: SubscriptionConfig,
    ) -> Self {
        Self {
            registry,
            scheduler,
            messenger,
            motivation,
            config,
        }
    }

    /// Bind the chat to the daily trigger and greet it
    ///
    /// Repeating `start` replaces the existing trigger.
    #[instrument(skip(self), fields(chat_id = %chat_id))]
    pub async fn subscribe(&self, chat_id: ChatId) -> Result<ScheduleBinding, ApplicationError> {
        let binding = ScheduleBinding::new(chat_id, self.config.time, self.config.timezone);

        self.scheduler.schedule_daily(&binding).await?;
        let replaced = self.registry.bind(binding);
        info!(
            replaced,
            time = %binding.time,
            timezone = %binding.timezone,
            "Chat subscribed"
        );

        self.messenger
            .send_text(chat_id, &greeting(binding.time))
            .await?;
        Ok(binding)
    }

    /// Run the prompt flow once, now, without touching the schedule
    #[instrument(skip(self), fields(chat_id = %chat_id))]
    pub async fn trigger_now(&self, chat_id: ChatId) -> Result<(), ApplicationError> {
        self.motivation.send_prompt(chat_id).await
    }
}
