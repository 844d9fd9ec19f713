//! Scheduler port - Recurring daily triggers

use async_trait::async_trait;
use domain::ScheduleBinding;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for registering daily triggers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SchedulerPort: Send + Sync {
    /// Register the binding's daily trigger
    ///
    /// Replaces any trigger previously registered for the same chat, so
    /// each chat fires at most once per day.
    async fn schedule_daily(&self, binding: &ScheduleBinding) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn SchedulerPort) {}

    #[tokio::test]
    async fn mock_schedules_binding() {
        use domain::{ChatId, DailyTime, Timezone};

        let mut mock = MockSchedulerPort::new();
        mock.expect_schedule_daily()
            .withf(|b| b.chat_id == ChatId::new(3))
            .times(1)
            .returning(|_| Ok(()));

        let binding = ScheduleBinding::new(ChatId::new(3), DailyTime::default(), Timezone::default());
        assert!(mock.schedule_daily(&binding).await.is_ok());
    }
}
