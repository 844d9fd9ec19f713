//! Update handlers
//!
//! The teloxide endpoints only extract the chat and text; the work happens
//! in [`handle_command`] and [`handle_text`] so it can run without Telegram.
//! Known commands are routed first; any other slash command never counts as
//! a mood reply.

use std::sync::Arc;

use application::{ApplicationError, MotivationService, ReplyOutcome, SubscriptionService};
use domain::ChatId;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info};

// Bot commands, listed in the Telegram menu
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "подписаться на утреннюю мотивацию")]
    Start,
    #[command(description = "получить мотивацию прямо сейчас")]
    Test,
}

/// Services the handlers dispatch to
#[derive(Debug, Clone)]
pub struct BotServices {
    subscriptions: Arc<SubscriptionService>,
    motivation: Arc<MotivationService>,
}

impl BotServices {
    /// Bundle the services for the dispatcher
    pub const fn new(
        subscriptions: Arc<SubscriptionService>,
        motivation: Arc<MotivationService>,
    ) -> Self {
        Self {
            subscriptions,
            motivation,
        }
    }
}

/// Run a command for a chat
pub async fn handle_command(
    services: &BotServices,
    chat_id: ChatId,
    command: Command,
) -> Result<(), ApplicationError> {
    match command {
        Command::Start => {
            let binding = services.subscriptions.subscribe(chat_id).await?;
            info!(chat_id = %chat_id, time = %binding.time, "Start handled");
        },
        Command::Test => {
            services.subscriptions.trigger_now(chat_id).await?;
            info!(chat_id = %chat_id, "Test prompt sent");
        },
    }
    Ok(())
}

/// Whether the text is a bot command, for this bot or any other
pub fn is_command(text: &str) -> bool {
    text.trim_start().starts_with('/')
}

/// Route non-command text to the mood flow
///
/// Commands that reach this point were not recognised (`/help`, or a command
/// addressed to another bot). They are dropped without touching the chat's
/// state, so an outstanding mood prompt stays open. Returns `None` for them.
pub async fn handle_text(
    services: &BotServices,
    chat_id: ChatId,
    text: &str,
) -> Result<Option<ReplyOutcome>, ApplicationError> {
    if is_command(text) {
        debug!(chat_id = %chat_id, "Ignoring unknown command");
        return Ok(None);
    }

    let outcome = services.motivation.handle_message(chat_id, text).await?;
    debug!(chat_id = %chat_id, ?outcome, "Text handled");
    Ok(Some(outcome))
}

async fn command_endpoint(
    msg: Message,
    cmd: Command,
    services: BotServices,
) -> Result<(), ApplicationError> {
    handle_command(&services, ChatId::new(msg.chat.id.0), cmd).await
}

async fn message_endpoint(msg: Message, services: BotServices) -> Result<(), ApplicationError> {
    let Some(text) = msg.text() else {
        debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
        return Ok(());
    };

    handle_text(&services, ChatId::new(msg.chat.id.0), text).await?;
    Ok(())
}

/// Dispatcher handler tree
pub fn schema() -> UpdateHandler<ApplicationError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_endpoint),
        )
        .branch(Update::filter_message().endpoint(message_endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_text_is_command() {
        assert!(is_command("/help"));
        assert!(is_command("/start@other_bot"));
        assert!(is_command("  /stop"));
    }

    #[test]
    fn mood_text_is_not_command() {
        assert!(!is_command("плохо"));
        assert!(!is_command("норм / устал"));
        assert!(!is_command(""));
    }
}
