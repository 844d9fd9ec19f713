//! RunSpark Telegram front end
//!
//! Command and message handlers for the teloxide dispatcher, plus the
//! logging setup shared by the `runspark-bot` binary.

pub mod handlers;
pub mod logging;

pub use handlers::{BotServices, Command, handle_command, handle_text, is_command, schema};
pub use logging::{filter_from_verbosity, init_tracing, resolve_filter};
