//! Domain entities - Objects with identity and lifecycle

mod chat_session;
mod schedule_binding;

pub use chat_session::{ChatPhase, ChatSession};
pub use schedule_binding::ScheduleBinding;
