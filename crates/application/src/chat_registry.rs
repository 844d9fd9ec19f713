//! In-memory store of per-chat sessions
//!
//! Holds the schedule binding and conversation phase of every chat the bot
//! has seen. Nothing survives a restart.

use std::collections::HashMap;

use domain::{ChatId, ChatPhase, ChatSession, ScheduleBinding};
use parking_lot::RwLock;

/// Thread-safe registry of chat sessions
#[derive(Debug, Default)]
pub struct ChatRegistry {
    sessions: RwLock<HashMap<ChatId, ChatSession>>,
}

impl ChatRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a binding, returning `true` if it replaced an earlier one
    pub fn bind(&self, binding: ScheduleBinding) -> bool {
        let mut sessions = self.sessions.write();
        sessions
            .entry(binding.chat_id)
            .or_insert_with(|| ChatSession::new(binding.chat_id))
            .bind(binding)
            .is_some()
    }

    /// Binding of a chat, if it ran `start`
    pub fn binding(&self, chat_id: ChatId) -> Option<ScheduleBinding> {
        self.sessions
            .read()
            .get(&chat_id)
            .and_then(|s| s.binding().copied())
    }

    /// Record that a mood prompt was sent to the chat
    pub fn mark_prompted(&self, chat_id: ChatId) {
        self.sessions
            .write()
            .entry(chat_id)
            .or_insert_with(|| ChatSession::new(chat_id))
            .prompt_sent();
    }

    /// Atomically consume the chat's pending mood slot
    ///
    /// Returns `true` exactly once per prompt; the caller that gets `true`
    /// owns the reply.
    pub fn take_mood_slot(&self, chat_id: ChatId) -> bool {
        self.sessions
            .write()
            .get_mut(&chat_id)
            .is_some_and(|s| s.mood_received().is_ok())
    }

    /// Current phase of a chat; unknown chats await a trigger
    pub fn phase(&self, chat_id: ChatId) -> ChatPhase {
        self.sessions
            .read()
            .get(&chat_id)
            .map_or(ChatPhase::AwaitingTrigger, ChatSession::phase)
    }

    /// Number of known chats
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Whether no chat is known
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{DailyTime, Timezone};
    use std::sync::Arc;

    fn binding(chat: i64, hour: u32) -> ScheduleBinding {
        ScheduleBinding::new(
            ChatId::new(chat),
            DailyTime::new(hour, 0).unwrap(),
            Timezone::default(),
        )
    }

    #[test]
    fn empty_registry() {
        let registry = ChatRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.phase(ChatId::new(1)), ChatPhase::AwaitingTrigger);
        assert!(registry.binding(ChatId::new(1)).is_none());
    }

    #[test]
    fn bind_twice_replaces() {
        let registry = ChatRegistry::new();
        assert!(!registry.bind(binding(1, 4)));
        assert!(registry.bind(binding(1, 5)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.binding(ChatId::new(1)).map(|b| b.time.hour()), Some(5));
    }

    #[test]
    fn mood_slot_taken_once() {
        let registry = ChatRegistry::new();
        let chat = ChatId::new(1);
        registry.mark_prompted(chat);
        assert_eq!(registry.phase(chat), ChatPhase::AwaitingMoodReply);

        assert!(registry.take_mood_slot(chat));
        assert!(!registry.take_mood_slot(chat));
        assert_eq!(registry.phase(chat), ChatPhase::AwaitingTrigger);
    }

    #[test]
    fn take_slot_for_unknown_chat() {
        let registry = ChatRegistry::new();
        assert!(!registry.take_mood_slot(ChatId::new(99)));
        assert!(registry.is_empty());
    }

    #[test]
    fn prompt_keeps_binding() {
        let registry = ChatRegistry::new();
        registry.bind(binding(1, 4));
        registry.mark_prompted(ChatId::new(1));
        assert!(registry.binding(ChatId::new(1)).is_some());
    }

    #[test]
    fn chats_are_independent() {
        let registry = ChatRegistry::new();
        registry.mark_prompted(ChatId::new(1));
        assert!(!registry.take_mood_slot(ChatId::new(2)));
        assert!(registry.take_mood_slot(ChatId::new(1)));
    }

    #[test]
    fn concurrent_replies_consume_single_slot() {
        let registry = Arc::new(ChatRegistry::new());
        let chat = ChatId::new(7);
        registry.mark_prompted(chat);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.take_mood_slot(chat))
            })
            .collect();

        let taken = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|taken| *taken)
            .count();
        assert_eq!(taken, 1);
    }
}
