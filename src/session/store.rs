use std::collections::HashMap;

use super::types::Session;

/// Session registry keyed by session id.
///
/// Each session owns its response set outright, so concurrent users are
/// isolated by construction: scoring one session never observes another's
/// state. Ending a session discards it.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session with this id, creating it if absent.
    pub fn open(&mut self, session_id: &str, framework_id: &str) -> &mut Session {
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Session::new(session_id, framework_id))
    }

    pub fn get(&self, session_id: &str) -> Option<&Session> {
        self.sessions.get(session_id)
    }

    pub fn get_mut(&mut self, session_id: &str) -> Option<&mut Session> {
        self.sessions.get_mut(session_id)
    }

    /// Discard a session and everything it recorded.
    /// Returns true if the session existed.
    pub fn end(&mut self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ResponseValue;

    #[test]
    fn test_open_creates_once() {
        let mut store = SessionStore::new();
        store.open("s1", "fintech-ai-risk");
        store
            .open("s1", "fintech-ai-risk")
            .record("q1", ResponseValue::Bool(true));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("s1").unwrap().answered(), 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut store = SessionStore::new();
        store
            .open("s1", "fintech-ai-risk")
            .record("q1", ResponseValue::Bool(true));
        store.open("s2", "fintech-ai-risk");

        assert_eq!(store.get("s1").unwrap().answered(), 1);
        assert_eq!(store.get("s2").unwrap().answered(), 0);
    }

    #[test]
    fn test_end_discards_state() {
        let mut store = SessionStore::new();
        store
            .open("s1", "fintech-ai-risk")
            .record("q1", ResponseValue::Bool(true));
        assert!(store.end("s1"));
        assert!(!store.end("s1"));
        assert!(store.get("s1").is_none());

        // Reopening starts from scratch
        assert_eq!(store.open("s1", "fintech-ai-risk").answered(), 0);
    }
}
