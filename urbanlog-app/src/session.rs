use urbanlog_core::entities::{Id, Session};

/// Push notification from the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(Session),
    SignedOut,
}

/// Holds the identity the client is currently acting as.
///
/// There is exactly one instance per client, updated through a single
/// subscription point and read by everything that needs the current
/// user. Flows take the user id as an explicit parameter instead of
/// reaching into this context themselves.
#[derive(Debug, Default)]
pub struct SessionContext {
    current: Option<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: SessionEvent) {
        self.current = match event {
            SessionEvent::SignedIn(session) => Some(session),
            SessionEvent::SignedOut => None,
        };
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn user_id(&self) -> Option<&Id> {
        self.current.as_ref().map(|s| &s.user_id)
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}
