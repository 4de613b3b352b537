use std::fmt;

use serde::{Deserialize, Serialize};

/// The two states of a console session.
///
/// The only transition is `Unauthenticated` → `Authenticated`, taken once on
/// a successful login. There is no logout path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Unauthenticated => write!(f, "UNAUTHENTICATED"),
            SessionState::Authenticated => write!(f, "AUTHENTICATED"),
        }
    }
}

/// Process-wide session context held by the menu controller.
///
/// Replaces an ambient global flag with an explicit object; still a single
/// session for a single-threaded CLI. The state is monotonic: once
/// authenticated, the session stays authenticated for the process lifetime.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: SessionState::Unauthenticated,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the session authenticated. Idempotent; there is no reverse
    /// transition.
    pub fn login(&mut self) {
        self.state = SessionState::Authenticated;
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    #[allow(dead_code)]
    pub fn state(&self) -> SessionState {
        self.state
    }
}
