//! # Session State
//!
//! Per-visitor UI-visible values: which role they picked and the last test
//! pickup code generated for them. Owned here so the presentation layer
//! stays a pure renderer.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Which side of the kiosk the visitor chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Partner,
}

/// One visitor's session values.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Selected role, `None` until the visitor picks one.
    pub role: Option<Role>,

    /// The last test pickup code generated in this session. What the
    /// customer's entry is verified against.
    pub test_code: Option<String>,
}

/// Kiosk-managed session state.
#[derive(Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}
