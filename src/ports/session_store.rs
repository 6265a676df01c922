//! Session store port: Trait for per-browser session state.
//!
//! Sessions are kept in process memory only; nothing is written to disk.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Handle to one session's state, shared between requests.
pub type SharedSession<S> = Arc<Mutex<S>>;

/// Trait for looking up and creating sessions.
pub trait SessionStore: Send + Sync {
    /// State kept for each session.
    type Session: Send;

    /// Error type for store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the session for `id`, creating a fresh one when `id` is absent or unknown.
    ///
    /// The returned id is the one the caller must hand back to the browser.
    ///
    /// # Errors
    /// Returns error if the store's internal state is unusable.
    fn get_or_create(
        &self,
        id: Option<Uuid>,
    ) -> Result<(Uuid, SharedSession<Self::Session>), Self::Error>;

    /// Number of live sessions.
    fn len(&self) -> usize;

    /// Whether the store holds no sessions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
