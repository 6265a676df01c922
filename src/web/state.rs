//! Shared handler state.

use std::sync::Arc;

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::adapters::{MemorySessionStore, StoreError};
use crate::application::AssessmentService;
use crate::config::Config;
use crate::ports::{SessionStore, SharedSession};
use crate::web::session::AssessmentSession;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "mindcheck_session";

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<MemorySessionStore<AssessmentSession>>,
    pub service: Arc<AssessmentService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: AssessmentService, session_capacity: usize) -> Self {
        Self {
            sessions: Arc::new(MemorySessionStore::new(session_capacity)),
            service: Arc::new(service),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            AssessmentService::from_config(config),
            config.session_capacity,
        )
    }

    /// Resolve the caller's session from its cookie, creating one if needed.
    ///
    /// # Errors
    /// Returns error if the session store is unusable.
    pub fn session(
        &self,
        headers: &HeaderMap,
    ) -> Result<(Uuid, SharedSession<AssessmentSession>), StoreError> {
        self.sessions.get_or_create(session_id(headers))
    }
}

/// Extract the session id from the `Cookie` header(s).
#[must_use]
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(axum::http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_id_from_cookie() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={id}"))
                .expect("header"),
        );
        assert_eq!(session_id(&headers), Some(id));
    }

    #[test]
    fn test_session_id_rejects_garbage() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("mindcheck_session=not-a-uuid"),
        );
        assert_eq!(session_id(&headers), None);
        assert_eq!(session_id(&HeaderMap::new()), None);
    }
}
