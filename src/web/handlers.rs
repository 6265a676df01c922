//! Request handlers.
//!
//! Session locks are never held across an `.await`.

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::config::APP_VERSION;
use crate::domain::{AssessmentReport, IntakeSubmission};
use crate::ports::{SessionStore, SharedSession};
use crate::web::error::WebError;
use crate::web::session::AssessmentSession;
use crate::web::state::{session_id, AppState, SESSION_COOKIE};
use crate::web::views;

/// Attach the session cookie when the browser does not already carry this id.
fn with_session_cookie(mut response: Response, id: Uuid, headers: &HeaderMap) -> Response {
    if session_id(headers) != Some(id) {
        let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

/// Run `f` against the caller's session and attach the cookie to its response.
fn session_response<F>(state: &AppState, headers: &HeaderMap, f: F) -> Result<Response, WebError>
where
    F: FnOnce(&mut AssessmentSession) -> Response,
{
    let (id, session): (Uuid, SharedSession<AssessmentSession>) = state.session(headers)?;
    let response = {
        let mut session = session.lock().map_err(|_| WebError::SessionUnavailable)?;
        f(&mut *session)
    };
    Ok(with_session_cookie(response, id, headers))
}

/// `GET /`: render the page for the caller's session.
pub async fn page(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, WebError> {
    session_response(&state, &headers, |session| {
        let view = session.take_view();
        Html(views::render_page(&view)).into_response()
    })
}

/// `POST /ingest`: store the intake values and start the ingest wait.
pub async fn ingest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(submission): Form<IntakeSubmission>,
) -> Result<Response, WebError> {
    let service = state.service.clone();
    session_response(&state, &headers, move |session| {
        session.submit_intake(&submission, &service);
        tracing::info!("Intake submitted");
        Redirect::to("/").into_response()
    })
}

/// `POST /analyze`: start the analysis wait.
pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let service = state.service.clone();
    session_response(&state, &headers, move |session| {
        session.request_analysis(&service);
        tracing::info!("Analysis requested");
        Redirect::to("/").into_response()
    })
}

/// `POST /cancel`: cancel the running wait, if any.
pub async fn cancel(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    session_response(&state, &headers, |session| {
        if session.cancel() {
            tracing::info!("Busy state cancelled by user");
        }
        Redirect::to("/").into_response()
    })
}

/// `GET /api/report`: a freshly generated report as JSON, without the wait.
pub async fn report(State(state): State<AppState>) -> Result<Json<AssessmentReport>, WebError> {
    Ok(Json(state.service.generate_report()?))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub sessions: usize,
}

/// `GET /health`: liveness check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: APP_VERSION,
        sessions: state.sessions.len(),
    })
}
