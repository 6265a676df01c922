//! HTTP surface: router, handlers, per-browser sessions and HTML views.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod session;
pub mod state;
pub mod styles;
pub mod views;

pub use error::WebError;
pub use router::build_router;
pub use server::serve;
pub use session::AssessmentSession;
pub use state::AppState;
