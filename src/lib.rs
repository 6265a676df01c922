//! # Mindcheck
//!
//! Mental health assessment page: a symptom intake form and a static assessment report,
//! served over HTTP.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Condition table, intake form, processed data panel
//! - `ports`: Trait definitions for session state
//! - `adapters`: In-memory session store, log sanitization
//! - `application`: Report service and the timed busy-state worker
//! - `web`: axum router, handlers and HTML views

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod web;

pub use config::Config;
pub use domain::{AssessmentReport, ConditionRecord, IntakeForm, Severity};

/// Main error type for Mindcheck
#[derive(Debug, thiserror::Error)]
pub enum MindcheckError {
    #[error("Lock poisoned: {0}")]
    LockPoisoned(&'static str),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
