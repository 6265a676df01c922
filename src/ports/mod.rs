//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and the state it is hosted in.

mod session_store;

pub use session_store::{SessionStore, SharedSession};
