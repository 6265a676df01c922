//! Adapters layer: Concrete implementations of ports.
//!
//! - `memory`: in-process session store
//! - `sanitize`: session id and intake value filtering for logs

pub mod memory;
pub mod sanitize;

pub use memory::{MemorySessionStore, StoreError};
