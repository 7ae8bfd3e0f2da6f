//! Conversation session management.
//!
//! A `Session` holds the append-only turn history, derives bounded
//! context slices from it, and runs one request/response cycle per
//! user action.

mod chat;
mod manager;
mod types;


pub use manager::Session;
pub use types::{Role, Turn};
