//! Runtime configuration types.
//!
//! These types represent the validated configuration used by the registry
//! and can be shared across crates. Loading and parsing is handled by the
//! binary crate.

mod client;
mod server;

pub use client::ClientConfig;
pub use server::ServerConfig;
