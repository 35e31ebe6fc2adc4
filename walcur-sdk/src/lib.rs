//! Shared types for the wallet currency registry.
//!
//! `objects` holds the serializable currency definitions as they appear in
//! configuration files; `config` holds the runtime configuration handed to
//! the registry by its callers.

pub mod config;
pub mod objects;
