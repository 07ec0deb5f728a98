//! # Pfadkern
//!
//! Core library for command-line tools working in the drive/share-based
//! Windows file namespace. Pfadkern classifies path strings purely by their
//! lexical shape, derives roots and directories without touching storage,
//! converts between escaped and plain path spellings, and talks to
//! size-negotiating native calls through pooled, growable UTF-16 buffers.
//!
//! ## Architecture
//!
//! The crate is built using:
//! - **thiserror**: Typed error taxonomy for the path and buffer layers
//! - **tracing**: Structured diagnostics for pool traffic and retries
//! - **config**: Layered TOML/env configuration of the shared pool
//! - **serde**: Serializable configuration and metrics snapshots
//!
//! ## Core Components
//!
//! - [`path`]: Format classification, root/directory derivation and escape
//!   prefix transformation
//! - [`buffer`]: Growable native buffers and the shared buffer pool
//! - [`native`]: Call-and-resize invocation adapters for wrapped system
//!   calls
//! - [`config`]: Pool and adapter configuration management
//! - [`error`]: Centralized error handling and native-code translation
//! - [`metrics`]: Buffer-pool usage metrics
//!
//! ## Features
//!
//! - Six-way path format classification with exact root lengths, no
//!   allocation on the success path
//! - Common-root reduction and casing-preserving path reconstruction
//! - Extended-prefix (`\\?\`) add/remove including the UNC spelling
//! - Bounded concurrent buffer pool with capacity-keyed reuse
//! - Grow-and-retry adapters translating native failure codes into a
//!   domain error taxonomy

pub mod buffer;
pub mod config;
pub mod error;
pub mod metrics;
pub mod native;
pub mod path;

#[cfg(test)]
mod tests;
