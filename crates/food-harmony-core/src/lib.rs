//! Food Harmony Domain Core
//!
//! Layered architecture:
//! - domain: Core entities and drafts
//! - store: In-memory preference collections (CRUD)
//! - forms: Add/edit form session state machines
//! - discovery: Mocked nearby-restaurant search session
//!
//! No UI or WASM dependency; everything here runs under plain `cargo test`.
//! All state is owned explicitly and passed by reference to command methods,
//! so the crate can be driven without a rendering harness.

pub mod discovery;
pub mod domain;
pub mod forms;
pub mod store;
