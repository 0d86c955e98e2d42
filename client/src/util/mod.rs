//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing and environment concerns out of page and
//! component logic to improve reuse and testability.

pub mod auth;
