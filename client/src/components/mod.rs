//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_bridge` hosts the core bridge and provides auth state through Leptos
//! context; the remaining components only read that context.

pub mod auth_bridge;
pub mod auth_buttons;
