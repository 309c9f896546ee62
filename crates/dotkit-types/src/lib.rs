//! Foundation types for dotkit.
//!
//! This crate contains the platform-agnostic types shared by all dotkit
//! crates: colors, the render backend trait, and error types. Nothing here
//! touches a concrete rendering API; hosts bring their own backend.

pub mod backend;
pub mod color;
pub mod error;
