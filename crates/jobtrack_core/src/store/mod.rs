//! List-state orchestration.
//!
//! # Responsibility
//! - Keep the canonical collection and the derived view consistent across
//!   mutations.
//! - Keep presentation layers decoupled from storage details.

pub mod list_store;
