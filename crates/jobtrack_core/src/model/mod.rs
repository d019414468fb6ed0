//! Domain model for the job-application tracker.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep view-shaping policy (filter/sort/search) next to the data it reads.
//!
//! # Invariants
//! - Every record is identified by a stable `CompanyId`; `date_added` is
//!   never an identity key.

pub mod company;
pub mod filter;
