//! Storage gateway abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable load/save/delete contract the list store depends on.
//! - Isolate SQLite query details from list-state orchestration.
//!
//! # Invariants
//! - Gateway writes must enforce `Company::validate()` before persistence.
//! - Gateway APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod company_repo;
