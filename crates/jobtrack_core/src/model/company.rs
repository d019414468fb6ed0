//! Company domain model.
//!
//! # Responsibility
//! - Define the canonical application record tracked by the list store.
//! - Provide creation helpers that assign stable identity.
//!
//! # Invariants
//! - `id` is stable, unique within a collection, and never reused.
//! - `date_added` is set at creation and immutable thereafter. It is not an
//!   identity key: two records may share the same timestamp.
//! - `company_name` is non-empty for every persisted record.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a tracked company application.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CompanyId = Uuid;

/// Stage of an application, ordered by pipeline progress.
///
/// The declaration order is the total order used for by-status sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    PhoneScreen,
    OnSite,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    /// Display name shown by presentation layers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::PhoneScreen => "Phone Screen",
            Self::OnSite => "On Site",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
        }
    }

    /// All statuses in pipeline order, for pickers and filters.
    pub fn all() -> &'static [ApplicationStatus] {
        &[
            Self::Applied,
            Self::PhoneScreen,
            Self::OnSite,
            Self::Offer,
            Self::Rejected,
        ]
    }
}

/// Validation failures for company records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyValidationError {
    /// `company_name` is empty or whitespace-only.
    EmptyCompanyName,
}

impl Display for CompanyValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCompanyName => write!(f, "company name must not be empty"),
        }
    }
}

impl Error for CompanyValidationError {}

/// Canonical record for one tracked job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Stable global ID used for every lookup, update and delete.
    pub id: CompanyId,
    /// Name of the company applied to. Never empty.
    pub company_name: String,
    /// Position applied for. May be empty.
    pub job_position: String,
    /// Current pipeline stage.
    pub application_status: ApplicationStatus,
    /// Starred by the user.
    pub is_favorite: bool,
    /// Unix epoch milliseconds at creation. Immutable.
    pub date_added: i64,
}

impl Company {
    /// Creates a new record with a generated stable ID.
    ///
    /// # Invariants
    /// - `is_favorite` starts as `false`.
    pub fn new(
        company_name: impl Into<String>,
        job_position: impl Into<String>,
        application_status: ApplicationStatus,
        date_added: i64,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            company_name,
            job_position,
            application_status,
            date_added,
        )
    }

    /// Creates a record with a caller-provided stable ID.
    ///
    /// Used by load paths where identity already exists in storage.
    pub fn with_id(
        id: CompanyId,
        company_name: impl Into<String>,
        job_position: impl Into<String>,
        application_status: ApplicationStatus,
        date_added: i64,
    ) -> Self {
        Self {
            id,
            company_name: company_name.into(),
            job_position: job_position.into(),
            application_status,
            is_favorite: false,
            date_added,
        }
    }

    /// Checks record-level invariants before persistence.
    ///
    /// # Errors
    /// - `EmptyCompanyName` when `company_name` is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), CompanyValidationError> {
        if self.company_name.trim().is_empty() {
            return Err(CompanyValidationError::EmptyCompanyName);
        }
        Ok(())
    }
}
