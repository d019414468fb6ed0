//! Core list-state engine for the JobTrack application tracker.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::company::{
    ApplicationStatus, Company, CompanyId, CompanyValidationError,
};
pub use model::filter::{compute_view, FilterCriteria, SortMode, StatusFilter};
pub use repo::company_repo::{
    CompanyStore, RepoError, RepoResult, SqliteCompanyStore,
};
pub use store::list_store::ListStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
