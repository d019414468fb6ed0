//! Filter criteria and derived-view computation.
//!
//! # Responsibility
//! - Describe the current sort mode, status filter and search text.
//! - Compute the presentation view from the canonical collection.
//!
//! # Invariants
//! - `compute_view` is pure: it never mutates the canonical collection and
//!   identical inputs yield identical output.
//! - Search, status filter and sort mode are applied as an explicit priority
//!   chain (search > status filter > sort), never assumed exclusive by the
//!   caller.

use crate::model::company::{ApplicationStatus, Company};
use serde::{Deserialize, Serialize};

/// Ordering applied to the derived view when no search is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Newest first. The canonical collection's resting order.
    ByDate,
    /// Pipeline stage ascending.
    ByStatus,
    /// Company name ascending, case-insensitive.
    ByNameAz,
    /// Favorites only, canonical order preserved.
    FavoritesOnly,
}

/// Status restriction applied when no search is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// No restriction.
    #[default]
    All,
    /// Keep only records in the given stage.
    Only(ApplicationStatus),
}

/// The combination of sort mode, status filter and search text defining the
/// derived view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// `None` while a search is active.
    pub sort_mode: Option<SortMode>,
    pub status_filter: StatusFilter,
    /// Case-insensitive prefix match on company name. Empty means no search.
    pub search_text: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            sort_mode: Some(SortMode::ByDate),
            status_filter: StatusFilter::All,
            search_text: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Criteria for an active search: search overrides sort and status.
    pub fn searching(text: impl Into<String>) -> Self {
        Self {
            sort_mode: None,
            status_filter: StatusFilter::All,
            search_text: text.into(),
        }
    }

    /// Criteria for a sort-button press: sort clears status and search.
    pub fn sorted(mode: SortMode) -> Self {
        Self {
            sort_mode: Some(mode),
            status_filter: StatusFilter::All,
            search_text: String::new(),
        }
    }

    /// Criteria for a status-picker selection: clears sort and search.
    pub fn status_only(status: ApplicationStatus) -> Self {
        Self {
            sort_mode: None,
            status_filter: StatusFilter::Only(status),
            search_text: String::new(),
        }
    }

    /// Whether a search is currently active.
    pub fn is_searching(&self) -> bool {
        !self.search_text.is_empty()
    }
}

/// Computes the derived view from the canonical collection.
///
/// The input is expected in canonical order (date added descending); `ByDate`
/// and the filter-only branches preserve it. All sorts are stable.
pub fn compute_view(companies: &[Company], criteria: &FilterCriteria) -> Vec<Company> {
    if criteria.is_searching() {
        let needle = criteria.search_text.to_lowercase();
        return companies
            .iter()
            .filter(|company| company.company_name.to_lowercase().starts_with(&needle))
            .cloned()
            .collect();
    }

    let mut view: Vec<Company> = match criteria.status_filter {
        StatusFilter::All => companies.to_vec(),
        StatusFilter::Only(status) => companies
            .iter()
            .filter(|company| company.application_status == status)
            .cloned()
            .collect(),
    };

    match criteria.sort_mode {
        None | Some(SortMode::ByDate) => {}
        Some(SortMode::ByStatus) => {
            view.sort_by_key(|company| company.application_status);
        }
        Some(SortMode::ByNameAz) => {
            view.sort_by_key(|company| company.company_name.to_lowercase());
        }
        Some(SortMode::FavoritesOnly) => {
            view.retain(|company| company.is_favorite);
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::{compute_view, FilterCriteria, SortMode, StatusFilter};
    use crate::model::company::{ApplicationStatus, Company};

    fn sample() -> Vec<Company> {
        let mut zenith = Company::new("Zenith", "PM", ApplicationStatus::Offer, 300);
        zenith.is_favorite = true;
        vec![
            zenith,
            Company::new("google inc", "SRE", ApplicationStatus::PhoneScreen, 200),
            Company::new("Acme", "SWE", ApplicationStatus::Applied, 100),
        ]
    }

    #[test]
    fn default_criteria_passes_canonical_order_through() {
        let companies = sample();
        let view = compute_view(&companies, &FilterCriteria::default());
        assert_eq!(view, companies);
    }

    #[test]
    fn search_is_case_insensitive_prefix_match() {
        let companies = sample();
        let view = compute_view(&companies, &FilterCriteria::searching("Go"));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].company_name, "google inc");

        let none = compute_view(&companies, &FilterCriteria::searching("oogle"));
        assert!(none.is_empty());
    }

    #[test]
    fn search_overrides_status_filter_and_sort() {
        let companies = sample();
        let criteria = FilterCriteria {
            sort_mode: Some(SortMode::ByNameAz),
            status_filter: StatusFilter::Only(ApplicationStatus::Offer),
            search_text: "a".to_string(),
        };
        let view = compute_view(&companies, &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].company_name, "Acme");
    }

    #[test]
    fn status_filter_keeps_only_matching_stage() {
        let companies = sample();
        let view = compute_view(
            &companies,
            &FilterCriteria::status_only(ApplicationStatus::Offer),
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].company_name, "Zenith");
    }

    #[test]
    fn by_status_sorts_by_pipeline_order() {
        let companies = sample();
        let view = compute_view(&companies, &FilterCriteria::sorted(SortMode::ByStatus));
        let stages: Vec<_> = view
            .iter()
            .map(|company| company.application_status)
            .collect();
        assert_eq!(
            stages,
            vec![
                ApplicationStatus::Applied,
                ApplicationStatus::PhoneScreen,
                ApplicationStatus::Offer,
            ]
        );
    }

    #[test]
    fn by_name_sort_ignores_case() {
        let companies = sample();
        let view = compute_view(&companies, &FilterCriteria::sorted(SortMode::ByNameAz));
        let names: Vec<_> = view
            .iter()
            .map(|company| company.company_name.as_str())
            .collect();
        assert_eq!(names, vec!["Acme", "google inc", "Zenith"]);
    }

    #[test]
    fn favorites_only_retains_canonical_order() {
        let companies = sample();
        let view = compute_view(&companies, &FilterCriteria::sorted(SortMode::FavoritesOnly));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].company_name, "Zenith");
    }

    #[test]
    fn compute_view_is_pure_and_repeatable() {
        let companies = sample();
        let untouched = companies.clone();
        let criteria = FilterCriteria::sorted(SortMode::ByNameAz);
        let first = compute_view(&companies, &criteria);
        let second = compute_view(&companies, &criteria);
        assert_eq!(first, second);
        assert_eq!(companies, untouched);
    }
}
