//! List state synchronization engine.
//!
//! # Responsibility
//! - Own the canonical in-memory collection of company records.
//! - Derive the filtered/sorted/searched view presented to callers.
//! - Persist every mutation through the injected storage gateway.
//!
//! # Invariants
//! - The canonical collection never holds two records with the same id.
//! - The canonical collection rests sorted by `date_added` descending.
//! - The derived view is recomputed from the canonical collection, never
//!   mutated independently.
//! - In-memory mutations are not rolled back when the storage write fails;
//!   the error is surfaced and the local collection stays authoritative
//!   (documented optimistic-local-write policy).

use crate::model::company::{ApplicationStatus, Company, CompanyId};
use crate::model::filter::{compute_view, FilterCriteria, SortMode};
use crate::repo::company_repo::{CompanyStore, RepoError, RepoResult};
use log::{error, info};

/// Single source of truth for company records and their presentation order.
///
/// All operations run to completion synchronously; callers re-render from
/// [`ListStore::view`] after every intent.
pub struct ListStore<S: CompanyStore> {
    gateway: S,
    companies: Vec<Company>,
    criteria: FilterCriteria,
    view: Vec<Company>,
}

impl<S: CompanyStore> ListStore<S> {
    /// Creates an empty store over the given gateway.
    ///
    /// Call [`ListStore::load_all`] before serving intents.
    pub fn new(gateway: S) -> Self {
        Self {
            gateway,
            companies: Vec::new(),
            criteria: FilterCriteria::default(),
            view: Vec::new(),
        }
    }

    /// Fetches all records from the gateway into the canonical collection.
    ///
    /// Applies the default newest-first order and recomputes the view.
    /// On storage failure the collection stays empty and the error
    /// propagates; startup cannot proceed on a partial load.
    pub fn load_all(&mut self) -> RepoResult<()> {
        match self.gateway.load_all() {
            Ok(companies) => {
                self.companies = companies;
                self.sort_canonical();
                self.recompute_view();
                info!(
                    "event=list_load module=store status=ok count={}",
                    self.companies.len()
                );
                Ok(())
            }
            Err(err) => {
                self.companies.clear();
                self.view.clear();
                error!("event=list_load module=store status=error error={err}");
                Err(err)
            }
        }
    }

    /// Adds a new record and resets the view to the default presentation.
    ///
    /// The record is appended and persisted (`insert` + `commit`); the
    /// criteria are forced back to defaults so the new entry is visible.
    /// On storage failure the in-memory record is kept and the error
    /// propagates.
    pub fn add(
        &mut self,
        company_name: impl Into<String>,
        job_position: impl Into<String>,
        application_status: ApplicationStatus,
        date_added: i64,
    ) -> RepoResult<Company> {
        let company = Company::new(company_name, job_position, application_status, date_added);
        company.validate()?;

        self.companies.push(company.clone());
        self.sort_canonical();
        self.criteria = FilterCriteria::default();
        self.recompute_view();

        self.persist("list_add", |gateway| {
            gateway.insert(&company)?;
            gateway.commit()
        })?;

        Ok(company)
    }

    /// Replaces the mutable fields of the record with the same id.
    ///
    /// `date_added` is immutable and keeps its canonical value even if the
    /// caller passes a different one.
    pub fn edit(&mut self, company: &Company) -> RepoResult<()> {
        company.validate()?;

        let entry = self
            .companies
            .iter_mut()
            .find(|candidate| candidate.id == company.id)
            .ok_or(RepoError::NotFound(company.id))?;

        entry.company_name = company.company_name.clone();
        entry.job_position = company.job_position.clone();
        entry.application_status = company.application_status;
        entry.is_favorite = company.is_favorite;
        let persisted = entry.clone();

        self.sort_canonical();
        self.recompute_view();

        self.persist("list_edit", |gateway| {
            gateway.update(&persisted)?;
            gateway.commit()
        })
    }

    /// Removes the record with the given id from collection and storage.
    pub fn delete(&mut self, id: CompanyId) -> RepoResult<()> {
        let position = self
            .companies
            .iter()
            .position(|candidate| candidate.id == id)
            .ok_or(RepoError::NotFound(id))?;

        self.companies.remove(position);
        self.recompute_view();

        self.persist("list_delete", |gateway| {
            gateway.remove(id)?;
            gateway.commit()
        })
    }

    /// Sets the favorite flag on the record with the given id.
    ///
    /// Never re-sorts. The view is recomputed only under the favorites
    /// presentation, where an un-favorited record must drop out.
    pub fn set_favorite(&mut self, id: CompanyId, value: bool) -> RepoResult<()> {
        let entry = self
            .companies
            .iter_mut()
            .find(|candidate| candidate.id == id)
            .ok_or(RepoError::NotFound(id))?;

        entry.is_favorite = value;
        let persisted = entry.clone();

        if self.criteria.sort_mode == Some(SortMode::FavoritesOnly) {
            self.recompute_view();
        } else if let Some(shown) = self.view.iter_mut().find(|candidate| candidate.id == id) {
            shown.is_favorite = value;
        }

        self.persist("list_favorite", |gateway| {
            gateway.update(&persisted)?;
            gateway.commit()
        })
    }

    /// Replaces the filter criteria and recomputes the view.
    ///
    /// Pure with respect to the canonical collection.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) -> &[Company] {
        self.criteria = criteria;
        self.recompute_view();
        &self.view
    }

    /// Starts or refines a search, overriding sort mode and status filter.
    pub fn search(&mut self, text: impl Into<String>) -> &[Company] {
        self.apply_filter(FilterCriteria::searching(text))
    }

    /// Clears the search and returns to the default presentation.
    pub fn clear_search(&mut self) -> &[Company] {
        self.apply_filter(FilterCriteria::default())
    }

    /// Read-only snapshot of the derived view, in presentation order.
    pub fn view(&self) -> &[Company] {
        &self.view
    }

    /// The criteria currently shaping the view.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Number of records in the canonical collection.
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Read-only snapshot of the canonical collection.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    fn sort_canonical(&mut self) {
        // Stable sort: records sharing a timestamp keep insertion order.
        self.companies
            .sort_by(|a, b| b.date_added.cmp(&a.date_added));
    }

    fn recompute_view(&mut self) {
        self.view = compute_view(&self.companies, &self.criteria);
    }

    fn persist(
        &self,
        event: &'static str,
        write: impl FnOnce(&S) -> RepoResult<()>,
    ) -> RepoResult<()> {
        match write(&self.gateway) {
            Ok(()) => {
                info!("event={event} module=store status=ok count={}", self.companies.len());
                Ok(())
            }
            Err(err) => {
                // Local collection stays mutated; storage and memory may
                // diverge until the next successful write.
                error!("event={event} module=store status=error error={err}");
                Err(err)
            }
        }
    }
}
