//! Player service.
//!
//! Wires the pure components to a [`PlayerStore`]:
//!
//! ```text
//! list:   store.find_all → query::filter → order::sort → page::page
//! create: PlayerDraft::from_new (validate + derive) → store.insert
//! update: store.find_by_id → mutate::apply_partial_update_in → store.save
//! ```
//!
//! The service keeps no records between calls.

use crate::config::{ConfigError, RosterConfig};
use crate::error::RosterError;
use crate::mutate::{self, PlayerPatch};
use crate::order;
use crate::page;
use crate::params::ListQuery;
use crate::player::{NewPlayer, PlayerDraft, PlayerId, PlayerRecord};
use crate::query::{self, PlayerCriteria};
use crate::store::PlayerStore;
use crate::validate::BirthdayWindow;

/// Entry point for roster operations.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use zzroster::*;
///
/// let service = PlayerService::new(InMemoryPlayerStore::new());
/// let created = service
///     .create(NewPlayer {
///         name: Some("Aragorn".into()),
///         title: Some("King".into()),
///         race: Some(Race::Human),
///         profession: Some(Profession::Warrior),
///         birthday: Some(Utc.with_ymd_and_hms(2010, 3, 1, 0, 0, 0).unwrap()),
///         banned: None,
///         experience: Some(0),
///     })
///     .unwrap();
///
/// assert!(!created.banned);
/// assert_eq!(created.until_next_level, 100);
/// assert_eq!(service.count(&PlayerCriteria::new()).unwrap(), 1);
/// ```
pub struct PlayerService<S> {
    store: S,
    config: RosterConfig,
    window: BirthdayWindow,
}

impl<S: PlayerStore> PlayerService<S> {
    /// Service with the default configuration.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: RosterConfig::default(),
            window: BirthdayWindow::utc(),
        }
    }

    /// Service with an explicit configuration.
    pub fn with_config(store: S, config: RosterConfig) -> Result<Self, ConfigError> {
        let window = config.birthday_window()?;
        Ok(Self {
            store,
            config,
            window,
        })
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Filter, sort and page the stored players.
    pub fn list(&self, query: &ListQuery) -> Result<Vec<PlayerRecord>, RosterError> {
        let records = self.store.find_all()?;
        let total = records.len();
        let matching = query::filter(records, &query.criteria);
        let sorted = order::sort(matching, query.order);
        let page_number = query.page.number();
        let page_size = query.page.size_or(self.config.default_page_size);
        tracing::debug!(
            total,
            matching = sorted.len(),
            page_number,
            page_size,
            "Listing players"
        );
        Ok(page::page(sorted, page_number, page_size))
    }

    /// Number of stored players matching `criteria`, ignoring paging.
    pub fn count(&self, criteria: &PlayerCriteria) -> Result<usize, RosterError> {
        let records = self.store.find_all()?;
        Ok(query::count(&records, criteria))
    }

    pub fn get(&self, id: PlayerId) -> Result<PlayerRecord, RosterError> {
        self.store
            .find_by_id(id)?
            .ok_or(RosterError::NotFound(id))
    }

    /// Validate, derive and store a new player.
    pub fn create(&self, new: NewPlayer) -> Result<PlayerRecord, RosterError> {
        let draft = PlayerDraft::from_new(new, &self.window).map_err(|e| {
            tracing::warn!(error = %e, "Rejected player creation");
            e
        })?;
        let record = self.store.insert(draft)?;
        tracing::info!(id = %record.id, name = %record.name, "Created player");
        Ok(record)
    }

    /// Merge `patch` into the stored player and persist the result.
    ///
    /// On a validation failure nothing is written.
    pub fn update(&self, id: PlayerId, patch: &PlayerPatch) -> Result<PlayerRecord, RosterError> {
        let existing = self.get(id)?;
        let updated = mutate::apply_partial_update_in(&existing, patch, &self.window).map_err(|e| {
            tracing::warn!(%id, error = %e, "Rejected player update");
            e
        })?;
        let saved = self.store.save(updated)?;
        tracing::debug!(%id, "Updated player");
        Ok(saved)
    }

    pub fn delete(&self, id: PlayerId) -> Result<(), RosterError> {
        let existing = self.get(id)?;
        self.store.delete(existing.id)?;
        tracing::info!(%id, "Deleted player");
        Ok(())
    }
}
