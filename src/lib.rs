//! # zzroster - Deterministic Player Roster Engine
//!
//! A record-management core for a roster of game characters that provides:
//! - **Validation** of player fields (name, title, birthday, experience)
//! - **Derived progression** (level and experience to next level)
//! - **Filtering** by any combination of optional criteria
//! - **Stable sorting** by a closed set of keys
//! - **Paging** that never fails on out-of-range pages
//! - **Partial updates** that are all-or-nothing
//!
//! ## Core Concepts
//!
//! ### Listing Pipeline
//!
//! ```text
//! [records] → filter(PlayerCriteria) → sort(PlayerOrder) → page(PageRequest)
//! ```
//!
//! ### Write Pipeline
//!
//! ```text
//! NewPlayer   → validate → derive level → PlayerDraft → store.insert
//! PlayerPatch → validate all present fields → merge → derive level → store.save
//! ```
//!
//! Every component except [`PlayerService`] is a pure function over the
//! records it is handed. Transport and persistence stay outside the core,
//! behind [`params`] and [`PlayerStore`].
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use zzroster::*;
//!
//! let service = PlayerService::new(InMemoryPlayerStore::new());
//!
//! for (name, experience) in [("Aragorn", 0), ("Legolas", 5000), ("Gimli", 700)] {
//!     service
//!         .create(NewPlayer {
//!             name: Some(name.into()),
//!             title: Some("Fellowship".into()),
//!             race: Some(Race::Human),
//!             profession: Some(Profession::Warrior),
//!             birthday: Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
//!             banned: None,
//!             experience: Some(experience),
//!         })
//!         .unwrap();
//! }
//!
//! let query = ListQuery::from_params([("minLevel", "1"), ("order", "EXPERIENCE")]).unwrap();
//! let names: Vec<String> = service.list(&query).unwrap().into_iter().map(|p| p.name).collect();
//! assert_eq!(names, vec!["Gimli", "Legolas"]);
//! ```
//!
//! ## Modules
//!
//! - [`player`] - Record, creation and identifier types
//! - [`validate`] - Field validation rules
//! - [`level`] - Level derivation from experience
//! - [`query`] - Filter criteria
//! - [`order`] - Sort keys
//! - [`page`] - Paging
//! - [`mutate`] - Partial updates
//! - [`store`] - Storage collaborator
//! - [`service`] - Orchestration over a store
//! - [`params`] - Request parameter parsing
//! - [`config`] - Configuration
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod level;
pub mod mutate;
pub mod order;
pub mod page;
pub mod params;
pub mod player;
pub mod query;
pub mod service;
pub mod store;
pub mod validate;

// Re-export main types for convenience
pub use config::{ConfigError, RosterConfig};
pub use error::{Field, RosterError, StoreError, ValidationError};
pub use level::Progression;
pub use mutate::PlayerPatch;
pub use order::PlayerOrder;
pub use page::PageRequest;
pub use params::ListQuery;
pub use player::{NewPlayer, PlayerDraft, PlayerId, PlayerRecord, Profession, Race};
pub use query::PlayerCriteria;
pub use service::PlayerService;
pub use store::{InMemoryPlayerStore, PlayerStore};
pub use validate::BirthdayWindow;
