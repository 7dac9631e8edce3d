//! Wardbook - hospital-administration record store.
//!
//! This crate models a small hospital registry: doctors, nurses, patients,
//! and wards, linked by one-to-many and many-to-many relationships and
//! persisted in SQLite, with traversal queries over those links.
//!
//! # Architecture
//!
//! Storage access goes through per-entity repository traits so the SQLite
//! layer stays swappable and testable:
//!
//! - **`domain`** - Entity types and typed identifiers
//! - **`port::store`** - Repository traits (`DoctorStore`, `NurseStore`,
//!   `PatientStore`, `WardStore`, `RecordStore`)
//! - **`adapter::sqlite`** - Diesel-backed implementation, connection
//!   pooling, and embedded migrations
//! - **`seed`** - Randomized clear-and-reseed through the store traits
//! - **`cli`** - Subcommands wrapping the query operations
//! - **`config`** - TOML configuration and logging setup
//! - **`error`** - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use wardbook::adapter::sqlite::{create_pool, run_migrations, SqliteRegistry};
//! use wardbook::domain::NewDoctor;
//! use wardbook::port::store::DoctorStore;
//!
//! let pool = create_pool("wardbook.db").unwrap();
//! run_migrations(&pool).unwrap();
//! let store = SqliteRegistry::new(pool);
//!
//! let doctor = store
//!     .insert_doctor(NewDoctor::new("Ada Castillo", "Cardiology"))
//!     .unwrap();
//! assert!(store.doctor(doctor.id).unwrap().is_some());
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod seed;
