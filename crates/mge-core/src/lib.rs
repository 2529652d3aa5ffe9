//! # mge-core — Foundational Types for the Electoral Geographic Framework
//!
//! Leaf crate of the MGE workspace. It defines the identifiers, the reading
//! level taxonomy, and the immutable geography records that the case-file
//! aggregate in `mge-expediente` composes.
//!
//! ## Key Design Principles
//!
//! 1. **One canonical process id.** Catalogs disagree on whether a process
//!    id is a number or a string. `ProcessId` normalizes both at
//!    construction, so `2024` and `"2024"` are the same value everywhere.
//!
//! 2. **Typed state references.** `PointLocality` names its state field
//!    `state_ref` rather than `state_id`. The `ProcessScoped` trait gives
//!    every record the same typed accessor, so no caller needs to know the
//!    field name except for diagnostics.
//!
//! 3. **Single `GeoLevel` enum.** Five levels, exhaustive `match` everywhere.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mge-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Records are immutable: private fields, accessors only.

pub mod error;
pub mod geography;
pub mod identity;
pub mod level;
pub mod process;

// Re-export primary types for ergonomic imports.
pub use error::MgeError;
pub use geography::{
    Block, ElectoralSection, FederalDistrict, FederativeEntity, LocalDistrict, LocalityBoundary,
    Municipality, MunicipalityScoped, PointLocality, ProcessScoped, POINT_LOCALITY_BLOCK,
};
pub use identity::{ProcessId, StateCode};
pub use level::{GeoLevel, GEO_LEVEL_COUNT};
pub use process::ElectoralProcess;
