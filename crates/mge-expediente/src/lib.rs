//! # mge-expediente — The MGE Case-File Aggregate
//!
//! An `ExpedienteMge` groups a consistent slice of the Electoral Geographic
//! Framework for one electoral process and one state, read at a single
//! declared [`GeoLevel`]. Construction is all-or-nothing: the builder either
//! returns a fully validated, immutable aggregate or an
//! [`ExpedienteError::Inconsistency`].
//!
//! ## Validation Order
//!
//! 1. **Coherence** (`coherence.rs`): process id and state code of every
//!    sub-entity, collection by collection: federal districts, local
//!    districts, municipalities, sections, locality boundaries, point
//!    localities, blocks.
//! 2. **Level rules** (`level_rules.rs`): district coexistence guard, then
//!    cardinality and forbidden collections, then cross-references to the
//!    focal entity.
//!
//! The first violation is reported; nothing after it runs.
//!
//! ## Configuration
//!
//! [`ExpedienteManifest`] is the declarative (YAML/JSON) form of the
//! builder's inputs. It carries no validation of its own beyond field
//! types; `ExpedienteManifest::build` goes through the same checks.

mod coherence;
pub mod error;
pub mod expediente;
mod level_rules;
pub mod manifest;

pub use error::{ExpedienteError, InconsistencyRule};
pub use expediente::{ExpedienteBuilder, ExpedienteCounts, ExpedienteMge, Focus};
pub use manifest::ExpedienteManifest;

pub use mge_core::GeoLevel;
