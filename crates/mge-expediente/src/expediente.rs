//! # MGE Case File (Expediente)
//!
//! The aggregate that bundles a coherent slice of the Electoral Geographic
//! Framework at one declared reading level.
//!
//! ## Construction
//!
//! The only way to obtain an [`ExpedienteMge`] is [`ExpedienteBuilder::build`]
//! (or [`crate::ExpedienteManifest::build`], which delegates to it). `build`
//! assembles the aggregate, runs coherence validation, then level
//! validation, and returns the aggregate only if both pass. A rejected
//! aggregate is dropped before the caller can observe it.
//!
//! ```text
//! ExpedienteMge::builder(process, state, level)
//!     .federal_districts(..) .local_districts(..) .municipalities(..)
//!     .sections(..) .locality_boundaries(..) .point_localities(..) .blocks(..)
//!     .build()  ──▶ coherence ──▶ level rules ──▶ Ok(ExpedienteMge)
//! ```
//!
//! ## Invariants
//!
//! After construction, and for the aggregate's whole lifetime (it exposes no
//! mutation):
//!
//! - every sub-entity has the aggregate's process id and state code;
//! - the collections satisfy the rules of the declared level.

use serde::Serialize;

use mge_core::{
    Block, ElectoralProcess, ElectoralSection, FederalDistrict, FederativeEntity, GeoLevel,
    LocalDistrict, LocalityBoundary, Municipality, PointLocality,
};

use crate::coherence::validate_coherence;
use crate::error::ExpedienteError;
use crate::level_rules::validate_level;

// ─── Aggregate ───────────────────────────────────────────────────────

/// A validated MGE case file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpedienteMge {
    process: ElectoralProcess,
    state: FederativeEntity,
    level: GeoLevel,
    federal_districts: Vec<FederalDistrict>,
    local_districts: Vec<LocalDistrict>,
    municipalities: Vec<Municipality>,
    sections: Vec<ElectoralSection>,
    locality_boundaries: Vec<LocalityBoundary>,
    point_localities: Vec<PointLocality>,
    blocks: Vec<Block>,
}

impl ExpedienteMge {
    /// Start assembling a case file. All collections default to empty.
    pub fn builder(
        process: ElectoralProcess,
        state: FederativeEntity,
        level: GeoLevel,
    ) -> ExpedienteBuilder {
        ExpedienteBuilder {
            inner: ExpedienteMge {
                process,
                state,
                level,
                federal_districts: Vec::new(),
                local_districts: Vec::new(),
                municipalities: Vec::new(),
                sections: Vec::new(),
                locality_boundaries: Vec::new(),
                point_localities: Vec::new(),
                blocks: Vec::new(),
            },
        }
    }

    /// Composite identity: `<process>:<state, 2 digits>:<level>`,
    /// e.g. `2024:30:federal-district`.
    pub fn id(&self) -> String {
        format!("{}:{}:{}", self.process.id(), self.state.code(), self.level)
    }

    /// One-line human-readable summary with per-collection counts.
    pub fn description(&self) -> String {
        let c = self.counts();
        format!(
            "MGE case file [{}] {} / {}. Level: {}. DF: {}, DL: {}, Mun: {}, Sec: {}, Loc: {}, Blocks: {}",
            self.id(),
            self.process,
            self.state,
            self.level,
            c.federal_districts,
            c.local_districts,
            c.municipalities,
            c.sections,
            c.localities(),
            c.blocks
        )
    }

    pub fn process(&self) -> &ElectoralProcess {
        &self.process
    }

    pub fn state(&self) -> &FederativeEntity {
        &self.state
    }

    pub fn level(&self) -> GeoLevel {
        self.level
    }

    pub fn federal_districts(&self) -> &[FederalDistrict] {
        &self.federal_districts
    }

    pub fn local_districts(&self) -> &[LocalDistrict] {
        &self.local_districts
    }

    pub fn municipalities(&self) -> &[Municipality] {
        &self.municipalities
    }

    pub fn sections(&self) -> &[ElectoralSection] {
        &self.sections
    }

    pub fn locality_boundaries(&self) -> &[LocalityBoundary] {
        &self.locality_boundaries
    }

    pub fn point_localities(&self) -> &[PointLocality] {
        &self.point_localities
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of entries in each collection.
    pub fn counts(&self) -> ExpedienteCounts {
        ExpedienteCounts {
            federal_districts: self.federal_districts.len(),
            local_districts: self.local_districts.len(),
            municipalities: self.municipalities.len(),
            sections: self.sections.len(),
            locality_boundaries: self.locality_boundaries.len(),
            point_localities: self.point_localities.len(),
            blocks: self.blocks.len(),
        }
    }

    /// Whether the case file holds no sub-entities at all.
    pub fn is_empty(&self) -> bool {
        self.counts().total() == 0
    }

    /// The entity the declared level reads the case file through.
    ///
    /// Level validation guarantees the focal collection holds exactly one
    /// entry for every level below `state`.
    pub fn focus(&self) -> Focus<'_> {
        match self.level {
            GeoLevel::State => Focus::State(&self.state),
            GeoLevel::FederalDistrict => self
                .federal_districts
                .first()
                .map_or(Focus::State(&self.state), Focus::FederalDistrict),
            GeoLevel::LocalDistrict => self
                .local_districts
                .first()
                .map_or(Focus::State(&self.state), Focus::LocalDistrict),
            GeoLevel::Municipality => self
                .municipalities
                .first()
                .map_or(Focus::State(&self.state), Focus::Municipality),
            GeoLevel::Precinct => self
                .sections
                .first()
                .map_or(Focus::State(&self.state), Focus::Precinct),
        }
    }
}

impl std::fmt::Display for ExpedienteMge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

/// The focal entity of a case file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus<'a> {
    State(&'a FederativeEntity),
    FederalDistrict(&'a FederalDistrict),
    LocalDistrict(&'a LocalDistrict),
    Municipality(&'a Municipality),
    Precinct(&'a ElectoralSection),
}

impl std::fmt::Display for Focus<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::State(e) => write!(f, "{e}"),
            Self::FederalDistrict(d) => write!(f, "{d}"),
            Self::LocalDistrict(d) => write!(f, "{d}"),
            Self::Municipality(m) => write!(f, "{m}"),
            Self::Precinct(s) => write!(f, "{s}"),
        }
    }
}

/// Per-collection entry counts of a case file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExpedienteCounts {
    pub federal_districts: usize,
    pub local_districts: usize,
    pub municipalities: usize,
    pub sections: usize,
    pub locality_boundaries: usize,
    pub point_localities: usize,
    pub blocks: usize,
}

impl ExpedienteCounts {
    /// Boundary and point localities together.
    pub fn localities(&self) -> usize {
        self.locality_boundaries + self.point_localities
    }

    pub fn total(&self) -> usize {
        self.federal_districts
            + self.local_districts
            + self.municipalities
            + self.sections
            + self.localities()
            + self.blocks
    }
}

// ─── Builder ─────────────────────────────────────────────────────────

/// Collects the inputs of a case file. Nothing is validated until
/// [`ExpedienteBuilder::build`].
#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until .build() is called"]
pub struct ExpedienteBuilder {
    inner: ExpedienteMge,
}

impl ExpedienteBuilder {
    pub fn federal_districts(mut self, items: impl IntoIterator<Item = FederalDistrict>) -> Self {
        self.inner.federal_districts = items.into_iter().collect();
        self
    }

    pub fn local_districts(mut self, items: impl IntoIterator<Item = LocalDistrict>) -> Self {
        self.inner.local_districts = items.into_iter().collect();
        self
    }

    pub fn municipalities(mut self, items: impl IntoIterator<Item = Municipality>) -> Self {
        self.inner.municipalities = items.into_iter().collect();
        self
    }

    pub fn sections(mut self, items: impl IntoIterator<Item = ElectoralSection>) -> Self {
        self.inner.sections = items.into_iter().collect();
        self
    }

    pub fn locality_boundaries(
        mut self,
        items: impl IntoIterator<Item = LocalityBoundary>,
    ) -> Self {
        self.inner.locality_boundaries = items.into_iter().collect();
        self
    }

    pub fn point_localities(mut self, items: impl IntoIterator<Item = PointLocality>) -> Self {
        self.inner.point_localities = items.into_iter().collect();
        self
    }

    pub fn blocks(mut self, items: impl IntoIterator<Item = Block>) -> Self {
        self.inner.blocks = items.into_iter().collect();
        self
    }

    /// Validate and produce the case file.
    ///
    /// Coherence is checked before level rules; the first violation is
    /// returned as [`ExpedienteError::Inconsistency`].
    pub fn build(self) -> Result<ExpedienteMge, ExpedienteError> {
        let expediente = self.inner;
        let outcome = validate_coherence(&expediente).and_then(|()| validate_level(&expediente));

        match outcome {
            Ok(()) => {
                tracing::debug!(
                    expediente = %expediente.id(),
                    entries = expediente.counts().total(),
                    "MGE case file assembled"
                );
                Ok(expediente)
            }
            Err(err) => {
                tracing::warn!(
                    expediente = %expediente.id(),
                    rule = ?err.rule(),
                    error = %err,
                    "MGE case file rejected"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn process() -> ElectoralProcess {
        ElectoralProcess::new(
            "2024",
            "PE2024",
            "Proceso Electoral 2024",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
        .unwrap()
    }

    fn veracruz() -> FederativeEntity {
        FederativeEntity::new(30, "VERACRUZ DE IGNACIO DE LA LLAVE", "Veracruz", "VR", "VER")
    }

    #[test]
    fn test_empty_state_case_file() {
        let exp = ExpedienteMge::builder(process(), veracruz(), GeoLevel::State)
            .build()
            .unwrap();
        assert!(exp.is_empty());
        assert_eq!(exp.id(), "2024:30:state");
        assert_eq!(exp.focus(), Focus::State(exp.state()));
    }

    #[test]
    fn test_identity_pads_state_code() {
        let oaxaca = FederativeEntity::new(20, "OAXACA", "Oaxaca", "OA", "OAX");
        let exp = ExpedienteMge::builder(process(), oaxaca, GeoLevel::State)
            .build()
            .unwrap();
        assert_eq!(exp.id(), "2024:20:state");

        let colima = FederativeEntity::new(6, "COLIMA", "Colima", "CL", "COL");
        let exp = ExpedienteMge::builder(process(), colima, GeoLevel::State)
            .build()
            .unwrap();
        assert_eq!(exp.id(), "2024:06:state");
    }

    #[test]
    fn test_description_reports_counts() {
        let exp = ExpedienteMge::builder(process(), veracruz(), GeoLevel::Municipality)
            .municipalities([Municipality::new(1, "2024", 30, 1, "Xalapa", "Xalapa")])
            .locality_boundaries([LocalityBoundary::new(1, "2024", 30, 1, 25, "Las Trancas")])
            .point_localities([PointLocality::new(2, "2024", 30, 1, 9999, "Punto")])
            .blocks([Block::new(1, "2024", 30, 1, 25, 1234, 1)])
            .build()
            .unwrap();
        assert_eq!(
            exp.description(),
            "MGE case file [2024:30:municipality] PE2024 (2024) / 30 VERACRUZ. \
             Level: municipality. DF: 0, DL: 0, Mun: 1, Sec: 0, Loc: 2, Blocks: 1"
        );
        assert_eq!(exp.to_string(), exp.description());
    }

    #[test]
    fn test_focus_for_precinct() {
        let exp = ExpedienteMge::builder(process(), veracruz(), GeoLevel::Precinct)
            .sections([ElectoralSection::new(1, "2024", 30, 1, 1, 1, 1234)])
            .build()
            .unwrap();
        assert_eq!(exp.focus().to_string(), "30 1234");
        assert!(matches!(exp.focus(), Focus::Precinct(s) if s.seccion() == 1234));
    }

    #[test]
    fn test_counts_total() {
        let counts = ExpedienteCounts {
            federal_districts: 1,
            local_districts: 2,
            municipalities: 3,
            sections: 4,
            locality_boundaries: 5,
            point_localities: 6,
            blocks: 7,
        };
        assert_eq!(counts.localities(), 11);
        assert_eq!(counts.total(), 28);
    }

    #[test]
    fn test_serializes_valid_case_file() {
        let exp = ExpedienteMge::builder(process(), veracruz(), GeoLevel::FederalDistrict)
            .federal_districts([FederalDistrict::new(1, "2024", 30, 1, "Xalapa")])
            .build()
            .unwrap();
        let json = serde_json::to_value(&exp).unwrap();
        assert_eq!(json["level"], "federal-district");
        assert_eq!(json["process"]["id"], "2024");
        assert_eq!(json["federal_districts"].as_array().unwrap().len(), 1);
    }
}
