//! # Electoral Geography Records
//!
//! The immutable leaf records of the MGE hierarchy: federative entity,
//! federal and local districts, municipality, electoral section, locality
//! boundary, point locality, and block.
//!
//! Records carry no behavior beyond accessors and their `Display` rendering.
//! Uniqueness constraints (e.g. `(state, distrito)` within a process) are
//! the catalog's responsibility, not checked here.
//!
//! Every record below the state implements [`ProcessScoped`], the typed
//! view the case-file coherence check reads. [`PointLocality`] stores its
//! state and municipality under different field names (`state_ref`,
//! `municipio_ref`); it implements the trait by reading those fields
//! directly.

use serde::{Deserialize, Serialize};

use crate::identity::{ProcessId, StateCode};

/// Block number reserved for point localities: a point locality is at the
/// same time the block where its registered citizens are referenced.
pub const POINT_LOCALITY_BLOCK: u32 = 9999;

/// A record that belongs to one electoral process and one state.
pub trait ProcessScoped {
    /// Entity kind used in diagnostics.
    const KIND: &'static str;
    /// Name of the field holding the state reference.
    const STATE_FIELD: &'static str = "state_id";

    fn process_id(&self) -> &ProcessId;
    fn state_code(&self) -> StateCode;
}

/// A record that references a municipality within its state.
pub trait MunicipalityScoped {
    /// Name of the field holding the municipality reference.
    const MUNICIPIO_FIELD: &'static str = "municipio_id";

    fn municipio_ref(&self) -> u32;
}

// ─── Federative Entity ───────────────────────────────────────────────

/// A federative entity (state) and its names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FederativeEntity {
    code: StateCode,
    /// e.g. `VERACRUZ DE IGNACIO DE LA LLAVE`
    name: String,
    /// e.g. `Veracruz`
    short_name: String,
    /// e.g. `VR`
    key: String,
    /// e.g. `VER`
    abbreviation: String,
}

impl FederativeEntity {
    pub fn new(
        code: u8,
        name: impl Into<String>,
        short_name: impl Into<String>,
        key: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            code: StateCode(code),
            name: name.into(),
            short_name: short_name.into(),
            key: key.into(),
            abbreviation: abbreviation.into(),
        }
    }

    pub fn code(&self) -> StateCode {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }
}

impl std::fmt::Display for FederativeEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code.value(), self.short_name.to_uppercase())
    }
}

// ─── Districts ───────────────────────────────────────────────────────

/// A federal electoral district.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FederalDistrict {
    id: u32,
    process_id: ProcessId,
    state_id: StateCode,
    /// Sequence number within the state.
    distrito: u32,
    head_locality: String,
}

impl FederalDistrict {
    pub fn new(
        id: u32,
        process_id: impl Into<ProcessId>,
        state_id: u8,
        distrito: u32,
        head_locality: impl Into<String>,
    ) -> Self {
        Self {
            id,
            process_id: process_id.into(),
            state_id: StateCode(state_id),
            distrito,
            head_locality: head_locality.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn distrito(&self) -> u32 {
        self.distrito
    }

    pub fn head_locality(&self) -> &str {
        &self.head_locality
    }
}

impl ProcessScoped for FederalDistrict {
    const KIND: &'static str = "FederalDistrict";

    fn process_id(&self) -> &ProcessId {
        &self.process_id
    }

    fn state_code(&self) -> StateCode {
        self.state_id
    }
}

impl std::fmt::Display for FederalDistrict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:02}", self.state_id.value(), self.distrito)
    }
}

/// A local electoral district.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalDistrict {
    id: u32,
    process_id: ProcessId,
    state_id: StateCode,
    /// Sequence number within the state.
    distrito_local: u32,
    head_locality: String,
}

impl LocalDistrict {
    pub fn new(
        id: u32,
        process_id: impl Into<ProcessId>,
        state_id: u8,
        distrito_local: u32,
        head_locality: impl Into<String>,
    ) -> Self {
        Self {
            id,
            process_id: process_id.into(),
            state_id: StateCode(state_id),
            distrito_local,
            head_locality: head_locality.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn distrito_local(&self) -> u32 {
        self.distrito_local
    }

    pub fn head_locality(&self) -> &str {
        &self.head_locality
    }
}

impl ProcessScoped for LocalDistrict {
    const KIND: &'static str = "LocalDistrict";

    fn process_id(&self) -> &ProcessId {
        &self.process_id
    }

    fn state_code(&self) -> StateCode {
        self.state_id
    }
}

impl std::fmt::Display for LocalDistrict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:02}", self.state_id.value(), self.distrito_local)
    }
}

// ─── Municipality ────────────────────────────────────────────────────

/// A municipality. New municipalities are rare; each one produces a new
/// MGE for its state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Municipality {
    id: u32,
    process_id: ProcessId,
    state_id: StateCode,
    /// Sequence number within the state.
    municipio_id: u32,
    name: String,
    head_locality: String,
}

impl Municipality {
    pub fn new(
        id: u32,
        process_id: impl Into<ProcessId>,
        state_id: u8,
        municipio_id: u32,
        name: impl Into<String>,
        head_locality: impl Into<String>,
    ) -> Self {
        Self {
            id,
            process_id: process_id.into(),
            state_id: StateCode(state_id),
            municipio_id,
            name: name.into(),
            head_locality: head_locality.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn municipio_id(&self) -> u32 {
        self.municipio_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn head_locality(&self) -> &str {
        &self.head_locality
    }
}

impl ProcessScoped for Municipality {
    const KIND: &'static str = "Municipality";

    fn process_id(&self) -> &ProcessId {
        &self.process_id
    }

    fn state_code(&self) -> StateCode {
        self.state_id
    }
}

impl std::fmt::Display for Municipality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03} {}", self.municipio_id, self.name.to_uppercase())
    }
}

// ─── Electoral Section ───────────────────────────────────────────────

/// An electoral section (precinct), the smallest stable unit used for
/// voter registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElectoralSection {
    id: u32,
    process_id: ProcessId,
    state_id: StateCode,
    federal_district_id: u32,
    local_district_id: u32,
    municipio_id: u32,
    /// Unique within the state.
    seccion: u32,
}

impl ElectoralSection {
    pub fn new(
        id: u32,
        process_id: impl Into<ProcessId>,
        state_id: u8,
        federal_district_id: u32,
        local_district_id: u32,
        municipio_id: u32,
        seccion: u32,
    ) -> Self {
        Self {
            id,
            process_id: process_id.into(),
            state_id: StateCode(state_id),
            federal_district_id,
            local_district_id,
            municipio_id,
            seccion,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn federal_district_id(&self) -> u32 {
        self.federal_district_id
    }

    pub fn local_district_id(&self) -> u32 {
        self.local_district_id
    }

    pub fn municipio_id(&self) -> u32 {
        self.municipio_id
    }

    pub fn seccion(&self) -> u32 {
        self.seccion
    }

    /// Whether `reference` identifies this section, either by record id or
    /// by section number.
    pub fn is_identified_by(&self, reference: u32) -> bool {
        reference == self.id || reference == self.seccion
    }
}

impl ProcessScoped for ElectoralSection {
    const KIND: &'static str = "ElectoralSection";

    fn process_id(&self) -> &ProcessId {
        &self.process_id
    }

    fn state_code(&self) -> StateCode {
        self.state_id
    }
}

impl MunicipalityScoped for ElectoralSection {
    fn municipio_ref(&self) -> u32 {
        self.municipio_id
    }
}

impl std::fmt::Display for ElectoralSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:04}", self.state_id, self.seccion)
    }
}

// ─── Localities ──────────────────────────────────────────────────────

/// An area of the electoral cartography that bounds a locality. Its use is
/// limited to locating citizens geo-electorally, even where the name and
/// area coincide with other administrative catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalityBoundary {
    id: u32,
    process_id: ProcessId,
    state_id: StateCode,
    municipio_id: u32,
    /// Restarts per municipality.
    localidad_id: u32,
    name: String,
}

impl LocalityBoundary {
    pub fn new(
        id: u32,
        process_id: impl Into<ProcessId>,
        state_id: u8,
        municipio_id: u32,
        localidad_id: u32,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            process_id: process_id.into(),
            state_id: StateCode(state_id),
            municipio_id,
            localidad_id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn municipio_id(&self) -> u32 {
        self.municipio_id
    }

    pub fn localidad_id(&self) -> u32 {
        self.localidad_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ProcessScoped for LocalityBoundary {
    const KIND: &'static str = "LocalityBoundary";

    fn process_id(&self) -> &ProcessId {
        &self.process_id
    }

    fn state_code(&self) -> StateCode {
        self.state_id
    }
}

impl MunicipalityScoped for LocalityBoundary {
    fn municipio_ref(&self) -> u32 {
        self.municipio_id
    }
}

impl std::fmt::Display for LocalityBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04} {}", self.localidad_id, self.name.to_uppercase())
    }
}

/// A locality represented by a single point. It may have registered
/// citizens, so it doubles as block [`POINT_LOCALITY_BLOCK`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointLocality {
    id: u32,
    process_id: ProcessId,
    state_ref: StateCode,
    municipio_ref: u32,
    localidad_id: u32,
    name: String,
}

impl PointLocality {
    pub fn new(
        id: u32,
        process_id: impl Into<ProcessId>,
        state_ref: u8,
        municipio_ref: u32,
        localidad_id: u32,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            process_id: process_id.into(),
            state_ref: StateCode(state_ref),
            municipio_ref,
            localidad_id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn state_ref(&self) -> StateCode {
        self.state_ref
    }

    pub fn localidad_id(&self) -> u32 {
        self.localidad_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ProcessScoped for PointLocality {
    const KIND: &'static str = "PointLocality";
    const STATE_FIELD: &'static str = "state_ref";

    fn process_id(&self) -> &ProcessId {
        &self.process_id
    }

    fn state_code(&self) -> StateCode {
        self.state_ref
    }
}

impl MunicipalityScoped for PointLocality {
    const MUNICIPIO_FIELD: &'static str = "municipio_ref";

    fn municipio_ref(&self) -> u32 {
        self.municipio_ref
    }
}

impl std::fmt::Display for PointLocality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04} {}", self.localidad_id, self.name.to_uppercase())
    }
}

// ─── Block ───────────────────────────────────────────────────────────

/// A block (manzana), the unit where citizens are registered.
///
/// `(municipio_id, localidad_id, seccion_id, manzana)` is unique within a
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Block {
    id: u32,
    process_id: ProcessId,
    state_id: StateCode,
    municipio_id: u32,
    localidad_id: u32,
    /// Either the section's record id or its section number.
    seccion_id: u32,
    manzana: u32,
}

impl Block {
    pub fn new(
        id: u32,
        process_id: impl Into<ProcessId>,
        state_id: u8,
        municipio_id: u32,
        localidad_id: u32,
        seccion_id: u32,
        manzana: u32,
    ) -> Self {
        Self {
            id,
            process_id: process_id.into(),
            state_id: StateCode(state_id),
            municipio_id,
            localidad_id,
            seccion_id,
            manzana,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn municipio_id(&self) -> u32 {
        self.municipio_id
    }

    pub fn localidad_id(&self) -> u32 {
        self.localidad_id
    }

    pub fn seccion_id(&self) -> u32 {
        self.seccion_id
    }

    pub fn manzana(&self) -> u32 {
        self.manzana
    }

    /// Whether this block stands for a point locality.
    pub fn is_point_locality_block(&self) -> bool {
        self.manzana == POINT_LOCALITY_BLOCK
    }
}

impl ProcessScoped for Block {
    const KIND: &'static str = "Block";

    fn process_id(&self) -> &ProcessId {
        &self.process_id
    }

    fn state_code(&self) -> StateCode {
        self.state_id
    }
}

impl MunicipalityScoped for Block {
    fn municipio_ref(&self) -> u32 {
        self.municipio_id
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04} {:04} {:04}",
            self.seccion_id, self.localidad_id, self.manzana
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_federative_entity_display() {
        let ef = FederativeEntity::new(30, "VERACRUZ DE IGNACIO DE LA LLAVE", "Veracruz", "VR", "VER");
        assert_eq!(ef.to_string(), "30 VERACRUZ");
        assert_eq!(ef.code(), StateCode(30));
    }

    #[test]
    fn test_municipality_display() {
        let m = Municipality::new(1, "2024", 30, 7, "Coatepec", "Coatepec");
        assert_eq!(m.to_string(), "007 COATEPEC");
    }

    #[test]
    fn test_section_display() {
        let s = ElectoralSection::new(1, "2024", 30, 1, 10, 1, 1234);
        assert_eq!(s.to_string(), "30 1234");
    }

    #[test]
    fn test_section_display_pads_state() {
        let s = ElectoralSection::new(1, "2024", 7, 1, 10, 1, 42);
        assert_eq!(s.to_string(), "07 0042");
    }

    #[test]
    fn test_district_display() {
        let df = FederalDistrict::new(1, 2024u32, 30, 1, "Xalapa");
        assert_eq!(df.to_string(), "30 01");
        let dl = LocalDistrict::new(10, 2024u32, 30, 12, "Xalapa");
        assert_eq!(dl.to_string(), "30 12");
    }

    #[test]
    fn test_locality_display() {
        let ll = LocalityBoundary::new(1, "2024", 30, 1, 25, "Las Trancas");
        assert_eq!(ll.to_string(), "0025 LAS TRANCAS");
        let lp = PointLocality::new(1, "2024", 30, 1, 9999, "Punto");
        assert_eq!(lp.to_string(), "9999 PUNTO");
    }

    #[test]
    fn test_block_display() {
        let mz = Block::new(1, "2024", 30, 1, 9999, 1234, 88);
        assert_eq!(mz.to_string(), "1234 9999 0088");
        assert!(!mz.is_point_locality_block());
        assert!(Block::new(2, "2024", 30, 1, 7, 1234, 9999).is_point_locality_block());
    }

    #[test]
    fn test_section_identified_by_id_or_number() {
        let s = ElectoralSection::new(1, "2024", 30, 1, 10, 1, 1234);
        assert!(s.is_identified_by(1));
        assert!(s.is_identified_by(1234));
        assert!(!s.is_identified_by(9999));
    }

    #[test]
    fn test_point_locality_uses_alternate_fields() {
        let lp = PointLocality::new(1, "2024", 30, 4, 9999, "Punto");
        assert_eq!(lp.state_code(), StateCode(30));
        assert_eq!(lp.municipio_ref(), 4);
        assert_eq!(<PointLocality as ProcessScoped>::STATE_FIELD, "state_ref");
        assert_eq!(<PointLocality as MunicipalityScoped>::MUNICIPIO_FIELD, "municipio_ref");
        assert_eq!(<Block as ProcessScoped>::STATE_FIELD, "state_id");
    }

    #[test]
    fn test_numeric_process_id_normalized() {
        let df = FederalDistrict::new(1, 2024u32, 30, 1, "Xalapa");
        let mz = Block::new(1, "2024", 30, 1, 1, 1, 1);
        assert_eq!(df.process_id(), mz.process_id());
    }

    #[test]
    fn test_serde_accepts_numeric_process_id() {
        let json = r#"{"id":1,"process_id":2024,"state_ref":30,"municipio_ref":1,"localidad_id":9999,"name":"Punto"}"#;
        let lp: PointLocality = serde_json::from_str(json).unwrap();
        assert_eq!(lp.process_id().as_str(), "2024");
    }

    #[test]
    fn test_serde_rejects_unknown_fields() {
        let json = r#"{"id":1,"process_id":"2024","state_id":30,"municipio_ref":1,"localidad_id":1,"name":"x"}"#;
        assert!(serde_json::from_str::<PointLocality>(json).is_err());
    }
}
