//! # Case-File Manifest
//!
//! A declarative, serde-deserializable description of a case file. A
//! manifest is configuration, not a validated aggregate: it must pass
//! through [`ExpedienteManifest::build`], which runs the same validation as
//! [`ExpedienteMge::builder`].
//!
//! ```yaml
//! process:
//!   id: 2024
//!   short_name: PE2024
//!   official_name: Proceso Electoral 2024
//!   start: 2024-01-01
//!   end: 2024-12-31
//! state:
//!   code: 30
//!   name: VERACRUZ DE IGNACIO DE LA LLAVE
//!   short_name: Veracruz
//!   key: VR
//!   abbreviation: VER
//! level: federal-district
//! federal_districts:
//!   - { id: 1, process_id: "2024", state_id: 30, distrito: 1, head_locality: Xalapa }
//! ```
//!
//! Omitted collections are empty. Unknown keys are rejected.

use serde::{Deserialize, Serialize};

use mge_core::{
    Block, ElectoralProcess, ElectoralSection, FederalDistrict, FederativeEntity, GeoLevel,
    LocalDistrict, LocalityBoundary, Municipality, PointLocality,
};

use crate::error::ExpedienteError;
use crate::expediente::ExpedienteMge;

/// Unvalidated inputs of a case file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpedienteManifest {
    pub process: ElectoralProcess,
    pub state: FederativeEntity,
    pub level: GeoLevel,
    #[serde(default)]
    pub federal_districts: Vec<FederalDistrict>,
    #[serde(default)]
    pub local_districts: Vec<LocalDistrict>,
    #[serde(default)]
    pub municipalities: Vec<Municipality>,
    #[serde(default)]
    pub sections: Vec<ElectoralSection>,
    #[serde(default)]
    pub locality_boundaries: Vec<LocalityBoundary>,
    #[serde(default)]
    pub point_localities: Vec<PointLocality>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl ExpedienteManifest {
    /// Parse a manifest from YAML text.
    pub fn from_yaml_str(s: &str) -> Result<Self, ExpedienteError> {
        serde_yaml::from_str(s).map_err(|e| ExpedienteError::Manifest(format!("invalid YAML manifest: {e}")))
    }

    /// Parse a manifest from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, ExpedienteError> {
        serde_json::from_str(s).map_err(|e| ExpedienteError::Manifest(format!("invalid JSON manifest: {e}")))
    }

    /// Validate the manifest and produce the case file.
    pub fn build(self) -> Result<ExpedienteMge, ExpedienteError> {
        ExpedienteMge::builder(self.process, self.state, self.level)
            .federal_districts(self.federal_districts)
            .local_districts(self.local_districts)
            .municipalities(self.municipalities)
            .sections(self.sections)
            .locality_boundaries(self.locality_boundaries)
            .point_localities(self.point_localities)
            .blocks(self.blocks)
            .build()
    }
}

impl From<&ExpedienteMge> for ExpedienteManifest {
    fn from(expediente: &ExpedienteMge) -> Self {
        Self {
            process: expediente.process().clone(),
            state: expediente.state().clone(),
            level: expediente.level(),
            federal_districts: expediente.federal_districts().to_vec(),
            local_districts: expediente.local_districts().to_vec(),
            municipalities: expediente.municipalities().to_vec(),
            sections: expediente.sections().to_vec(),
            locality_boundaries: expediente.locality_boundaries().to_vec(),
            point_localities: expediente.point_localities().to_vec(),
            blocks: expediente.blocks().to_vec(),
        }
    }
}
