//! Shared fixtures: process 2024 (calendar year) in Veracruz (state 30).

#![allow(dead_code)]

use chrono::NaiveDate;
use mge_core::{
    Block, ElectoralProcess, ElectoralSection, FederalDistrict, FederativeEntity, LocalDistrict,
    LocalityBoundary, Municipality, PointLocality,
};

pub const PROCESS: &str = "2024";
pub const STATE: u8 = 30;

pub fn process() -> ElectoralProcess {
    ElectoralProcess::new(
        PROCESS,
        "PE2024",
        "Proceso Electoral 2024",
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    )
    .unwrap()
}

pub fn veracruz() -> FederativeEntity {
    FederativeEntity::new(STATE, "VERACRUZ DE IGNACIO DE LA LLAVE", "Veracruz", "VR", "VER")
}

pub fn federal(id: u32) -> FederalDistrict {
    FederalDistrict::new(id, PROCESS, STATE, id, "Veracruz")
}

pub fn local(id: u32) -> LocalDistrict {
    LocalDistrict::new(id, PROCESS, STATE, id, "Xalapa")
}

pub fn municipality(municipio_id: u32) -> Municipality {
    Municipality::new(municipio_id, PROCESS, STATE, municipio_id, "Xalapa", "Xalapa")
}

/// Section `seccion` with record id 1.
pub fn section(federal_id: u32, local_id: u32, municipio_id: u32, seccion: u32) -> ElectoralSection {
    ElectoralSection::new(1, PROCESS, STATE, federal_id, local_id, municipio_id, seccion)
}

pub fn boundary(municipio_id: u32, localidad_id: u32) -> LocalityBoundary {
    LocalityBoundary::new(localidad_id, PROCESS, STATE, municipio_id, localidad_id, "Las Trancas")
}

pub fn point(municipio_ref: u32) -> PointLocality {
    PointLocality::new(1, PROCESS, STATE, municipio_ref, 9999, "Punto")
}

pub fn block(municipio_id: u32, seccion_id: u32, manzana: u32) -> Block {
    Block::new(manzana, PROCESS, STATE, municipio_id, 1, seccion_id, manzana)
}

/// Route `tracing` output through the test harness; honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
