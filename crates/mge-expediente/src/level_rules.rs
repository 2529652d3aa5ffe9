//! # Level Validation
//!
//! Structural rules a case file must satisfy for its declared [`GeoLevel`].
//! Runs after coherence validation. Within a level the checks run in a
//! fixed order: the district coexistence guard, then cardinality and
//! forbidden collections, then cross-references against the focal entity.
//!
//! ## Rules
//!
//! | Level | Focus | Forbidden | Must reference the focus |
//! |-------|-------|-----------|--------------------------|
//! | state | none | none | nothing |
//! | federal-district | exactly 1 federal district | local districts, municipalities | sections |
//! | local-district | exactly 1 local district | federal districts, municipalities | sections |
//! | municipality | exactly 1 municipality | districts of either kind | sections, localities, blocks |
//! | precinct | exactly 1 section | more than 1 municipality | districts, municipality, blocks |
//!
//! Outside `state` and `precinct`, federal and local districts never appear
//! together. At `precinct` level both may be present because the single
//! section pins the only district of each kind they can be.

use mge_core::{ElectoralSection, GeoLevel, MunicipalityScoped, ProcessScoped};

use crate::error::{ExpedienteError, InconsistencyRule};
use crate::expediente::ExpedienteMge;

/// Check the structural rules of the declared level.
pub(crate) fn validate_level(expediente: &ExpedienteMge) -> Result<(), ExpedienteError> {
    let level = expediente.level();

    if !level.allows_district_coexistence()
        && !expediente.federal_districts().is_empty()
        && !expediente.local_districts().is_empty()
    {
        return Err(ExpedienteError::inconsistency(
            InconsistencyRule::DistrictCoexistence,
            format!(
                "federal and local districts cannot coexist at level {level}; \
                 only state and precinct levels admit both"
            ),
        ));
    }

    match level {
        GeoLevel::State => Ok(()),
        GeoLevel::FederalDistrict => validate_federal_district(expediente),
        GeoLevel::LocalDistrict => validate_local_district(expediente),
        GeoLevel::Municipality => validate_municipality(expediente),
        GeoLevel::Precinct => validate_precinct(expediente),
    }
}

fn validate_federal_district(expediente: &ExpedienteMge) -> Result<(), ExpedienteError> {
    let level = GeoLevel::FederalDistrict;
    let district = require_single(expediente.federal_districts(), level)?;
    forbid(expediente.local_districts(), level)?;
    forbid(expediente.municipalities(), level)?;

    if let Some(section) = expediente
        .sections()
        .iter()
        .find(|s| s.federal_district_id() != district.id())
    {
        return Err(ExpedienteError::inconsistency(
            InconsistencyRule::CrossReference,
            format!(
                "section {} references federal district {}, outside declared federal district {}",
                section.seccion(),
                section.federal_district_id(),
                district.id()
            ),
        ));
    }
    Ok(())
}

fn validate_local_district(expediente: &ExpedienteMge) -> Result<(), ExpedienteError> {
    let level = GeoLevel::LocalDistrict;
    let district = require_single(expediente.local_districts(), level)?;
    forbid(expediente.federal_districts(), level)?;
    forbid(expediente.municipalities(), level)?;

    if let Some(section) = expediente
        .sections()
        .iter()
        .find(|s| s.local_district_id() != district.id())
    {
        return Err(ExpedienteError::inconsistency(
            InconsistencyRule::CrossReference,
            format!(
                "section {} references local district {}, outside declared local district {}",
                section.seccion(),
                section.local_district_id(),
                district.id()
            ),
        ));
    }
    Ok(())
}

fn validate_municipality(expediente: &ExpedienteMge) -> Result<(), ExpedienteError> {
    let level = GeoLevel::Municipality;
    let municipio_id = require_single(expediente.municipalities(), level)?.municipio_id();
    forbid(expediente.federal_districts(), level)?;
    forbid(expediente.local_districts(), level)?;

    within_municipality(expediente.sections(), municipio_id)?;
    within_municipality(expediente.locality_boundaries(), municipio_id)?;
    within_municipality(expediente.point_localities(), municipio_id)?;
    within_municipality(expediente.blocks(), municipio_id)?;
    Ok(())
}

fn validate_precinct(expediente: &ExpedienteMge) -> Result<(), ExpedienteError> {
    let level = GeoLevel::Precinct;
    let section = require_single(expediente.sections(), level)?;

    let municipalities = expediente.municipalities();
    if municipalities.len() > 1 {
        return Err(ExpedienteError::inconsistency(
            InconsistencyRule::Cardinality,
            format!(
                "level {level} admits at most one {}, got {}",
                <mge_core::Municipality as ProcessScoped>::KIND,
                municipalities.len()
            ),
        ));
    }

    if let Some(district) = expediente
        .federal_districts()
        .iter()
        .find(|d| d.id() != section.federal_district_id())
    {
        return Err(mismatch_with_section(
            section,
            format!(
                "federal district {} differs from the section's federal district {}",
                district.id(),
                section.federal_district_id()
            ),
        ));
    }

    if let Some(district) = expediente
        .local_districts()
        .iter()
        .find(|d| d.id() != section.local_district_id())
    {
        return Err(mismatch_with_section(
            section,
            format!(
                "local district {} differs from the section's local district {}",
                district.id(),
                section.local_district_id()
            ),
        ));
    }

    if let Some(municipality) = municipalities
        .iter()
        .find(|m| m.municipio_id() != section.municipio_id())
    {
        return Err(mismatch_with_section(
            section,
            format!(
                "municipality {} differs from the section's municipality {}",
                municipality.municipio_id(),
                section.municipio_id()
            ),
        ));
    }

    if let Some(block) = expediente
        .blocks()
        .iter()
        .find(|b| !section.is_identified_by(b.seccion_id()))
    {
        return Err(mismatch_with_section(
            section,
            format!(
                "block {} references section {}, expected id {} or number {}",
                block.manzana(),
                block.seccion_id(),
                section.id(),
                section.seccion()
            ),
        ));
    }
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────

fn require_single<T: ProcessScoped>(items: &[T], level: GeoLevel) -> Result<&T, ExpedienteError> {
    match items {
        [only] => Ok(only),
        _ => Err(ExpedienteError::inconsistency(
            InconsistencyRule::Cardinality,
            format!(
                "level {level} requires exactly one {}, got {}",
                T::KIND,
                items.len()
            ),
        )),
    }
}

fn forbid<T: ProcessScoped>(items: &[T], level: GeoLevel) -> Result<(), ExpedienteError> {
    if items.is_empty() {
        return Ok(());
    }
    Err(ExpedienteError::inconsistency(
        InconsistencyRule::ForbiddenCollection,
        format!(
            "level {level} does not admit {} entries, got {}",
            T::KIND,
            items.len()
        ),
    ))
}

fn within_municipality<T>(items: &[T], municipio_id: u32) -> Result<(), ExpedienteError>
where
    T: ProcessScoped + MunicipalityScoped + std::fmt::Display,
{
    match items.iter().find(|item| item.municipio_ref() != municipio_id) {
        None => Ok(()),
        Some(item) => Err(ExpedienteError::inconsistency(
            InconsistencyRule::CrossReference,
            format!(
                "{} [{}] with {}={} is outside declared municipality {}",
                T::KIND,
                item,
                T::MUNICIPIO_FIELD,
                item.municipio_ref(),
                municipio_id
            ),
        )),
    }
}

fn mismatch_with_section(section: &ElectoralSection, detail: String) -> ExpedienteError {
    ExpedienteError::inconsistency(
        InconsistencyRule::CrossReference,
        format!("declared section {}: {detail}", section.seccion()),
    )
}
