//! # Coherence Validation
//!
//! Every sub-entity of a case file must belong to the case file's electoral
//! process and state. Collections are checked in a fixed order (federal
//! districts, local districts, municipalities, sections, locality
//! boundaries, point localities, blocks) and the first mismatch wins, so
//! error messages are deterministic.
//!
//! Process ids compare as canonical [`ProcessId`] values; a catalog that
//! stored `2024` as a number and one that stored `"2024"` as text agree.

use mge_core::{ProcessId, ProcessScoped, StateCode};

use crate::error::{ExpedienteError, InconsistencyRule};
use crate::expediente::ExpedienteMge;

/// Check process and state membership of every collection in `expediente`.
pub(crate) fn validate_coherence(expediente: &ExpedienteMge) -> Result<(), ExpedienteError> {
    let process_id = expediente.process().id();
    let state = expediente.state().code();

    check_all(expediente.federal_districts(), process_id, state)?;
    check_all(expediente.local_districts(), process_id, state)?;
    check_all(expediente.municipalities(), process_id, state)?;
    check_all(expediente.sections(), process_id, state)?;
    check_all(expediente.locality_boundaries(), process_id, state)?;
    check_all(expediente.point_localities(), process_id, state)?;
    check_all(expediente.blocks(), process_id, state)?;
    Ok(())
}

fn check_all<T: ProcessScoped>(
    items: &[T],
    process_id: &ProcessId,
    state: StateCode,
) -> Result<(), ExpedienteError> {
    items
        .iter()
        .try_for_each(|item| check_membership(item, process_id, state))
}

fn check_membership<T: ProcessScoped>(
    item: &T,
    process_id: &ProcessId,
    state: StateCode,
) -> Result<(), ExpedienteError> {
    if item.process_id() != process_id {
        return Err(ExpedienteError::inconsistency(
            InconsistencyRule::ProcessMismatch,
            format!(
                "{} with process_id={} does not match {}",
                T::KIND,
                item.process_id(),
                process_id
            ),
        ));
    }
    if item.state_code() != state {
        return Err(ExpedienteError::inconsistency(
            InconsistencyRule::StateMismatch,
            format!(
                "{} with {}={} does not match {}",
                T::KIND,
                T::STATE_FIELD,
                item.state_code().value(),
                state.value()
            ),
        ));
    }
    Ok(())
}
