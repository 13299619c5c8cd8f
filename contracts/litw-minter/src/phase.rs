use cosmwasm_std::{StdResult, Storage};
use litw_sale::{Phase, PhaseFlags};

use crate::state::PHASES;
use crate::ContractError;

pub fn assert_open(storage: &dyn Storage, phase: Phase) -> Result<(), ContractError> {
    if !PHASES.load(storage)?.is_open(phase) {
        return Err(ContractError::SaleNotStarted {});
    }
    Ok(())
}

/// Flips a single phase. Other phases are untouched unless `exclusive`,
/// in which case opening `phase` closes every other one.
pub fn set_phase(
    storage: &mut dyn Storage,
    phase: Phase,
    open: bool,
    exclusive: bool,
) -> StdResult<PhaseFlags> {
    PHASES.update(storage, |mut flags| -> StdResult<_> {
        if exclusive && open {
            flags = PhaseFlags::default();
        }
        flags.set(phase, open);
        Ok(flags)
    })
}
