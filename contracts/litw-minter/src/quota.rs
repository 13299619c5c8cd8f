use cosmwasm_std::{Addr, StdResult, Storage};
use litw_sale::Phase;

use crate::state::MINTED;
use crate::ContractError;

pub fn minted(storage: &dyn Storage, phase: Phase, caller: &Addr) -> StdResult<u32> {
    Ok(MINTED
        .may_load(storage, (phase.key(), caller))?
        .unwrap_or_default())
}

/// Returns the caller's count for `phase` after minting `quantity` more,
/// failing if it would go past `limit`. Counts accumulate across calls.
pub fn check(
    storage: &dyn Storage,
    phase: Phase,
    caller: &Addr,
    quantity: u32,
    limit: u32,
) -> Result<u32, ContractError> {
    let count = minted(storage, phase, caller)?
        .checked_add(quantity)
        .ok_or(ContractError::MintingTooMany {})?;
    if count > limit {
        return Err(ContractError::MintingTooMany {});
    }
    Ok(count)
}

pub fn record(storage: &mut dyn Storage, phase: Phase, caller: &Addr, count: u32) -> StdResult<()> {
    MINTED.save(storage, (phase.key(), caller), &count)
}
