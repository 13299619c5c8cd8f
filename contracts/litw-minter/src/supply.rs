use cosmwasm_std::{StdResult, Storage};

use crate::state::{Supply, SUPPLY};
use crate::ContractError;

/// Checks that `quantity` more items fit under the cap and returns the id
/// the first of them will take. Ids start at 1. Nothing is written here,
/// see [`commit`].
pub fn reserve(supply: &Supply, quantity: u32) -> Result<u32, ContractError> {
    let issued = supply
        .total_issued
        .checked_add(quantity)
        .ok_or(ContractError::SoldOut {})?;
    if issued > supply.max_supply {
        return Err(ContractError::SoldOut {});
    }
    supply
        .total_issued
        .checked_add(1)
        .ok_or(ContractError::SoldOut {})
}

/// Records `quantity` issued items. Only call after [`reserve`] accepted it.
pub fn commit(storage: &mut dyn Storage, quantity: u32) -> StdResult<Supply> {
    SUPPLY.update(storage, |mut supply| -> StdResult<_> {
        supply.total_issued += quantity;
        Ok(supply)
    })
}

pub fn set_max_supply(storage: &mut dyn Storage, max_supply: u32) -> Result<Supply, ContractError> {
    let mut supply = SUPPLY.load(storage)?;
    if max_supply > supply.max_supply {
        return Err(ContractError::AttemptedMaxSupplyIncrease {});
    }
    if max_supply < supply.total_issued {
        return Err(ContractError::MaxSupplyBelowIssued {});
    }

    supply.max_supply = max_supply;
    SUPPLY.save(storage, &supply)?;
    Ok(supply)
}
