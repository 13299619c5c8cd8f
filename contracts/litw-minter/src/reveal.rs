use cosmwasm_std::{StdResult, Storage};
use litw_sale::TOKEN_URI_SUFFIX;

use crate::state::{BASE_URI, CONFIG, REVEALED};

pub fn token_uri(storage: &dyn Storage, token_id: u32) -> StdResult<String> {
    if !REVEALED.load(storage)? {
        return Ok(CONFIG.load(storage)?.hidden_uri);
    }
    let base_uri = BASE_URI.load(storage)?;
    Ok(format!("{base_uri}{token_id}{TOKEN_URI_SUFFIX}"))
}

pub fn switch(storage: &mut dyn Storage) -> StdResult<bool> {
    REVEALED.update(storage, |revealed| -> StdResult<_> { Ok(!revealed) })
}
