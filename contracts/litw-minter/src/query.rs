#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, Env, StdError, StdResult};
use litw_sale::{
    CollectionResponse, MintCountResponse, MintPriceResponse, Phase, PhasesResponse,
    PriceResponse, SupplyResponse, TokenUriResponse, WhitelistRootResponse,
};

use crate::msg::{ConfigResponse, QueryMsg};
use crate::state::{
    ADMIN, BASE_URI, COLLECTION, CONFIG, PHASES, REVEALED, SUPPLY, WHITELIST_ROOT,
};
use crate::{pricing, quota, reveal};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Supply {} => to_binary(&query_supply(deps)?),
        QueryMsg::Price {} => to_binary(&query_price(deps)?),
        QueryMsg::MintPrice { quantity } => to_binary(&query_mint_price(deps, quantity)?),
        QueryMsg::TokenUri { token_id } => to_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::Phases {} => to_binary(&query_phases(deps)?),
        QueryMsg::WhitelistRoot {} => to_binary(&query_whitelist_root(deps)?),
        QueryMsg::MintCount { phase, address } => {
            to_binary(&query_mint_count(deps, phase, address)?)
        }
        QueryMsg::Admin {} => to_binary(&ADMIN.query_admin(deps)?),
        QueryMsg::Collection {} => to_binary(&query_collection(deps)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    Ok(ConfigResponse {
        config: CONFIG.load(deps.storage)?,
        revealed: REVEALED.load(deps.storage)?,
        base_uri: BASE_URI.load(deps.storage)?,
    })
}

fn query_supply(deps: Deps) -> StdResult<SupplyResponse> {
    let supply = SUPPLY.load(deps.storage)?;
    Ok(SupplyResponse {
        total_issued: supply.total_issued,
        max_supply: supply.max_supply,
    })
}

fn query_price(deps: Deps) -> StdResult<PriceResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(PriceResponse {
        public_price: config.public_price,
    })
}

fn query_mint_price(deps: Deps, quantity: u32) -> StdResult<MintPriceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let price = pricing::price(&config.public_price, quantity)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(MintPriceResponse { quantity, price })
}

fn query_token_uri(deps: Deps, token_id: u32) -> StdResult<TokenUriResponse> {
    Ok(TokenUriResponse {
        token_uri: reveal::token_uri(deps.storage, token_id)?,
    })
}

fn query_phases(deps: Deps) -> StdResult<PhasesResponse> {
    let flags = PHASES.load(deps.storage)?;
    Ok(PhasesResponse {
        open: flags.open_phases(),
        flags,
    })
}

fn query_whitelist_root(deps: Deps) -> StdResult<WhitelistRootResponse> {
    let root = WHITELIST_ROOT
        .may_load(deps.storage)?
        .filter(|root| !litw_merkle::is_unset(root));
    Ok(WhitelistRootResponse { root })
}

fn query_mint_count(deps: Deps, phase: Phase, address: String) -> StdResult<MintCountResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let limits = CONFIG.load(deps.storage)?.limits;
    Ok(MintCountResponse {
        phase,
        address,
        count: quota::minted(deps.storage, phase, &addr)?,
        limit: limits.limit(phase),
    })
}

fn query_collection(deps: Deps) -> StdResult<CollectionResponse> {
    let collection = COLLECTION.load(deps.storage)?;
    Ok(CollectionResponse {
        collection: collection.to_string(),
    })
}
