#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, BankMsg, DepsMut, Env, Event, HexBinary, MessageInfo, Reply, Response,
    StdError, SubMsg, WasmMsg,
};
use cw2::set_contract_version;
use cw721_base::InstantiateMsg as Cw721InstantiateMsg;
use cw_utils::{maybe_addr, nonpayable, parse_reply_instantiate_data};
use litw_sale::{Phase, PhaseFlags, DEFAULT_HIDDEN_URI, DEFAULT_MAX_SUPPLY};
use semver::Version;
use std::cmp::Ordering;

use crate::error::ContractError;
use crate::mint::{execute_airdrop, execute_mint};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg};
use crate::state::{
    Config, Supply, ADMIN, BASE_URI, COLLECTION, CONFIG, PHASES, REVEALED, SUPPLY,
    WHITELIST_ROOT,
};
use crate::{phase, reveal, supply};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:litw-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const INIT_COLLECTION_REPLY_ID: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let api = deps.api;
    let admin = maybe_addr(api, msg.admin)?.unwrap_or_else(|| info.sender.clone());
    ADMIN.set(deps.branch(), Some(admin.clone()))?;

    let config = Config {
        public_price: msg.public_price,
        limits: msg.limits.unwrap_or_default(),
        hidden_uri: msg
            .hidden_uri
            .unwrap_or_else(|| DEFAULT_HIDDEN_URI.to_string()),
        funds_recipient: maybe_addr(api, msg.funds_recipient)?.unwrap_or_else(|| admin.clone()),
        exclusive_phases: msg.exclusive_phases.unwrap_or(false),
    };
    CONFIG.save(deps.storage, &config)?;

    SUPPLY.save(
        deps.storage,
        &Supply {
            max_supply: msg.max_supply.unwrap_or(DEFAULT_MAX_SUPPLY),
            total_issued: 0,
        },
    )?;
    PHASES.save(deps.storage, &PhaseFlags::default())?;
    REVEALED.save(deps.storage, &false)?;
    BASE_URI.save(deps.storage, &String::new())?;

    let wasm_msg = WasmMsg::Instantiate {
        code_id: msg.collection_code_id,
        msg: to_binary(&Cw721InstantiateMsg {
            name: msg.name.clone(),
            symbol: msg.symbol,
            minter: env.contract.address.to_string(),
        })?,
        funds: vec![],
        admin: Some(admin.to_string()),
        label: format!("{} Collection", msg.name),
    };
    let submsg = SubMsg::reply_on_success(wasm_msg, INIT_COLLECTION_REPLY_ID);

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_submessage(submsg)
        .add_attribute("admin", admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != INIT_COLLECTION_REPLY_ID {
        return Err(ContractError::InvalidReplyID {});
    }

    let reply = parse_reply_instantiate_data(msg);
    match reply {
        Ok(res) => {
            let collection_address = deps.api.addr_validate(&res.contract_address)?;

            COLLECTION.save(deps.storage, &collection_address)?;

            Ok(Response::default()
                .add_attribute("action", "init_collection_reply")
                .add_attribute("collection", collection_address))
        }
        Err(_) => Err(ContractError::ReplyOnSuccess {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;

    match msg {
        ExecuteMsg::OgMint { proof, quantity } => {
            execute_mint(deps, info, Phase::Og, proof, quantity)
        }
        ExecuteMsg::WhitelistMint { proof, quantity } => {
            execute_mint(deps, info, Phase::Whitelist, proof, quantity)
        }
        ExecuteMsg::PublicListMint { proof, quantity } => {
            execute_mint(deps, info, Phase::PublicList, proof, quantity)
        }
        ExecuteMsg::PublicMint { quantity } => {
            execute_mint(deps, info, Phase::Public, vec![], quantity)
        }
        ExecuteMsg::Airdrop {
            recipients,
            amounts,
        } => execute_airdrop(deps, info, recipients, amounts),
        ExecuteMsg::SetWhitelistRoot { root } => execute_set_whitelist_root(deps, info, root),
        ExecuteMsg::UpdateMaxSupply { max_supply } => {
            execute_update_max_supply(deps, info, max_supply)
        }
        ExecuteMsg::SetPhase { phase, open } => execute_set_phase(deps, info, phase, open),
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::SwitchReveal {} => execute_switch_reveal(deps, info),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
        ExecuteMsg::UpdateAdmin { admin } => {
            nonpayable(&info)?;
            Ok(ADMIN.execute_update_admin(deps, info, maybe_addr(api, admin)?)?)
        }
    }
}

pub fn execute_set_whitelist_root(
    deps: DepsMut,
    info: MessageInfo,
    root: HexBinary,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    WHITELIST_ROOT.save(deps.storage, &root)?;

    let root_hex = match root.is_empty() {
        true => "none".to_string(),
        false => root.to_hex(),
    };
    let event = Event::new("set_whitelist_root")
        .add_attribute("root", root_hex)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_update_max_supply(
    deps: DepsMut,
    info: MessageInfo,
    max_supply: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    let supply = supply::set_max_supply(deps.storage, max_supply)?;

    let event = Event::new("update_max_supply")
        .add_attribute("max_supply", supply.max_supply.to_string())
        .add_attribute("total_issued", supply.total_issued.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_phase(
    deps: DepsMut,
    info: MessageInfo,
    phase: Phase,
    open: bool,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    let exclusive = CONFIG.load(deps.storage)?.exclusive_phases;
    let flags = phase::set_phase(deps.storage, phase, open, exclusive)?;

    let open_phases = match flags.open_phases() {
        phases if phases.is_empty() => "none".to_string(),
        phases => phases
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(","),
    };
    let event = Event::new("set_phase")
        .add_attribute("phase", phase.to_string())
        .add_attribute("open", open.to_string())
        .add_attribute("open_phases", open_phases)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    BASE_URI.save(deps.storage, &base_uri)?;

    // attribute values may not be empty
    let mut event = Event::new("set_base_uri").add_attribute("sender", info.sender);
    if !base_uri.is_empty() {
        event = event.add_attribute("base_uri", base_uri);
    }
    Ok(Response::new().add_event(event))
}

pub fn execute_switch_reveal(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    let revealed = reveal::switch(deps.storage)?;

    let event = Event::new("switch_reveal")
        .add_attribute("revealed", revealed.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    let recipient: Addr = CONFIG.load(deps.storage)?.funds_recipient;
    let balance = deps
        .querier
        .query_all_balances(env.contract.address)?
        .into_iter()
        .filter(|coin| !coin.amount.is_zero())
        .collect::<Vec<_>>();

    let mut event = Event::new("withdraw")
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("sender", info.sender);
    if balance.is_empty() {
        return Ok(Response::new().add_event(event));
    }

    let amount = balance
        .iter()
        .map(|coin| coin.to_string())
        .collect::<Vec<_>>()
        .join(",");
    event = event.add_attribute("amount", amount);

    Ok(Response::new().add_event(event).add_message(BankMsg::Send {
        to_address: recipient.to_string(),
        amount: balance,
    }))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = cw2::get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(StdError::generic_err(format!(
            "Cannot migrate from contract {}",
            stored.contract
        ))
        .into());
    }

    let from = parse_version(&stored.version)?;
    let to = parse_version(CONTRACT_VERSION)?;
    match from.cmp(&to) {
        Ordering::Greater => Err(StdError::generic_err(format!(
            "Cannot migrate from {from} down to {to}"
        ))
        .into()),
        Ordering::Equal => Ok(Response::new()),
        Ordering::Less => {
            set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
            let event = Event::new("migrate")
                .add_attribute("from_version", from.to_string())
                .add_attribute("to_version", to.to_string());
            Ok(Response::new().add_event(event))
        }
    }
}

fn parse_version(version: &str) -> Result<Version, ContractError> {
    version
        .parse()
        .map_err(|_| StdError::generic_err(format!("Invalid contract version {version}")).into())
}
