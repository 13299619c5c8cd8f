use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, HexBinary};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};
use litw_sale::{PhaseFlags, PhaseLimits};

/// Fixed at instantiation
#[cw_serde]
pub struct Config {
    /// Price of a single item in paid phases
    pub public_price: Coin,
    pub limits: PhaseLimits,
    /// Returned for every token until reveal
    pub hidden_uri: String,
    /// Receives the whole balance on withdraw
    pub funds_recipient: Addr,
    /// Opening a phase closes all others when set
    pub exclusive_phases: bool,
}

#[cw_serde]
pub struct Supply {
    pub max_supply: u32,
    pub total_issued: u32,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const SUPPLY: Item<Supply> = Item::new("supply");

pub const PHASES: Item<PhaseFlags> = Item::new("phases");

/// Missing or all-zero means no allowlist
pub const WHITELIST_ROOT: Item<HexBinary> = Item::new("whitelist-root");

/// (phase key, caller) -> minted so far in that phase
pub const MINTED: Map<(&str, &Addr), u32> = Map::new("minted");

pub const REVEALED: Item<bool> = Item::new("revealed");

pub const BASE_URI: Item<String> = Item::new("base-uri");

/// cw721 collection the minter issues into
pub const COLLECTION: Item<Addr> = Item::new("collection");

pub const ADMIN: Admin = Admin::new("admin");
