use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, HexBinary};
use cw_controllers::AdminResponse;
use litw_sale::{
    CollectionResponse, MintCountResponse, MintPriceResponse, Phase, PhaseLimits,
    PhasesResponse, PriceResponse, SupplyResponse, TokenUriResponse, WhitelistRootResponse,
};

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the sender
    pub admin: Option<String>,
    /// cw721-base code used for the collection
    pub collection_code_id: u64,
    pub name: String,
    pub symbol: String,
    pub public_price: Coin,
    pub max_supply: Option<u32>,
    pub limits: Option<PhaseLimits>,
    pub hidden_uri: Option<String>,
    /// Defaults to the admin
    pub funds_recipient: Option<String>,
    pub exclusive_phases: Option<bool>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Free mint for OG allowlist members
    OgMint {
        proof: Vec<HexBinary>,
        quantity: u32,
    },
    /// Free mint for whitelist members
    WhitelistMint {
        proof: Vec<HexBinary>,
        quantity: u32,
    },
    /// Paid mint for allowlist members
    PublicListMint {
        proof: Vec<HexBinary>,
        quantity: u32,
    },
    /// Paid mint open to anyone
    PublicMint { quantity: u32 },
    /// Admin issuance that skips phase, quota and payment rules
    Airdrop {
        recipients: Vec<String>,
        amounts: Vec<u32>,
    },
    SetWhitelistRoot { root: HexBinary },
    /// Can only lower the cap
    UpdateMaxSupply { max_supply: u32 },
    SetPhase { phase: Phase, open: bool },
    SetBaseUri { base_uri: String },
    SwitchReveal {},
    /// Send the full contract balance to the funds recipient
    Withdraw {},
    UpdateAdmin { admin: Option<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(SupplyResponse)]
    Supply {},
    #[returns(PriceResponse)]
    Price {},
    #[returns(MintPriceResponse)]
    MintPrice { quantity: u32 },
    #[returns(TokenUriResponse)]
    TokenUri { token_id: u32 },
    #[returns(PhasesResponse)]
    Phases {},
    #[returns(WhitelistRootResponse)]
    WhitelistRoot {},
    #[returns(MintCountResponse)]
    MintCount { phase: Phase, address: String },
    #[returns(AdminResponse)]
    Admin {},
    #[returns(CollectionResponse)]
    Collection {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub config: Config,
    pub revealed: bool,
    pub base_uri: String,
}

#[cw_serde]
pub struct MigrateMsg {}
