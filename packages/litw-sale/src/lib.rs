use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, HexBinary};

pub const DEFAULT_MAX_SUPPLY: u32 = 3333;

pub const DEFAULT_HIDDEN_URI: &str =
    "https://ipfs.io/ipfs/QmR7ApRD42gAW8dhwHQys8hvK9GaPp6BsTLNWrCBkPhVEg/hidden.json";

pub const TOKEN_URI_SUFFIX: &str = ".json";

/// Sale stage a mint entry point belongs to
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Phase {
    Og,
    Whitelist,
    PublicList,
    Public,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Og, Phase::Whitelist, Phase::PublicList, Phase::Public];

    /// Storage namespace for per-caller counters
    pub fn key(&self) -> &'static str {
        match self {
            Phase::Og => "og",
            Phase::Whitelist => "whitelist",
            Phase::PublicList => "public_list",
            Phase::Public => "public",
        }
    }

    pub fn requires_allowlist(&self) -> bool {
        !matches!(self, Phase::Public)
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, Phase::PublicList | Phase::Public)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Open/closed switch for every phase. More than one may be open.
#[cw_serde]
#[derive(Default, Copy)]
pub struct PhaseFlags {
    pub og: bool,
    pub whitelist: bool,
    pub public_list: bool,
    pub public: bool,
}

impl PhaseFlags {
    pub fn is_open(&self, phase: Phase) -> bool {
        match phase {
            Phase::Og => self.og,
            Phase::Whitelist => self.whitelist,
            Phase::PublicList => self.public_list,
            Phase::Public => self.public,
        }
    }

    pub fn set(&mut self, phase: Phase, open: bool) {
        let flag = match phase {
            Phase::Og => &mut self.og,
            Phase::Whitelist => &mut self.whitelist,
            Phase::PublicList => &mut self.public_list,
            Phase::Public => &mut self.public,
        };
        *flag = open;
    }

    pub fn open_phases(&self) -> Vec<Phase> {
        Phase::ALL
            .into_iter()
            .filter(|phase| self.is_open(*phase))
            .collect()
    }
}

/// Per-caller cap for each phase, cumulative over the life of the phase
#[cw_serde]
#[derive(Copy)]
pub struct PhaseLimits {
    /// 2
    pub og: u32,
    /// 1
    pub whitelist: u32,
    /// 1
    pub public_list: u32,
    /// 1
    pub public: u32,
}

impl Default for PhaseLimits {
    fn default() -> Self {
        PhaseLimits {
            og: 2,
            whitelist: 1,
            public_list: 1,
            public: 1,
        }
    }
}

impl PhaseLimits {
    pub fn limit(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Og => self.og,
            Phase::Whitelist => self.whitelist,
            Phase::PublicList => self.public_list,
            Phase::Public => self.public,
        }
    }
}

#[cw_serde]
pub struct SupplyResponse {
    pub total_issued: u32,
    pub max_supply: u32,
}

#[cw_serde]
pub struct PriceResponse {
    pub public_price: Coin,
}

#[cw_serde]
pub struct MintPriceResponse {
    pub quantity: u32,
    pub price: Coin,
}

#[cw_serde]
pub struct PhasesResponse {
    pub flags: PhaseFlags,
    pub open: Vec<Phase>,
}

#[cw_serde]
pub struct WhitelistRootResponse {
    pub root: Option<HexBinary>,
}

#[cw_serde]
pub struct MintCountResponse {
    pub phase: Phase,
    pub address: String,
    pub count: u32,
    pub limit: u32,
}

#[cw_serde]
pub struct TokenUriResponse {
    pub token_uri: String,
}

#[cw_serde]
pub struct CollectionResponse {
    pub collection: String,
}
