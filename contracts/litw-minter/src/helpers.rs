use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_binary, Addr, CosmosMsg, Empty, QuerierWrapper, QueryRequest, StdResult, WasmMsg,
    WasmQuery,
};
use cw721::{Cw721QueryMsg, NumTokensResponse};
use cw721_base::{ExecuteMsg as Cw721ExecuteMsg, Extension, MintMsg};
use litw_sale::{SupplyResponse, TokenUriResponse};

use crate::msg::{ExecuteMsg, QueryMsg};

/// LitwMinterContract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct LitwMinterContract(pub Addr);

impl LitwMinterContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    pub fn supply(&self, querier: &QuerierWrapper) -> StdResult<SupplyResponse> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&QueryMsg::Supply {})?,
        }))
    }

    pub fn token_uri(&self, querier: &QuerierWrapper, token_id: u32) -> StdResult<String> {
        let res: TokenUriResponse = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&QueryMsg::TokenUri { token_id })?,
        }))?;
        Ok(res.token_uri)
    }
}

/// The cw721 collection that owns issued items
#[cw_serde]
pub struct CollectionContract(pub Addr);

impl CollectionContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    /// One cw721 mint per item, ids `first_id..first_id + quantity`
    pub fn mint_msgs(
        &self,
        owner: &Addr,
        first_id: u32,
        quantity: u32,
    ) -> StdResult<Vec<CosmosMsg>> {
        (0..quantity)
            .map(|offset| {
                let msg = Cw721ExecuteMsg::<Extension, Empty>::Mint(MintMsg {
                    token_id: (first_id + offset).to_string(),
                    owner: owner.to_string(),
                    token_uri: None,
                    extension: None,
                });
                Ok(WasmMsg::Execute {
                    contract_addr: self.addr().into(),
                    msg: to_binary(&msg)?,
                    funds: vec![],
                }
                .into())
            })
            .collect()
    }

    pub fn num_tokens(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        let res: NumTokensResponse = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&Cw721QueryMsg::NumTokens {})?,
        }))?;
        Ok(res.count)
    }
}
