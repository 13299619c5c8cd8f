use cosmwasm_std::{
    Addr, Deps, DepsMut, Event, HexBinary, MessageInfo, Response, StdResult, Storage,
};
use cw_utils::nonpayable;
use litw_sale::Phase;

use crate::helpers::CollectionContract;
use crate::state::{ADMIN, COLLECTION, CONFIG, SUPPLY, WHITELIST_ROOT};
use crate::{phase, pricing, quota, supply, ContractError};

/// A single admission rule applied to a mint request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    PhaseOpen,
    Supply,
    Allowlist,
    Quota,
    Payment,
    Quantity,
}

/// Order in which mint requests are checked. The first failing check
/// decides the error a caller sees.
pub const MINT_PIPELINE: [Check; 6] = [
    Check::PhaseOpen,
    Check::Supply,
    Check::Allowlist,
    Check::Quota,
    Check::Payment,
    Check::Quantity,
];

/// Upper bound on items issued by a single mint or airdrop, since each item
/// is its own collection message
pub const MAX_ISSUE_PER_CALL: u32 = 100;

pub struct MintRequest<'a> {
    pub phase: Phase,
    pub proof: &'a [HexBinary],
    pub quantity: u32,
}

/// What a request that passed every check is allowed to write
#[derive(Debug, PartialEq)]
pub struct Admission {
    pub first_id: u32,
    pub minted: u32,
}

/// Runs [`MINT_PIPELINE`] against current state without modifying it
pub fn admit(
    deps: Deps,
    info: &MessageInfo,
    req: &MintRequest,
) -> Result<Admission, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let supply = SUPPLY.load(deps.storage)?;
    let mut admission = Admission {
        first_id: 0,
        minted: 0,
    };

    for check in MINT_PIPELINE {
        match check {
            Check::PhaseOpen => phase::assert_open(deps.storage, req.phase)?,
            Check::Supply => admission.first_id = supply::reserve(&supply, req.quantity)?,
            Check::Allowlist => {
                if req.phase.requires_allowlist() {
                    assert_whitelisted(deps.storage, &info.sender, req.proof)?;
                }
            }
            Check::Quota => {
                admission.minted = quota::check(
                    deps.storage,
                    req.phase,
                    &info.sender,
                    req.quantity,
                    config.limits.limit(req.phase),
                )?
            }
            Check::Payment => match req.phase.is_paid() {
                true => pricing::validate_payment(info, &config.public_price, req.quantity)?,
                false => pricing::assert_unpaid(info)?,
            },
            Check::Quantity => match req.quantity {
                0 => return Err(ContractError::ZeroQuantity {}),
                q if q > MAX_ISSUE_PER_CALL => return Err(ContractError::MintingTooMany {}),
                _ => {}
            },
        }
    }

    Ok(admission)
}

fn assert_whitelisted(
    storage: &dyn Storage,
    caller: &Addr,
    proof: &[HexBinary],
) -> Result<(), ContractError> {
    let root = WHITELIST_ROOT
        .may_load(storage)?
        .filter(|root| !litw_merkle::is_unset(root))
        .ok_or(ContractError::WhitelistUnavailable {})?;

    if !litw_merkle::verify(&root, proof, &litw_merkle::leaf(caller.as_str())) {
        return Err(ContractError::NotWhitelisted {});
    }
    Ok(())
}

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    phase: Phase,
    proof: Vec<HexBinary>,
    quantity: u32,
) -> Result<Response, ContractError> {
    let req = MintRequest {
        phase,
        proof: &proof,
        quantity,
    };
    let admission = admit(deps.as_ref(), &info, &req)?;

    supply::commit(deps.storage, quantity)?;
    quota::record(deps.storage, phase, &info.sender, admission.minted)?;

    let collection = CollectionContract(COLLECTION.load(deps.storage)?);
    let msgs = collection.mint_msgs(&info.sender, admission.first_id, quantity)?;

    let event = Event::new("mint")
        .add_attribute("phase", phase.to_string())
        .add_attribute("minter", info.sender)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("first_token_id", admission.first_id.to_string())
        .add_attribute("phase_count", admission.minted.to_string());

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_messages(msgs)
        .add_event(event))
}

/// Admin issuance. Phases, quotas and payment do not apply but the supply
/// cap and [`MAX_ISSUE_PER_CALL`] do.
pub fn execute_airdrop(
    deps: DepsMut,
    info: MessageInfo,
    recipients: Vec<String>,
    amounts: Vec<u32>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    if recipients.len() != amounts.len() {
        return Err(ContractError::AirdropLengthMismatch {});
    }
    let recipients = recipients
        .iter()
        .map(|recipient| deps.api.addr_validate(recipient))
        .collect::<StdResult<Vec<_>>>()?;

    let total = amounts
        .iter()
        .try_fold(0u32, |acc, amount| acc.checked_add(*amount))
        .ok_or(ContractError::SoldOut {})?;
    let first_id = supply::reserve(&SUPPLY.load(deps.storage)?, total)?;
    if total == 0 {
        return Err(ContractError::ZeroQuantity {});
    }
    if total > MAX_ISSUE_PER_CALL {
        return Err(ContractError::MintingTooMany {});
    }

    supply::commit(deps.storage, total)?;

    let collection = CollectionContract(COLLECTION.load(deps.storage)?);
    let mut msgs = vec![];
    let mut offset = 0;
    for (recipient, amount) in recipients.iter().zip(amounts) {
        if amount == 0 {
            continue;
        }
        msgs.extend(collection.mint_msgs(recipient, first_id + offset, amount)?);
        offset += amount;
    }

    let event = Event::new("airdrop")
        .add_attribute("recipients", recipients.len().to_string())
        .add_attribute("quantity", total.to_string())
        .add_attribute("sender", info.sender);

    Ok(Response::new()
        .add_attribute("action", "airdrop")
        .add_messages(msgs)
        .add_event(event))
}
