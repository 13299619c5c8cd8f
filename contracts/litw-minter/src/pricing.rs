use cosmwasm_std::{Coin, MessageInfo, Uint128};
use cw_utils::{may_pay, nonpayable};

use crate::ContractError;

/// `public_price * quantity`. An amount too large to represent can never
/// be paid, so it is reported as a payment error.
pub fn price(public_price: &Coin, quantity: u32) -> Result<Coin, ContractError> {
    let amount = public_price
        .amount
        .checked_mul(Uint128::from(quantity))
        .map_err(|_| ContractError::InvalidEthValueSent {})?;
    Ok(Coin {
        denom: public_price.denom.clone(),
        amount,
    })
}

/// The attached funds must be exactly the price, in the price denom only.
/// There is no refund of overpayment.
pub fn validate_payment(
    info: &MessageInfo,
    public_price: &Coin,
    quantity: u32,
) -> Result<(), ContractError> {
    let expected = price(public_price, quantity)?;
    let sent = may_pay(info, &expected.denom).map_err(|_| ContractError::InvalidEthValueSent {})?;
    if sent != expected.amount {
        return Err(ContractError::InvalidEthValueSent {});
    }
    Ok(())
}

/// Free phases accept no funds at all
pub fn assert_unpaid(info: &MessageInfo) -> Result<(), ContractError> {
    nonpayable(info).map_err(|_| ContractError::InvalidEthValueSent {})
}
