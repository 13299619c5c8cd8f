use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("SaleNotStarted")]
    SaleNotStarted {},

    #[error("SoldOut")]
    SoldOut {},

    #[error("AttemptedMaxSupplyIncrease")]
    AttemptedMaxSupplyIncrease {},

    #[error("MaxSupplyBelowIssued")]
    MaxSupplyBelowIssued {},

    #[error("WhitelistUnavailable")]
    WhitelistUnavailable {},

    #[error("NotWhitelisted")]
    NotWhitelisted {},

    #[error("MintingTooMany")]
    MintingTooMany {},

    #[error("InvalidEthValueSent")]
    InvalidEthValueSent {},

    #[error("ZeroQuantity")]
    ZeroQuantity {},

    #[error("AirdropLengthMismatch")]
    AirdropLengthMismatch {},

    #[error("Invalid reply ID")]
    InvalidReplyID {},

    #[error("Reply error")]
    ReplyOnSuccess {},
}
