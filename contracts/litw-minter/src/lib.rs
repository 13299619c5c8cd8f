pub mod contract;
mod error;
pub mod helpers;
pub mod mint;
pub mod msg;
pub mod phase;
pub mod pricing;
pub mod query;
pub mod quota;
pub mod reveal;
pub mod state;
pub mod supply;

pub use crate::error::ContractError;
