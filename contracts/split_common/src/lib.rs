//! Pieces shared by the fund splitter and the campaign ledger: the error
//! taxonomy, fee configuration and its administration, and the helpers
//! that move native or token assets in and out of contract custody.
#![no_std]

pub mod admin;
pub mod error;
pub mod events;
pub mod fee;
pub mod ledger;

pub use error::Error;
pub use fee::{FeeConfig, PERCENTAGE_BASE};
pub use ledger::AssetKind;
