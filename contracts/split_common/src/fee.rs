use soroban_sdk::{contracttype, Address};

use crate::error::Error;

// Constants
pub const PERCENTAGE_BASE: u32 = 10_000; // 100% = 10,000 (0.01% resolution)

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    /// Receives the platform fee
    pub fee_recipient: Address,
    /// Fee numerator over `percentage_base`
    pub fee_percentage: u32,
    /// Fixed-point denominator shared by every percentage in the contract
    pub percentage_base: u32,
}

impl FeeConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.percentage_base == 0 || self.fee_percentage > self.percentage_base {
            return Err(Error::InvalidFeePercentage);
        }
        Ok(())
    }
}

/// Take `percentage / base` of `amount`, rounding down
///
/// Formula: share = amount × percentage / base
///
/// Example:
/// - amount: 1,000
/// - percentage: 300 (3% at base 10,000)
/// - share: 1,000 × 300 / 10,000 = 30
pub fn percentage_of(amount: i128, percentage: u32, base: u32) -> Result<i128, Error> {
    if base == 0 {
        return Err(Error::InvalidFeePercentage);
    }

    amount
        .checked_mul(percentage as i128)
        .ok_or(Error::ArithmeticOverflow)?
        .checked_div(base as i128)
        .ok_or(Error::ArithmeticOverflow)
}

/// Split an amount into (fee, remainder) under a fee configuration
///
/// The fee is floored, so amounts too small to carry a whole fee unit
/// go entirely to the remainder.
pub fn split_fee(amount: i128, config: &FeeConfig) -> Result<(i128, i128), Error> {
    let fee = percentage_of(amount, config.fee_percentage, config.percentage_base)?;
    let net = amount.checked_sub(fee).ok_or(Error::ArithmeticOverflow)?;
    Ok((fee, net))
}
