use soroban_sdk::{Address, Env, Vec};
use split_common::Error;

use crate::storage::{BeneficiaryShare, MAX_BENEFICIARIES};

/// Payout addresses may not be this contract's custody account
pub fn validate_recipient(env: &Env, recipient: &Address) -> Result<(), Error> {
    if *recipient == env.current_contract_address() {
        return Err(Error::InvalidAddress);
    }
    Ok(())
}

pub fn validate_split_request(
    env: &Env,
    destination: &Address,
    total_amount: i128,
) -> Result<(), Error> {
    validate_recipient(env, destination)?;

    if total_amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

/// Check a beneficiary list before it replaces a destination's registry entry
///
/// Returns the sum of the shares' percentages.
pub fn validate_beneficiary_list(
    env: &Env,
    shares: &Vec<BeneficiaryShare>,
    percentage_base: u32,
) -> Result<u32, Error> {
    if shares.is_empty() {
        return Err(Error::EmptyBeneficiaryList);
    }

    if shares.len() > MAX_BENEFICIARIES {
        return Err(Error::TooManyBeneficiaries);
    }

    let mut total: u32 = 0;
    for share in shares.iter() {
        validate_recipient(env, &share.recipient)?;

        total = total
            .checked_add(share.percentage)
            .ok_or(Error::InvalidPercentageSum)?;
    }

    if total > percentage_base {
        return Err(Error::InvalidPercentageSum);
    }

    Ok(total)
}
