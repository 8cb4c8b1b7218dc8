use soroban_sdk::{Address, Env, Vec};
use split_common::fee::{percentage_of, split_fee};
use split_common::{Error, FeeConfig};

use crate::storage::{BeneficiaryShare, Distribution};

/// Build the payout list for `total_amount` sent to `destination`
///
/// With a registered beneficiary list the shares are paid in list order
/// and `destination` keeps the remainder. Without one, the default fee
/// split applies.
pub fn compute_distributions(
    env: &Env,
    destination: &Address,
    total_amount: i128,
    shares: Option<Vec<BeneficiaryShare>>,
    fee_config: &FeeConfig,
) -> Result<Vec<Distribution>, Error> {
    match shares {
        Some(shares) => split_by_shares(
            env,
            destination,
            total_amount,
            &shares,
            fee_config.percentage_base,
        ),
        None => default_split(env, destination, total_amount, fee_config),
    }
}

/// Pay each share `percentage × total / base`, rounded down
///
/// Example (base 10,000, total 1,000):
/// - [(B1, 2000), (B2, 3000)] → B1: 200, B2: 300, destination: 500
/// - [(B1, 6000), (B2, 4000)] → B1: 600, B2: 400, nothing for destination
///
/// A partial allocation leaves the destination the residual, rounding
/// loss included. A full allocation has no residual entry, so the last
/// share with a nonzero percentage absorbs the rounding loss instead.
pub fn split_by_shares(
    env: &Env,
    destination: &Address,
    total_amount: i128,
    shares: &Vec<BeneficiaryShare>,
    percentage_base: u32,
) -> Result<Vec<Distribution>, Error> {
    let mut distributions = Vec::new(env);
    let mut distributed: i128 = 0;
    let mut allocated: u32 = 0;
    let mut last_funded: Option<u32> = None;

    for share in shares.iter() {
        // Base may have shrunk since the list was registered
        allocated = allocated
            .checked_add(share.percentage)
            .ok_or(Error::InvalidPercentageSum)?;
        if allocated > percentage_base {
            return Err(Error::InvalidPercentageSum);
        }

        let amount = percentage_of(total_amount, share.percentage, percentage_base)?;
        distributed = distributed
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        if share.percentage > 0 {
            last_funded = Some(distributions.len());
        }
        distributions.push_back(Distribution {
            recipient: share.recipient,
            amount,
            is_default: false,
        });
    }

    let residual = total_amount
        .checked_sub(distributed)
        .ok_or(Error::ArithmeticOverflow)?;

    if allocated < percentage_base {
        distributions.push_back(Distribution {
            recipient: destination.clone(),
            amount: residual,
            is_default: true,
        });
    } else if let Some(index) = last_funded.filter(|_| residual > 0) {
        if let Some(mut last) = distributions.get(index) {
            last.amount = last
                .amount
                .checked_add(residual)
                .ok_or(Error::ArithmeticOverflow)?;
            distributions.set(index, last);
        }
    }

    Ok(distributions)
}

/// Two-way split between the platform fee recipient and the destination
pub fn default_split(
    env: &Env,
    destination: &Address,
    total_amount: i128,
    fee_config: &FeeConfig,
) -> Result<Vec<Distribution>, Error> {
    let (fee_amount, destination_amount) = split_fee(total_amount, fee_config)?;

    let mut distributions = Vec::new(env);
    distributions.push_back(Distribution {
        recipient: fee_config.fee_recipient.clone(),
        amount: fee_amount,
        is_default: true,
    });
    distributions.push_back(Distribution {
        recipient: destination.clone(),
        amount: destination_amount,
        is_default: true,
    });

    Ok(distributions)
}
