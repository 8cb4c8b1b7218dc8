use soroban_sdk::{Address, Env};
use split_common::{ledger, AssetKind, Error};

use crate::storage::{Campaign, CampaignStatus, SECONDS_PER_DAY};

/// Validate campaign parameters and compute its deadline
///
/// Formula: deadline = now + duration_days × 86,400
pub fn validate_new_campaign(
    env: &Env,
    beneficiary: &Address,
    funding_goal: i128,
    duration_days: u64,
    asset: &AssetKind,
) -> Result<u64, Error> {
    if *beneficiary == env.current_contract_address() {
        return Err(Error::InvalidAddress);
    }

    if funding_goal <= 0 {
        return Err(Error::InvalidAmount);
    }

    if duration_days == 0 {
        return Err(Error::InvalidDuration);
    }

    ledger::validate_asset(env, asset)?;

    duration_days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| env.ledger().timestamp().checked_add(secs))
        .ok_or(Error::ArithmeticOverflow)
}

/// Check a campaign can take `amount` of the given asset kind right now
pub fn validate_contribution(
    campaign: &Campaign,
    amount: i128,
    now: u64,
    expects_token: bool,
) -> Result<(), Error> {
    if campaign.status != CampaignStatus::Active {
        return Err(Error::CampaignNotActive);
    }

    if now >= campaign.deadline {
        return Err(Error::CampaignDeadlinePassed);
    }

    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let is_token = matches!(campaign.asset, AssetKind::Token(_));
    if is_token != expects_token {
        return Err(Error::InvalidTokenAddress);
    }

    Ok(())
}
