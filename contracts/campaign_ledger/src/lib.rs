#![no_std]

mod events;
mod status;
mod storage;
mod validation;


use events::*;
use split_common::fee::split_fee;
use split_common::{admin, ledger, AssetKind, Error, FeeConfig};
use status::resolve_status;
use storage::{
    Campaign, CampaignStatus, CreationPolicy, LedgerPolicy, WithdrawalPolicy, MAX_CONTRIBUTORS,
};
use validation::{validate_contribution, validate_new_campaign};

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol, Vec};

#[contract]
pub struct CampaignLedger;

#[contractimpl]
impl CampaignLedger {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the ledger
    ///
    /// `policy` fixes, for the lifetime of the deployment, who may open
    /// campaigns and who may trigger a successful campaign's payout.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidAddress`: Fee recipient is this contract
    /// - `InvalidFeePercentage`: Fee exceeds base or base is zero
    pub fn initialize(
        env: Env,
        admin: Address,
        fee_recipient: Address,
        fee_percentage: u32,
        percentage_base: u32,
        native_asset: Address,
        policy: LedgerPolicy,
    ) -> Result<(), Error> {
        let fee_config = FeeConfig {
            fee_recipient,
            fee_percentage,
            percentage_base,
        };
        admin::init_config(&env, &admin, &fee_config, &native_asset)?;
        storage::set_policy(&env, &policy);
        env.storage()
            .instance()
            .set(&storage::DataKey::CampaignCounter, &0u64);

        Ok(())
    }

    /// Replace the platform fee recipient; returns the old one
    pub fn set_fee_recipient(
        env: Env,
        caller: Address,
        recipient: Address,
    ) -> Result<Address, Error> {
        admin::set_fee_recipient(&env, &caller, &recipient)
    }

    /// Replace the platform fee percentage; returns the old one
    pub fn set_fee_percentage(
        env: Env,
        caller: Address,
        fee_percentage: u32,
    ) -> Result<u32, Error> {
        admin::set_fee_percentage(&env, &caller, fee_percentage)
    }

    /// Replace the percentage base; returns the old one
    pub fn set_percentage_base(
        env: Env,
        caller: Address,
        percentage_base: u32,
    ) -> Result<u32, Error> {
        admin::set_percentage_base(&env, &caller, percentage_base)
    }

    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<Address, Error> {
        admin::transfer_admin(&env, &caller, &new_admin)
    }

    /// Pause campaign creation and contributions (emergency)
    ///
    /// Withdrawals and refunds stay open so pooled funds can always leave.
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        admin::set_paused(&env, &caller, true)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        admin::set_paused(&env, &caller, false)
    }

    // ============================================
    // CAMPAIGN CREATION
    // ============================================

    /// Open a campaign and return its id
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `Unauthorized`: Caller is not admin (AdminOnly) or not the
    ///   beneficiary (Open)
    /// - `InvalidAddress`: Beneficiary is this contract
    /// - `InvalidAmount`: funding_goal must be positive
    /// - `InvalidDuration`: duration_days must be positive
    /// - `InvalidTokenAddress`: Token is this contract
    pub fn create_campaign(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        beneficiary: Address,
        funding_goal: i128,
        duration_days: u64,
        asset: AssetKind,
    ) -> Result<u64, Error> {
        admin::check_not_paused(&env)?;

        caller.require_auth();

        let policy = storage::get_policy(&env)?;
        let allowed = match policy.creation {
            CreationPolicy::AdminOnly => caller == admin::get_admin(&env)?,
            CreationPolicy::Open => caller == beneficiary,
        };
        if !allowed {
            return Err(Error::Unauthorized);
        }

        let deadline =
            validate_new_campaign(&env, &beneficiary, funding_goal, duration_days, &asset)?;
        let campaign_id = storage::next_campaign_id(&env)?;

        let campaign = Campaign {
            id: campaign_id,
            title: title.clone(),
            description,
            beneficiary: beneficiary.clone(),
            funding_goal,
            deadline,
            created_at: env.ledger().timestamp(),
            current_amount: 0,
            total_raised: 0,
            status: CampaignStatus::Active,
            asset: asset.clone(),
        };

        storage::set_campaign(&env, &campaign);
        admin::bump_instance(&env);

        log!(&env, "campaign created", campaign_id, funding_goal, deadline);
        env.events().publish(
            (Symbol::new(&env, "campaign_created"), campaign_id),
            CampaignCreatedEvent {
                campaign_id,
                creator: caller,
                beneficiary,
                title,
                funding_goal,
                deadline,
                asset,
            },
        );

        Ok(campaign_id)
    }

    // ============================================
    // CONTRIBUTIONS
    // ============================================

    /// Contribute native asset to a campaign
    ///
    /// Reaching the funding goal moves the campaign to Successful in the
    /// same call.
    ///
    /// # Errors
    /// - `ContractPaused`: Contract is paused
    /// - `CampaignNotFound`: Campaign doesn't exist
    /// - `CampaignNotActive`: Campaign already resolved
    /// - `CampaignDeadlinePassed`: Deadline reached
    /// - `InvalidAmount`: amount must be positive
    /// - `InvalidTokenAddress`: Campaign raises a token, use `contribute_token`
    /// - `TooManyContributors`: Campaign has MAX_CONTRIBUTORS contributors
    /// - `InsufficientBalance`: Contributor cannot cover amount
    pub fn contribute(
        env: Env,
        contributor: Address,
        campaign_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        Self::record_contribution(&env, &contributor, campaign_id, amount, false)
    }

    /// Contribute a campaign's token, spending the allowance the
    /// contributor granted this contract
    ///
    /// # Errors
    /// Same as `contribute`, except `InvalidTokenAddress` is returned for
    /// native-asset campaigns, plus:
    /// - `InsufficientAllowance`: Approval below amount
    pub fn contribute_token(
        env: Env,
        contributor: Address,
        campaign_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        Self::record_contribution(&env, &contributor, campaign_id, amount, true)
    }

    // ============================================
    // RESOLUTION & SETTLEMENT
    // ============================================

    /// Resolve an Active campaign whose deadline has passed (or whose
    /// goal is met) and return its status. Anyone may call; once
    /// resolved, repeated calls change nothing.
    ///
    /// # Errors
    /// - `CampaignNotFound`: Campaign doesn't exist
    pub fn check_status(env: Env, campaign_id: u64) -> Result<CampaignStatus, Error> {
        let mut campaign = storage::get_campaign(&env, campaign_id)?;
        Self::refresh_status(&env, &mut campaign);
        Ok(campaign.status)
    }

    /// Pay a successful campaign's pool to its beneficiary, minus the
    /// platform fee. Returns the net amount paid.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `CampaignNotFound`: Campaign doesn't exist
    /// - `Unauthorized`: BeneficiaryOnly policy and caller is not the beneficiary
    /// - `CampaignNotSuccessful`: Campaign did not reach its goal (yet)
    /// - `NoFundsToWithdraw`: Pool already withdrawn
    /// - `TransferFailed`: A payout was rejected
    pub fn withdraw(env: Env, caller: Address, campaign_id: u64) -> Result<i128, Error> {
        caller.require_auth();

        let policy = storage::get_policy(&env)?;
        let mut campaign = storage::get_campaign(&env, campaign_id)?;

        if policy.withdrawal == WithdrawalPolicy::BeneficiaryOnly
            && caller != campaign.beneficiary
        {
            return Err(Error::Unauthorized);
        }

        Self::refresh_status(&env, &mut campaign);

        if campaign.status != CampaignStatus::Successful {
            return Err(Error::CampaignNotSuccessful);
        }

        if campaign.current_amount == 0 {
            return Err(Error::NoFundsToWithdraw);
        }

        let fee_config = admin::get_fee_config(&env)?;
        let (fee_amount, net_amount) = split_fee(campaign.current_amount, &fee_config)?;

        // Zero the pool before any payout leaves custody
        campaign.current_amount = 0;
        storage::set_campaign(&env, &campaign);

        let asset_id = ledger::asset_address(&env, &campaign.asset)?;
        ledger::push(&env, &asset_id, &campaign.beneficiary, net_amount)?;
        ledger::push(&env, &asset_id, &fee_config.fee_recipient, fee_amount)?;

        log!(&env, "campaign withdrawn", campaign_id, net_amount, fee_amount);
        env.events().publish(
            (Symbol::new(&env, "withdrawn"), campaign_id),
            WithdrawnEvent {
                campaign_id,
                beneficiary: campaign.beneficiary,
                fee_recipient: fee_config.fee_recipient,
                net_amount,
                fee_amount,
            },
        );

        Ok(net_amount)
    }

    /// Return a contributor's full contribution from a failed campaign.
    /// Anyone may trigger it; the funds only ever go to the contributor.
    /// Returns the amount refunded.
    ///
    /// # Errors
    /// - `CampaignNotFound`: Campaign doesn't exist
    /// - `CampaignNotFailed`: Campaign is Active or Successful
    /// - `NoContributionFound`: Nothing left to refund for this contributor
    /// - `TransferFailed`: The refund was rejected
    pub fn refund(env: Env, campaign_id: u64, contributor: Address) -> Result<i128, Error> {
        let mut campaign = storage::get_campaign(&env, campaign_id)?;
        Self::refresh_status(&env, &mut campaign);

        if campaign.status != CampaignStatus::Failed {
            return Err(Error::CampaignNotFailed);
        }

        let amount = storage::get_contribution(&env, campaign_id, &contributor);
        if amount <= 0 {
            return Err(Error::NoContributionFound);
        }

        // Clear the entry before the refund leaves custody
        storage::set_contribution(&env, campaign_id, &contributor, 0);
        campaign.current_amount = campaign
            .current_amount
            .checked_sub(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        storage::set_campaign(&env, &campaign);

        let asset_id = ledger::asset_address(&env, &campaign.asset)?;
        ledger::push(&env, &asset_id, &contributor, amount)?;

        log!(&env, "contribution refunded", campaign_id, amount);
        env.events().publish(
            (Symbol::new(&env, "refunded"), campaign_id, contributor.clone()),
            RefundedEvent {
                campaign_id,
                contributor,
                amount,
            },
        );

        Ok(amount)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Get campaign details as last stored
    pub fn get_details(env: Env, campaign_id: u64) -> Result<Campaign, Error> {
        storage::get_campaign(&env, campaign_id)
    }

    /// Get a contributor's outstanding contribution (0 after a refund)
    pub fn get_user_contribution(env: Env, campaign_id: u64, contributor: Address) -> i128 {
        storage::get_contribution(&env, campaign_id, &contributor)
    }

    /// Get contributors in order of their first contribution
    pub fn get_contributors(env: Env, campaign_id: u64) -> Vec<Address> {
        storage::get_contributors(&env, campaign_id)
    }

    /// Quote the (fee, net) split a withdrawal of `amount` would pay
    pub fn calculate_amounts(env: Env, amount: i128) -> Result<(i128, i128), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let fee_config = admin::get_fee_config(&env)?;
        split_fee(amount, &fee_config)
    }

    pub fn campaign_count(env: Env) -> u64 {
        storage::campaign_count(&env)
    }

    pub fn get_policy(env: Env) -> Result<LedgerPolicy, Error> {
        storage::get_policy(&env)
    }

    pub fn get_fee_config(env: Env) -> Result<FeeConfig, Error> {
        admin::get_fee_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        admin::get_admin(&env)
    }

    pub fn get_native_asset(env: Env) -> Result<Address, Error> {
        admin::get_native_asset(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        admin::is_paused(&env)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn record_contribution(
        env: &Env,
        contributor: &Address,
        campaign_id: u64,
        amount: i128,
        expects_token: bool,
    ) -> Result<(), Error> {
        admin::check_not_paused(env)?;

        contributor.require_auth();

        let mut campaign = storage::get_campaign(env, campaign_id)?;
        let now = env.ledger().timestamp();
        validate_contribution(&campaign, amount, now, expects_token)?;

        if !storage::has_contribution(env, campaign_id, contributor) {
            let mut contributors = storage::get_contributors(env, campaign_id);
            if contributors.len() >= MAX_CONTRIBUTORS {
                return Err(Error::TooManyContributors);
            }
            contributors.push_back(contributor.clone());
            storage::set_contributors(env, campaign_id, &contributors);
        }

        ledger::pull(env, &campaign.asset, contributor, amount)?;

        let contributor_total = storage::get_contribution(env, campaign_id, contributor)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        campaign.current_amount = campaign
            .current_amount
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        campaign.total_raised = campaign
            .total_raised
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        storage::set_contribution(env, campaign_id, contributor, contributor_total);

        env.events().publish(
            (Symbol::new(env, "contributed"), campaign_id, contributor.clone()),
            ContributedEvent {
                campaign_id,
                contributor: contributor.clone(),
                amount,
                contributor_total,
                current_amount: campaign.current_amount,
            },
        );

        // Crossing the goal resolves the campaign immediately
        if !Self::refresh_status(env, &mut campaign) {
            storage::set_campaign(env, &campaign);
        }

        Ok(())
    }

    /// Re-evaluate a campaign's status and persist it if it moved
    ///
    /// Returns true when the campaign was written back.
    fn refresh_status(env: &Env, campaign: &mut Campaign) -> bool {
        let now = env.ledger().timestamp();
        let Some(old_status) = resolve_status(campaign, now) else {
            return false;
        };

        storage::set_campaign(env, campaign);

        log!(env, "campaign resolved", campaign.id, campaign.status as u32);
        env.events().publish(
            (Symbol::new(env, "status_changed"), campaign.id),
            StatusChangedEvent {
                campaign_id: campaign.id,
                old_status,
                new_status: campaign.status,
                current_amount: campaign.current_amount,
            },
        );

        true
    }
}
