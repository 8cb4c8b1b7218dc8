#![no_std]

mod events;
mod split;
mod storage;
mod validation;


use events::*;
use split::compute_distributions;
use split_common::{admin, ledger, AssetKind, Error, FeeConfig};
use storage::{BeneficiaryShare, Distribution};
use validation::{validate_beneficiary_list, validate_split_request};

use soroban_sdk::{contract, contractimpl, log, Address, Env, Symbol, Vec};

#[contract]
pub struct FundSplitter;

#[contractimpl]
impl FundSplitter {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the splitter
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
    ) -> Result<(), Error> {
        let fee_config = FeeConfig {
            fee_recipient,
            fee_percentage,
            percentage_base,
        };
        admin::init_config(&env, &admin, &fee_config, &native_asset)
    }

    /// Replace the default-split fee recipient; returns the old one
    pub fn set_fee_recipient(
        env: Env,
        caller: Address,
        recipient: Address,
    ) -> Result<Address, Error> {
        admin::set_fee_recipient(&env, &caller, &recipient)
    }

    /// Replace the default-split fee percentage; returns the old one
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

    /// Pause splitting (emergency)
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        admin::set_paused(&env, &caller, true)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        admin::set_paused(&env, &caller, false)
    }

    // ============================================
    // BENEFICIARY REGISTRY
    // ============================================

    /// Register the beneficiary list for a destination, replacing any
    /// existing list
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `EmptyBeneficiaryList`: No shares given
    /// - `TooManyBeneficiaries`: More than MAX_BENEFICIARIES shares
    /// - `InvalidAddress`: Destination or a recipient is this contract
    /// - `InvalidPercentageSum`: Shares add up to more than the base
    pub fn set_beneficiary_list(
        env: Env,
        caller: Address,
        destination: Address,
        shares: Vec<BeneficiaryShare>,
    ) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;
        validation::validate_recipient(&env, &destination)?;

        let fee_config = admin::get_fee_config(&env)?;
        let allocated = validate_beneficiary_list(&env, &shares, fee_config.percentage_base)?;

        let old_shares =
            storage::get_beneficiaries(&env, &destination).unwrap_or(Vec::new(&env));
        storage::set_beneficiaries(&env, &destination, &shares);
        admin::bump_instance(&env);

        log!(&env, "beneficiaries set", destination, shares.len(), allocated);
        env.events().publish(
            (Symbol::new(&env, "beneficiaries_set"), destination.clone()),
            BeneficiariesSetEvent {
                destination,
                old_shares,
                new_shares: shares,
            },
        );

        Ok(())
    }

    /// Drop a destination's beneficiary list so it falls back to the
    /// default fee split
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `BeneficiaryListNotFound`: Destination has no list
    pub fn remove_beneficiary_list(
        env: Env,
        caller: Address,
        destination: Address,
    ) -> Result<(), Error> {
        admin::require_admin(&env, &caller)?;

        let old_shares = storage::get_beneficiaries(&env, &destination)
            .ok_or(Error::BeneficiaryListNotFound)?;
        storage::remove_beneficiaries(&env, &destination);
        admin::bump_instance(&env);

        log!(&env, "beneficiaries removed", destination, old_shares.len());
        env.events().publish(
            (Symbol::new(&env, "beneficiaries_removed"), destination.clone()),
            BeneficiariesRemovedEvent {
                destination,
                old_shares,
            },
        );

        Ok(())
    }

    // ============================================
    // SPLITTING
    // ============================================

    /// Split a native-asset payment from `payer` to `destination`
    ///
    /// The full amount is taken from the payer into custody and then paid
    /// out entry by entry. Returns the distributions that were paid.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidAddress`: Destination is this contract
    /// - `InvalidAmount`: total_amount must be positive
    /// - `InsufficientBalance`: Payer cannot cover total_amount
    /// - `TransferFailed`: A transfer was rejected
    pub fn apply(
        env: Env,
        payer: Address,
        destination: Address,
        total_amount: i128,
    ) -> Result<Vec<Distribution>, Error> {
        Self::execute(&env, &payer, &AssetKind::Native, &destination, total_amount)
    }

    /// Split a token payment from `payer` to `destination`
    ///
    /// The payer must have approved this contract for at least
    /// `total_amount`.
    ///
    /// # Errors
    /// Same as `apply`, plus:
    /// - `InvalidTokenAddress`: Token is this contract
    /// - `InsufficientAllowance`: Approval below total_amount
    pub fn apply_token(
        env: Env,
        payer: Address,
        token: Address,
        destination: Address,
        total_amount: i128,
    ) -> Result<Vec<Distribution>, Error> {
        Self::execute(
            &env,
            &payer,
            &AssetKind::Token(token),
            &destination,
            total_amount,
        )
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Quote the distributions `apply` would pay, without moving funds
    pub fn calculate(
        env: Env,
        destination: Address,
        total_amount: i128,
    ) -> Result<Vec<Distribution>, Error> {
        Self::quote(&env, &destination, total_amount)
    }

    /// Quote the default split as (fee, destination amount)
    pub fn calculate_amounts(env: Env, total_amount: i128) -> Result<(i128, i128), Error> {
        if total_amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let fee_config = admin::get_fee_config(&env)?;
        split_common::fee::split_fee(total_amount, &fee_config)
    }

    /// Get a destination's beneficiary list (empty when none is registered)
    pub fn get_beneficiary_list(env: Env, destination: Address) -> Vec<BeneficiaryShare> {
        storage::get_beneficiaries(&env, &destination).unwrap_or(Vec::new(&env))
    }

    pub fn has_beneficiary_list(env: Env, destination: Address) -> bool {
        storage::has_beneficiaries(&env, &destination)
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

    fn quote(
        env: &Env,
        destination: &Address,
        total_amount: i128,
    ) -> Result<Vec<Distribution>, Error> {
        validate_split_request(env, destination, total_amount)?;

        let fee_config = admin::get_fee_config(env)?;
        let shares = storage::get_beneficiaries(env, destination);
        compute_distributions(env, destination, total_amount, shares, &fee_config)
    }

    fn execute(
        env: &Env,
        payer: &Address,
        asset: &AssetKind,
        destination: &Address,
        total_amount: i128,
    ) -> Result<Vec<Distribution>, Error> {
        admin::check_not_paused(env)?;
        ledger::validate_asset(env, asset)?;

        payer.require_auth();

        let distributions = Self::quote(env, destination, total_amount)?;
        let asset_id = ledger::asset_address(env, asset)?;

        ledger::pull(env, asset, payer, total_amount)?;
        for distribution in distributions.iter() {
            ledger::push(env, &asset_id, &distribution.recipient, distribution.amount)?;
        }
        admin::bump_instance(env);

        log!(env, "split applied", destination.clone(), total_amount, distributions.len());
        env.events().publish(
            (Symbol::new(env, "split_applied"), destination.clone()),
            SplitAppliedEvent {
                payer: payer.clone(),
                destination: destination.clone(),
                asset: asset_id,
                total_amount,
                distributions: distributions.clone(),
            },
        );

        Ok(distributions)
    }
}
