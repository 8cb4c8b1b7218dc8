use soroban_sdk::{contracttype, log, Address, Env, Symbol};

use crate::error::Error;
use crate::events::{AdminTransferredEvent, FeeConfigUpdatedEvent, PauseChangedEvent};
use crate::fee::FeeConfig;

pub const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280; // ~1 day
pub const INSTANCE_BUMP_AMOUNT: u32 = 518_400; // ~30 days

#[contracttype]
#[derive(Clone)]
pub enum ConfigKey {
    Initialized,
    Admin,
    FeeConfig,
    NativeAsset,
    Paused,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&ConfigKey::Initialized)
}

/// Store the deployment configuration shared by every fee-aware contract
///
/// # Errors
/// - `AlreadyInitialized`: Configuration already stored
/// - `InvalidAddress`: Fee recipient is this contract
/// - `InvalidFeePercentage`: Fee exceeds base or base is zero
pub fn init_config(
    env: &Env,
    admin: &Address,
    fee_config: &FeeConfig,
    native_asset: &Address,
) -> Result<(), Error> {
    if is_initialized(env) {
        return Err(Error::AlreadyInitialized);
    }

    admin.require_auth();

    validate_fee_config(env, fee_config)?;

    env.storage().instance().set(&ConfigKey::Initialized, &true);
    env.storage().instance().set(&ConfigKey::Admin, admin);
    env.storage().instance().set(&ConfigKey::FeeConfig, fee_config);
    env.storage()
        .instance()
        .set(&ConfigKey::NativeAsset, native_asset);
    env.storage().instance().set(&ConfigKey::Paused, &false);
    bump_instance(env);

    Ok(())
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&ConfigKey::Admin)
        .ok_or(Error::NotInitialized)
}

/// Authenticate `caller` and check it is the stored administrator
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();

    let admin = get_admin(env)?;
    if *caller != admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn get_fee_config(env: &Env) -> Result<FeeConfig, Error> {
    env.storage()
        .instance()
        .get(&ConfigKey::FeeConfig)
        .ok_or(Error::NotInitialized)
}

pub fn get_native_asset(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&ConfigKey::NativeAsset)
        .ok_or(Error::NotInitialized)
}

fn validate_fee_config(env: &Env, config: &FeeConfig) -> Result<(), Error> {
    if config.fee_recipient == env.current_contract_address() {
        return Err(Error::InvalidAddress);
    }
    config.validate()
}

fn replace_fee_config(
    env: &Env,
    caller: &Address,
    new: FeeConfig,
) -> Result<FeeConfig, Error> {
    require_admin(env, caller)?;
    validate_fee_config(env, &new)?;

    let old = get_fee_config(env)?;
    env.storage().instance().set(&ConfigKey::FeeConfig, &new);
    bump_instance(env);

    log!(env, "fee config updated", new.fee_percentage, new.percentage_base);
    env.events().publish(
        (Symbol::new(env, "fee_updated"),),
        FeeConfigUpdatedEvent {
            old: old.clone(),
            new,
        },
    );

    Ok(old)
}

/// Point fee payouts at a new recipient, returning the previous one
///
/// # Errors
/// - `NotInitialized`: Contract not initialized
/// - `Unauthorized`: Caller is not admin
/// - `InvalidAddress`: Recipient is this contract
pub fn set_fee_recipient(
    env: &Env,
    caller: &Address,
    recipient: &Address,
) -> Result<Address, Error> {
    let mut config = get_fee_config(env)?;
    config.fee_recipient = recipient.clone();
    Ok(replace_fee_config(env, caller, config)?.fee_recipient)
}

/// Change the fee numerator, returning the previous one
///
/// # Errors
/// - `NotInitialized`: Contract not initialized
/// - `Unauthorized`: Caller is not admin
/// - `InvalidFeePercentage`: Fee exceeds the percentage base
pub fn set_fee_percentage(
    env: &Env,
    caller: &Address,
    fee_percentage: u32,
) -> Result<u32, Error> {
    let mut config = get_fee_config(env)?;
    config.fee_percentage = fee_percentage;
    Ok(replace_fee_config(env, caller, config)?.fee_percentage)
}

/// Change the fixed-point denominator, returning the previous one
///
/// # Errors
/// - `NotInitialized`: Contract not initialized
/// - `Unauthorized`: Caller is not admin
/// - `InvalidFeePercentage`: Base is zero or below the current fee
pub fn set_percentage_base(
    env: &Env,
    caller: &Address,
    percentage_base: u32,
) -> Result<u32, Error> {
    let mut config = get_fee_config(env)?;
    config.percentage_base = percentage_base;
    Ok(replace_fee_config(env, caller, config)?.percentage_base)
}

/// Hand the administrator role to another address
pub fn transfer_admin(
    env: &Env,
    caller: &Address,
    new_admin: &Address,
) -> Result<Address, Error> {
    require_admin(env, caller)?;

    env.storage().instance().set(&ConfigKey::Admin, new_admin);
    bump_instance(env);

    log!(env, "admin transferred", caller.clone(), new_admin.clone());
    env.events().publish(
        (Symbol::new(env, "admin_transferred"),),
        AdminTransferredEvent {
            old_admin: caller.clone(),
            new_admin: new_admin.clone(),
        },
    );

    Ok(caller.clone())
}

pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), Error> {
    require_admin(env, caller)?;

    env.storage().instance().set(&ConfigKey::Paused, &paused);
    bump_instance(env);

    log!(env, "pause flag changed", paused);
    env.events().publish(
        (Symbol::new(env, "pause_changed"),),
        PauseChangedEvent {
            admin: caller.clone(),
            paused,
        },
    );

    Ok(())
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<ConfigKey, bool>(&ConfigKey::Paused)
        .unwrap_or(false)
}

pub fn check_not_paused(env: &Env) -> Result<(), Error> {
    if is_paused(env) {
        return Err(Error::ContractPaused);
    }
    Ok(())
}
