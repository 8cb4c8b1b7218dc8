use soroban_sdk::{contracttype, token, Address, Env};

use crate::admin::get_native_asset;
use crate::error::Error;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssetKind {
    /// The network's native asset (its Stellar Asset Contract)
    Native,
    /// Any token implementing the standard token interface
    Token(Address),
}

/// Reject token addresses that point back at this contract or do not
/// answer the token interface
pub fn validate_asset(env: &Env, asset: &AssetKind) -> Result<(), Error> {
    match asset {
        AssetKind::Native => Ok(()),
        AssetKind::Token(token) => {
            if *token == env.current_contract_address() {
                return Err(Error::InvalidTokenAddress);
            }
            match token::Client::new(env, token).try_decimals() {
                Ok(Ok(_)) => Ok(()),
                _ => Err(Error::InvalidTokenAddress),
            }
        }
    }
}

/// Resolve an asset kind to the token contract that moves it
pub fn asset_address(env: &Env, asset: &AssetKind) -> Result<Address, Error> {
    match asset {
        AssetKind::Native => get_native_asset(env),
        AssetKind::Token(token) => Ok(token.clone()),
    }
}

/// Move `amount` of `asset` from `from` into this contract's custody
///
/// Native transfers are authorized by `from` directly. Token transfers
/// spend the allowance `from` granted to this contract, which is checked
/// up front together with the balance so nothing moves on a shortfall.
pub fn pull(env: &Env, asset: &AssetKind, from: &Address, amount: i128) -> Result<(), Error> {
    let asset_id = asset_address(env, asset)?;
    let client = token::Client::new(env, &asset_id);
    let custody = env.current_contract_address();

    let balance = match client.try_balance(from) {
        Ok(Ok(balance)) => balance,
        _ => return Err(Error::InvalidTokenAddress),
    };
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }

    let result = match asset {
        AssetKind::Native => client.try_transfer(from, &custody, &amount),
        AssetKind::Token(_) => {
            let allowance = match client.try_allowance(from, &custody) {
                Ok(Ok(allowance)) => allowance,
                _ => return Err(Error::InvalidTokenAddress),
            };
            if allowance < amount {
                return Err(Error::InsufficientAllowance);
            }
            client.try_transfer_from(&custody, from, &custody, &amount)
        }
    };

    match result {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

/// Pay `amount` of the token at `asset_id` out of custody to `to`
///
/// Zero amounts are skipped.
pub fn push(env: &Env, asset_id: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }

    let client = token::Client::new(env, asset_id);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}
