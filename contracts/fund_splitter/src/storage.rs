use soroban_sdk::{contracttype, Address, Env, Vec};

pub const MAX_BENEFICIARIES: u32 = 20;

pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960; // ~7 days
pub const PERSISTENT_BUMP_AMOUNT: u32 = 1_036_800; // ~60 days

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeneficiaryShare {
    /// Address paid this share
    pub recipient: Address,
    /// Numerator over the configured percentage base
    pub percentage: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Distribution {
    pub recipient: Address,
    pub amount: i128,
    /// True for the default fee split and for the destination's residual
    pub is_default: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Beneficiaries(Address), // destination → Vec<BeneficiaryShare>
}

pub fn get_beneficiaries(env: &Env, destination: &Address) -> Option<Vec<BeneficiaryShare>> {
    let key = DataKey::Beneficiaries(destination.clone());
    let shares = env.storage().persistent().get(&key);
    if shares.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    shares
}

pub fn set_beneficiaries(env: &Env, destination: &Address, shares: &Vec<BeneficiaryShare>) {
    let key = DataKey::Beneficiaries(destination.clone());
    env.storage().persistent().set(&key, shares);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn remove_beneficiaries(env: &Env, destination: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Beneficiaries(destination.clone()));
}

pub fn has_beneficiaries(env: &Env, destination: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Beneficiaries(destination.clone()))
}
