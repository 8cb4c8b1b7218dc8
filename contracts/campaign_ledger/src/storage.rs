use soroban_sdk::{contracttype, Address, Env, String, Vec};
use split_common::{AssetKind, Error};

// Constants
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const MAX_CONTRIBUTORS: u32 = 1_000;

pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960; // ~7 days
pub const PERSISTENT_BUMP_AMOUNT: u32 = 1_036_800; // ~60 days

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Accepting contributions until the goal or the deadline is reached
    Active = 0,
    /// Goal reached, beneficiary can be paid once
    Successful = 1,
    /// Deadline passed below goal, contributors can be refunded
    Failed = 2,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CreationPolicy {
    /// Only the administrator opens campaigns, for any beneficiary
    AdminOnly = 0,
    /// Anyone opens a campaign that pays themselves
    Open = 1,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WithdrawalPolicy {
    /// Anyone may trigger the payout to the beneficiary
    Permissionless = 0,
    /// Only the beneficiary may trigger the payout
    BeneficiaryOnly = 1,
}

/// Authorization rules chosen once at deployment
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerPolicy {
    pub creation: CreationPolicy,
    pub withdrawal: WithdrawalPolicy,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Sequential identifier, starting at 1
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Receives the pooled funds (minus fee) on success
    pub beneficiary: Address,
    /// Amount that must be raised before the deadline
    pub funding_goal: i128,
    /// Unix timestamp after which contributions stop
    pub deadline: u64,
    /// Unix timestamp when the campaign was created
    pub created_at: u64,
    /// Funds held for this campaign; zeroed by withdraw, reduced by refunds
    pub current_amount: i128,
    /// Every unit ever contributed (never reduced)
    pub total_raised: i128,
    pub status: CampaignStatus,
    pub asset: AssetKind,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Policy,
    CampaignCounter,
    Campaign(u64),              // campaign_id → Campaign
    Contribution(u64, Address), // (campaign_id, contributor) → i128
    Contributors(u64),          // campaign_id → Vec<Address>, first-contribution order
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(
        key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_policy(env: &Env) -> Result<LedgerPolicy, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Policy)
        .ok_or(Error::NotInitialized)
}

pub fn set_policy(env: &Env, policy: &LedgerPolicy) {
    env.storage().instance().set(&DataKey::Policy, policy);
}

pub fn campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCounter)
        .unwrap_or(0)
}

/// Reserve the next campaign id
pub fn next_campaign_id(env: &Env) -> Result<u64, Error> {
    let id = campaign_count(env)
        .checked_add(1)
        .ok_or(Error::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::CampaignCounter, &id);
    Ok(id)
}

pub fn get_campaign(env: &Env, campaign_id: u64) -> Result<Campaign, Error> {
    let key = DataKey::Campaign(campaign_id);
    let campaign = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(campaign)
}

pub fn set_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    bump_persistent(env, &key);
}

pub fn get_contribution(env: &Env, campaign_id: u64, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

pub fn has_contribution(env: &Env, campaign_id: u64, contributor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Contribution(campaign_id, contributor.clone()))
}

/// Entries stay in place at zero after a refund so the contributor is
/// still known to the campaign.
pub fn set_contribution(env: &Env, campaign_id: u64, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(campaign_id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

pub fn get_contributors(env: &Env, campaign_id: u64) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Contributors(campaign_id))
        .unwrap_or(Vec::new(env))
}

pub fn set_contributors(env: &Env, campaign_id: u64, contributors: &Vec<Address>) {
    let key = DataKey::Contributors(campaign_id);
    env.storage().persistent().set(&key, contributors);
    bump_persistent(env, &key);
}
