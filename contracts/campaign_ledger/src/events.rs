use soroban_sdk::{contracttype, Address, String};
use split_common::AssetKind;

use crate::storage::CampaignStatus;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: u64,
    pub creator: Address,
    pub beneficiary: Address,
    pub title: String,
    pub funding_goal: i128,
    pub deadline: u64,
    pub asset: AssetKind,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributedEvent {
    pub campaign_id: u64,
    pub contributor: Address,
    pub amount: i128,
    pub contributor_total: i128,
    pub current_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusChangedEvent {
    pub campaign_id: u64,
    pub old_status: CampaignStatus,
    pub new_status: CampaignStatus,
    pub current_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub campaign_id: u64,
    pub beneficiary: Address,
    pub fee_recipient: Address,
    pub net_amount: i128,
    pub fee_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundedEvent {
    pub campaign_id: u64,
    pub contributor: Address,
    pub amount: i128,
}
