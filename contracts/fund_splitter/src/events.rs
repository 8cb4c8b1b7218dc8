use soroban_sdk::{contracttype, Address, Vec};

use crate::storage::{BeneficiaryShare, Distribution};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeneficiariesSetEvent {
    pub destination: Address,
    pub old_shares: Vec<BeneficiaryShare>,
    pub new_shares: Vec<BeneficiaryShare>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeneficiariesRemovedEvent {
    pub destination: Address,
    pub old_shares: Vec<BeneficiaryShare>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SplitAppliedEvent {
    pub payer: Address,
    pub destination: Address,
    pub asset: Address,
    pub total_amount: i128,
    pub distributions: Vec<Distribution>,
}
