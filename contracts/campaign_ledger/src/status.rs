use crate::storage::{Campaign, CampaignStatus};

/// Status a campaign should hold at `now`
///
/// Only Active campaigns move. The goal is checked before the deadline,
/// so a campaign that reached its goal is Successful even when it is
/// evaluated long after the deadline.
pub fn evaluate_status(campaign: &Campaign, now: u64) -> CampaignStatus {
    if campaign.status != CampaignStatus::Active {
        return campaign.status;
    }

    if campaign.current_amount >= campaign.funding_goal {
        CampaignStatus::Successful
    } else if now >= campaign.deadline {
        CampaignStatus::Failed
    } else {
        CampaignStatus::Active
    }
}

/// Apply `evaluate_status`, returning the previous status when it changed
pub fn resolve_status(campaign: &mut Campaign, now: u64) -> Option<CampaignStatus> {
    let next = evaluate_status(campaign, now);
    if next == campaign.status {
        return None;
    }

    let previous = campaign.status;
    campaign.status = next;
    Some(previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Address, Env, String};
    use split_common::AssetKind;

    fn campaign(env: &Env, current_amount: i128, status: CampaignStatus) -> Campaign {
        Campaign {
            id: 1,
            title: String::from_str(env, "Well"),
            description: String::from_str(env, "Village water well"),
            beneficiary: Address::generate(env),
            funding_goal: 1_000,
            deadline: 2_000,
            created_at: 1_000,
            current_amount,
            total_raised: current_amount,
            status,
            asset: AssetKind::Native,
        }
    }

    #[test]
    fn test_active_before_deadline() {
        let env = Env::default();
        let c = campaign(&env, 500, CampaignStatus::Active);
        assert_eq!(evaluate_status(&c, 1_999), CampaignStatus::Active);
    }

    #[test]
    fn test_goal_met_is_successful() {
        let env = Env::default();
        let c = campaign(&env, 1_000, CampaignStatus::Active);
        assert_eq!(evaluate_status(&c, 1_500), CampaignStatus::Successful);
        assert_eq!(evaluate_status(&c, 5_000), CampaignStatus::Successful);
    }

    #[test]
    fn test_deadline_below_goal_fails() {
        let env = Env::default();
        let c = campaign(&env, 999, CampaignStatus::Active);
        // Deadline is inclusive
        assert_eq!(evaluate_status(&c, 2_000), CampaignStatus::Failed);
    }

    #[test]
    fn test_resolved_status_never_moves() {
        let env = Env::default();

        let mut withdrawn = campaign(&env, 0, CampaignStatus::Successful);
        assert_eq!(resolve_status(&mut withdrawn, 9_999), None);
        assert_eq!(withdrawn.status, CampaignStatus::Successful);

        let mut failed = campaign(&env, 5_000, CampaignStatus::Failed);
        assert_eq!(resolve_status(&mut failed, 9_999), None);
        assert_eq!(failed.status, CampaignStatus::Failed);
    }

    #[test]
    fn test_resolve_reports_previous_status() {
        let env = Env::default();
        let mut c = campaign(&env, 10, CampaignStatus::Active);

        assert_eq!(resolve_status(&mut c, 2_500), Some(CampaignStatus::Active));
        assert_eq!(c.status, CampaignStatus::Failed);
        assert_eq!(resolve_status(&mut c, 2_600), None);
    }
}
