use serde::Serialize;

use super::domain::{AccountId, FacultyProfile};
use super::eligibility::EligibilityAssessment;
use super::scoring::{score_breakdown, ScoreBreakdown};

/// Profile as shown to its owner on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: FacultyProfile,
    pub rank_label: String,
    pub status_label: &'static str,
}

/// Reviewer view: the stored profile plus a fresh score trail and eligibility check.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    #[serde(flatten)]
    pub profile: FacultyProfile,
    pub score: ScoreBreakdown,
    pub eligibility: EligibilityAssessment,
    pub score_is_stale: bool,
}

/// One row of the administrative dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub account_id: AccountId,
    pub name: String,
    pub department: Option<String>,
    pub current_rank: String,
    pub api_score: u64,
    pub promotion_status: &'static str,
}

impl FacultyProfile {
    pub fn owner_view(&self) -> ProfileView {
        ProfileView {
            rank_label: self.current_rank.label().to_string(),
            status_label: self.promotion_status.label(),
            profile: self.clone(),
        }
    }

    /// Build the reviewer view without mutating the stored record.
    pub fn review_view(&self) -> ReviewView {
        let score = score_breakdown(&self.record);
        let mut snapshot = self.clone();
        let eligibility = snapshot.assess_eligibility();

        ReviewView {
            score_is_stale: score.total != self.api_score,
            profile: self.clone(),
            score,
            eligibility,
        }
    }

    pub fn roster_entry(&self) -> RosterEntry {
        RosterEntry {
            account_id: self.account_id.clone(),
            name: self.name.clone(),
            department: self.department.clone(),
            current_rank: self.current_rank.label().to_string(),
            api_score: self.api_score,
            promotion_status: self.promotion_status.label(),
        }
    }
}
