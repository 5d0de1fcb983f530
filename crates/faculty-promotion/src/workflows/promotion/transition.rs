use serde::{Deserialize, Serialize};

use super::domain::{AcademicRank, FacultyProfile, PromotionStatus};
use super::eligibility::EligibilityAssessment;

/// Forward-only rank progression shared by the promotion and override paths.
pub fn next_rank(rank: &AcademicRank) -> AcademicRank {
    match rank {
        AcademicRank::AssistantProfessor => AcademicRank::AssociateProfessor,
        AcademicRank::AssociateProfessor | AcademicRank::Professor => AcademicRank::Professor,
        AcademicRank::Unrecognized(label) => AcademicRank::Unrecognized(label.clone()),
    }
}

/// Rank and status before and after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    pub previous_rank: AcademicRank,
    pub current_rank: AcademicRank,
    pub previous_status: PromotionStatus,
    pub promotion_status: PromotionStatus,
}

impl TransitionOutcome {
    pub fn rank_changed(&self) -> bool {
        self.previous_rank != self.current_rank
    }
}

/// Result of an eligibility-gated promotion attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionAttempt {
    pub assessment: EligibilityAssessment,
    pub outcome: TransitionOutcome,
}

impl FacultyProfile {
    /// Advance one rank when eligible and mark the profile promoted; otherwise mark it not eligible.
    pub fn promote(&mut self) -> PromotionAttempt {
        let previous_rank = self.current_rank.clone();
        let previous_status = self.promotion_status;
        let assessment = self.assess_eligibility();

        if assessment.eligible {
            self.current_rank = next_rank(&self.current_rank);
            self.promotion_status = PromotionStatus::Promoted;
        } else {
            self.promotion_status = PromotionStatus::NotEligible;
        }

        PromotionAttempt {
            assessment,
            outcome: TransitionOutcome {
                previous_rank,
                current_rank: self.current_rank.clone(),
                previous_status,
                promotion_status: self.promotion_status,
            },
        }
    }

    /// Administrative status write that skips the eligibility gate.
    ///
    /// Setting `Promoted` also advances the rank one step; every other status leaves it as is.
    pub fn override_promotion_status(&mut self, status: PromotionStatus) -> TransitionOutcome {
        let previous_rank = self.current_rank.clone();
        let previous_status = self.promotion_status;

        if status == PromotionStatus::Promoted {
            self.current_rank = next_rank(&self.current_rank);
        }
        self.promotion_status = status;

        TransitionOutcome {
            previous_rank,
            current_rank: self.current_rank.clone(),
            previous_status,
            promotion_status: self.promotion_status,
        }
    }
}
