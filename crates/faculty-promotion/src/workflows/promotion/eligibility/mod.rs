mod criteria;

pub use criteria::{criteria_for, RankCriteria};

use serde::{Deserialize, Serialize};

use super::domain::{AcademicRank, FacultyProfile, ScholarlyRecord};

/// Why a profile does not currently qualify for promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnmetCriterion {
    Experience { required: u32, actual: u32 },
    Publications { required: u32, actual: u32 },
    Conferences { required: u32, actual: u32 },
    Books { required: u32, actual: u32 },
    Doctorate,
    TerminalRank,
    UnrecognizedRank { label: String },
}

impl UnmetCriterion {
    pub fn summary(&self) -> String {
        match self {
            UnmetCriterion::Experience { required, actual } => {
                format!("years of experience {actual} < {required}")
            }
            UnmetCriterion::Publications { required, actual } => {
                format!("publications {actual} < {required}")
            }
            UnmetCriterion::Conferences { required, actual } => {
                format!("conferences attended {actual} < {required}")
            }
            UnmetCriterion::Books { required, actual } => {
                format!("books published {actual} < {required}")
            }
            UnmetCriterion::Doctorate => "PhD not completed".to_string(),
            UnmetCriterion::TerminalRank => "already at the highest rank".to_string(),
            UnmetCriterion::UnrecognizedRank { label } => {
                format!("rank '{label}' is not recognized")
            }
        }
    }
}

/// Eligibility decision with the trail of unmet criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityAssessment {
    pub rank: AcademicRank,
    pub eligible: bool,
    pub api_score: u64,
    pub unmet: Vec<UnmetCriterion>,
}

/// Rank-aware eligibility check. Ranks without criteria fail closed.
pub fn assess(rank: &AcademicRank, record: &ScholarlyRecord) -> Vec<UnmetCriterion> {
    let Some(criteria) = criteria_for(rank) else {
        return match rank {
            AcademicRank::Unrecognized(label) => vec![UnmetCriterion::UnrecognizedRank {
                label: label.clone(),
            }],
            _ => vec![UnmetCriterion::TerminalRank],
        };
    };

    let mut unmet = Vec::new();
    if record.years_of_experience < criteria.min_years_of_experience {
        unmet.push(UnmetCriterion::Experience {
            required: criteria.min_years_of_experience,
            actual: record.years_of_experience,
        });
    }
    if record.publications < criteria.min_publications {
        unmet.push(UnmetCriterion::Publications {
            required: criteria.min_publications,
            actual: record.publications,
        });
    }
    if record.conferences_attended < criteria.min_conferences_attended {
        unmet.push(UnmetCriterion::Conferences {
            required: criteria.min_conferences_attended,
            actual: record.conferences_attended,
        });
    }
    if record.books_published < criteria.min_books_published {
        unmet.push(UnmetCriterion::Books {
            required: criteria.min_books_published,
            actual: record.books_published,
        });
    }
    if criteria.requires_phd && !record.phd_completed {
        unmet.push(UnmetCriterion::Doctorate);
    }

    unmet
}

impl FacultyProfile {
    /// Refresh the score, then evaluate the criteria for the current rank.
    pub fn assess_eligibility(&mut self) -> EligibilityAssessment {
        let api_score = self.recalculate_score();
        let unmet = assess(&self.current_rank, &self.record);

        EligibilityAssessment {
            rank: self.current_rank.clone(),
            eligible: unmet.is_empty(),
            api_score,
            unmet,
        }
    }

    pub fn is_eligible_for_promotion(&mut self) -> bool {
        self.assess_eligibility().eligible
    }
}
