use serde::{Deserialize, Serialize};

use super::super::domain::AcademicRank;

/// Minimum achievements required to leave a given rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankCriteria {
    pub min_years_of_experience: u32,
    pub min_publications: u32,
    pub min_conferences_attended: u32,
    pub min_books_published: u32,
    pub requires_phd: bool,
}

const ASSISTANT_PROFESSOR: RankCriteria = RankCriteria {
    min_years_of_experience: 4,
    min_publications: 3,
    min_conferences_attended: 0,
    min_books_published: 0,
    requires_phd: true,
};

const ASSOCIATE_PROFESSOR: RankCriteria = RankCriteria {
    min_years_of_experience: 5,
    min_publications: 5,
    min_conferences_attended: 3,
    min_books_published: 1,
    requires_phd: true,
};

/// Criteria for promotion out of `rank`; `None` for the terminal rank and unknown labels.
pub fn criteria_for(rank: &AcademicRank) -> Option<RankCriteria> {
    match rank {
        AcademicRank::AssistantProfessor => Some(ASSISTANT_PROFESSOR),
        AcademicRank::AssociateProfessor => Some(ASSOCIATE_PROFESSOR),
        AcademicRank::Professor | AcademicRank::Unrecognized(_) => None,
    }
}
