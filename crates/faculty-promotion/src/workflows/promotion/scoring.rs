use serde::{Deserialize, Serialize};

use super::domain::{FacultyProfile, ScholarlyRecord};

pub const POINTS_PER_YEAR: u32 = 1;
pub const POINTS_PER_PUBLICATION: u32 = 5;
pub const POINTS_PER_CONFERENCE: u32 = 2;
pub const POINTS_PER_BOOK: u32 = 15;
pub const PHD_BONUS: u32 = 10;

/// Factors contributing to the API score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Experience,
    Publications,
    Conferences,
    Books,
    Doctorate,
}

/// Discrete contribution to the API score so reviewers can audit the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub count: u32,
    pub weight: u32,
    pub points: u64,
}

/// Score total plus the per-factor trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: u64,
    pub components: Vec<ScoreComponent>,
}

/// Pure API score calculation.
///
/// Counts are widened to `u64` first, so the result is exact for every `u32` input.
pub fn api_score(record: &ScholarlyRecord) -> u64 {
    score_breakdown(record).total
}

pub fn score_breakdown(record: &ScholarlyRecord) -> ScoreBreakdown {
    let components = vec![
        component(
            ScoreFactor::Experience,
            record.years_of_experience,
            POINTS_PER_YEAR,
        ),
        component(
            ScoreFactor::Publications,
            record.publications,
            POINTS_PER_PUBLICATION,
        ),
        component(
            ScoreFactor::Conferences,
            record.conferences_attended,
            POINTS_PER_CONFERENCE,
        ),
        component(ScoreFactor::Books, record.books_published, POINTS_PER_BOOK),
        component(
            ScoreFactor::Doctorate,
            u32::from(record.phd_completed),
            PHD_BONUS,
        ),
    ];

    let total: u64 = components
        .iter()
        .map(|part| part.points)
        .sum();

    ScoreBreakdown { total, components }
}

fn component(factor: ScoreFactor, count: u32, weight: u32) -> ScoreComponent {
    ScoreComponent {
        factor,
        count,
        weight,
        points: u64::from(count) * u64::from(weight),
    }
}

impl FacultyProfile {
    /// Refresh `api_score` from the current record and return it.
    pub fn recalculate_score(&mut self) -> u64 {
        self.api_score = api_score(&self.record);
        self.api_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(years: u32, pubs: u32, conferences: u32, books: u32, phd: bool) -> ScholarlyRecord {
        ScholarlyRecord {
            years_of_experience: years,
            publications: pubs,
            conferences_attended: conferences,
            books_published: books,
            phd_completed: phd,
        }
    }

    #[test]
    fn assistant_threshold_profile_scores_29() {
        assert_eq!(api_score(&record(4, 3, 0, 0, true)), 29);
    }

    #[test]
    fn associate_threshold_profile_scores_61() {
        assert_eq!(api_score(&record(5, 5, 3, 1, true)), 61);
    }

    #[test]
    fn empty_record_scores_zero() {
        assert_eq!(api_score(&ScholarlyRecord::default()), 0);
    }

    #[test]
    fn breakdown_components_sum_to_total() {
        let breakdown = score_breakdown(&record(7, 2, 4, 1, false));
        let summed: u64 = breakdown.components.iter().map(|part| part.points).sum();
        assert_eq!(breakdown.total, summed);
        assert_eq!(breakdown.total, 7 + 10 + 8 + 15);

        let doctorate = breakdown
            .components
            .iter()
            .find(|part| part.factor == ScoreFactor::Doctorate)
            .expect("doctorate component present");
        assert_eq!(doctorate.points, 0);
    }

    #[test]
    fn large_counts_score_exactly() {
        assert_eq!(
            api_score(&record(0, 1_000_000_000, 0, 0, false)),
            5_000_000_000
        );

        let max = u32::MAX;
        let breakdown = score_breakdown(&record(max, max, max, max, true));
        assert_eq!(breakdown.total, 23 * u64::from(max) + 10);
    }
}
