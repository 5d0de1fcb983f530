//! Faculty profile scoring, eligibility, and promotion workflows.
//!
//! The entity methods on [`FacultyProfile`] hold the rules; [`PromotionService`] loads the
//! target profile, applies one operation, persists it, and publishes an owner notice.
//! [`promotion_router`] exposes the service over HTTP.

pub mod domain;
pub mod eligibility;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod transition;
pub mod validation;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    AcademicRank, AccountId, FacultyProfile, ProfileEdit, PromotionStatus, ScholarlyRecord,
};
pub use eligibility::{EligibilityAssessment, RankCriteria, UnmetCriterion};
pub use repository::{
    Notice, NoticeError, NoticePublisher, ProfileRepository, RepositoryError,
};
pub use router::{promotion_router, RegistrationRequest, StatusOverrideRequest};
pub use scoring::{api_score, score_breakdown, ScoreBreakdown, ScoreComponent, ScoreFactor};
pub use service::{PromotionService, PromotionServiceError};
pub use transition::{next_rank, PromotionAttempt, TransitionOutcome};
pub use validation::ProfileValidationError;
pub use views::{ProfileView, ReviewView, RosterEntry};
