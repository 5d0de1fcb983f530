use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{AccountId, FacultyProfile, ProfileEdit, PromotionStatus};
use super::eligibility::EligibilityAssessment;
use super::repository::{Notice, NoticePublisher, ProfileRepository, RepositoryError};
use super::transition::{PromotionAttempt, TransitionOutcome};
use super::validation::{validate_name, ProfileValidationError};

/// Service composing profile storage, the scoring rules, and owner notices.
///
/// Every operation takes the target account explicitly; resolving who is asking is the
/// caller's job.
pub struct PromotionService<R, N> {
    repository: Arc<R>,
    notices: Arc<N>,
}

impl<R, N> PromotionService<R, N>
where
    R: ProfileRepository + 'static,
    N: NoticePublisher + 'static,
{
    pub fn new(repository: Arc<R>, notices: Arc<N>) -> Self {
        Self {
            repository,
            notices,
        }
    }

    /// Create the default profile for a newly registered account.
    pub fn register(
        &self,
        account_id: AccountId,
        username: &str,
    ) -> Result<FacultyProfile, PromotionServiceError> {
        if account_id.0.trim().is_empty() {
            return Err(ProfileValidationError::BlankAccount.into());
        }
        let name = validate_name(username)?;

        let stored = self
            .repository
            .insert(FacultyProfile::new(account_id, name))?;
        info!(account = %stored.account_id, "faculty profile registered");

        self.publish(Notice::new("registration_complete", stored.account_id.clone()));
        Ok(stored)
    }

    /// Fetch a profile for dashboard and review responses.
    pub fn get(&self, account_id: &AccountId) -> Result<FacultyProfile, PromotionServiceError> {
        let profile = self
            .repository
            .fetch(account_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(profile)
    }

    /// All profiles ordered by account, for the administrative dashboard.
    pub fn list(&self) -> Result<Vec<FacultyProfile>, PromotionServiceError> {
        let mut profiles = self.repository.list()?;
        profiles.sort_by(|left, right| left.account_id.cmp(&right.account_id));
        Ok(profiles)
    }

    /// Apply an owner edit, recompute the score, and persist.
    pub fn update_profile(
        &self,
        account_id: &AccountId,
        edit: ProfileEdit,
    ) -> Result<FacultyProfile, PromotionServiceError> {
        let mut profile = self.get(account_id)?;
        let api_score = profile.apply_edit(edit)?;
        self.repository.update(profile.clone())?;
        info!(account = %account_id, api_score, "profile updated");

        self.publish(
            Notice::new("profile_updated", account_id.clone()).with_detail("api_score", api_score),
        );
        Ok(profile)
    }

    /// Recompute and persist the API score without any other change.
    pub fn recalculate_score(
        &self,
        account_id: &AccountId,
    ) -> Result<FacultyProfile, PromotionServiceError> {
        let mut profile = self.get(account_id)?;
        let previous = profile.api_score;
        let api_score = profile.recalculate_score();
        self.repository.update(profile.clone())?;
        debug!(account = %account_id, previous, api_score, "api score recalculated");
        Ok(profile)
    }

    /// Eligibility for the current rank. The refreshed score is persisted as a side effect.
    pub fn assess_eligibility(
        &self,
        account_id: &AccountId,
    ) -> Result<EligibilityAssessment, PromotionServiceError> {
        let mut profile = self.get(account_id)?;
        let assessment = profile.assess_eligibility();
        self.repository.update(profile)?;
        debug!(
            account = %account_id,
            eligible = assessment.eligible,
            unmet = assessment.unmet.len(),
            "eligibility assessed"
        );
        Ok(assessment)
    }

    pub fn is_eligible_for_promotion(
        &self,
        account_id: &AccountId,
    ) -> Result<bool, PromotionServiceError> {
        Ok(self.assess_eligibility(account_id)?.eligible)
    }

    /// Eligibility-gated promotion.
    pub fn promote(
        &self,
        account_id: &AccountId,
    ) -> Result<(FacultyProfile, PromotionAttempt), PromotionServiceError> {
        let mut profile = self.get(account_id)?;
        let attempt = profile.promote();
        self.repository.update(profile.clone())?;
        info!(
            account = %account_id,
            from = %attempt.outcome.previous_rank,
            to = %attempt.outcome.current_rank,
            status = %attempt.outcome.promotion_status,
            "promotion attempted"
        );

        self.publish(transition_notice(
            "promotion_attempted",
            account_id,
            &attempt.outcome,
        ));
        Ok((profile, attempt))
    }

    /// Administrative status override; bypasses eligibility by policy.
    pub fn set_promotion_status(
        &self,
        account_id: &AccountId,
        status: PromotionStatus,
    ) -> Result<(FacultyProfile, TransitionOutcome), PromotionServiceError> {
        let mut profile = self.get(account_id)?;
        let outcome = profile.override_promotion_status(status);
        self.repository.update(profile.clone())?;
        info!(
            account = %account_id,
            from = %outcome.previous_rank,
            to = %outcome.current_rank,
            status = %outcome.promotion_status,
            "promotion status overridden by administrator"
        );

        self.publish(transition_notice("promotion_status_set", account_id, &outcome));
        Ok((profile, outcome))
    }

    /// Publish after the profile is stored. Failures are logged, never returned.
    fn publish(&self, notice: Notice) {
        let template = notice.template.clone();
        let account = notice.account_id.clone();
        if let Err(err) = self.notices.publish(notice) {
            warn!(%account, template = %template, error = %err, "notice publish failed");
        }
    }
}

fn transition_notice(
    template: &str,
    account_id: &AccountId,
    outcome: &TransitionOutcome,
) -> Notice {
    Notice::new(template, account_id.clone())
        .with_detail("status", outcome.promotion_status)
        .with_detail("rank", &outcome.current_rank)
}

/// Error raised by the promotion service.
#[derive(Debug, thiserror::Error)]
pub enum PromotionServiceError {
    #[error(transparent)]
    Validation(#[from] ProfileValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
