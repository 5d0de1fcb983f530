use std::sync::Arc;

use super::common::*;
use crate::workflows::promotion::domain::{AcademicRank, PromotionStatus};
use crate::workflows::promotion::repository::{ProfileRepository, RepositoryError};
use crate::workflows::promotion::validation::ProfileValidationError;
use crate::workflows::promotion::{PromotionService, PromotionServiceError};

#[test]
fn register_creates_default_profile_and_notice() {
    let (service, repository, notices) = build_service();

    let profile = service
        .register(account("u-17"), "jsmith")
        .expect("registration succeeds");

    assert_eq!(profile.name, "jsmith");
    assert_eq!(profile.current_rank, AcademicRank::AssistantProfessor);
    assert_eq!(profile.promotion_status, PromotionStatus::Pending);
    assert_eq!(repository.stored(&account("u-17")), profile);
    assert_eq!(notices.templates(), vec!["registration_complete".to_string()]);
}

#[test]
fn register_reports_conflicts() {
    let (service, _, _) = build_service();
    service
        .register(account("u-17"), "jsmith")
        .expect("first registration succeeds");

    match service.register(account("u-17"), "jsmith") {
        Err(PromotionServiceError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn register_rejects_blank_account() {
    let (service, repository, _) = build_service();

    match service.register(account("  "), "jsmith") {
        Err(PromotionServiceError::Validation(ProfileValidationError::BlankAccount)) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(repository.list().expect("list succeeds").is_empty());
}

#[test]
fn update_profile_persists_recalculated_score() {
    let (service, repository, notices) = build_service();
    service
        .register(account("u-17"), "jsmith")
        .expect("registration succeeds");

    let updated = service
        .update_profile(
            &account("u-17"),
            edit(AcademicRank::AssistantProfessor, record(4, 3, 0, 0, true)),
        )
        .expect("update succeeds");

    assert_eq!(updated.api_score, 29);
    assert_eq!(repository.stored(&account("u-17")).api_score, 29);

    let last = notices.events().pop().expect("notice published");
    assert_eq!(last.template, "profile_updated");
    assert_eq!(last.details.get("api_score").map(String::as_str), Some("29"));
}

#[test]
fn invalid_update_leaves_storage_untouched() {
    let (service, repository, _) = build_service();
    service
        .register(account("u-17"), "jsmith")
        .expect("registration succeeds");
    let before = repository.stored(&account("u-17"));

    let mut change = edit(AcademicRank::AssistantProfessor, record(9, 9, 9, 9, true));
    change.name.clear();

    assert!(matches!(
        service.update_profile(&account("u-17"), change),
        Err(PromotionServiceError::Validation(ProfileValidationError::BlankName))
    ));
    assert_eq!(repository.stored(&account("u-17")), before);
}

#[test]
fn recalculate_score_repairs_a_stale_value() {
    let (service, repository, _) = build_service();
    let mut stale = eligible_associate();
    stale.api_score = 3;
    repository.insert(stale.clone()).expect("seed profile");

    let refreshed = service
        .recalculate_score(&stale.account_id)
        .expect("recalculation succeeds");

    assert_eq!(refreshed.api_score, 61);
    assert_eq!(repository.stored(&stale.account_id).api_score, 61);
}

#[test]
fn eligibility_check_persists_fresh_score() {
    let (service, repository, _) = build_service();
    let seeded = eligible_assistant();
    repository.insert(seeded.clone()).expect("seed profile");

    assert!(service
        .is_eligible_for_promotion(&seeded.account_id)
        .expect("check succeeds"));
    let stored = repository.stored(&seeded.account_id);
    assert_eq!(stored.api_score, 29);
    assert_eq!(stored.promotion_status, PromotionStatus::Pending);
}

#[test]
fn promote_persists_rank_and_status() {
    let (service, repository, notices) = build_service();
    let seeded = eligible_assistant();
    repository.insert(seeded.clone()).expect("seed profile");

    let (profile, attempt) = service.promote(&seeded.account_id).expect("promotion runs");

    assert!(attempt.assessment.eligible);
    assert_eq!(profile.current_rank, AcademicRank::AssociateProfessor);
    let stored = repository.stored(&seeded.account_id);
    assert_eq!(stored.current_rank, AcademicRank::AssociateProfessor);
    assert_eq!(stored.promotion_status, PromotionStatus::Promoted);

    let last = notices.events().pop().expect("notice published");
    assert_eq!(last.template, "promotion_attempted");
    assert_eq!(
        last.details.get("rank").map(String::as_str),
        Some("Associate Professor")
    );
}

#[test]
fn promote_records_not_eligible() {
    let (service, repository, _) = build_service();
    service
        .register(account("u-3"), "newhire")
        .expect("registration succeeds");

    let (profile, _) = service.promote(&account("u-3")).expect("promotion runs");

    assert_eq!(profile.promotion_status, PromotionStatus::NotEligible);
    assert_eq!(
        repository.stored(&account("u-3")).current_rank,
        AcademicRank::AssistantProfessor
    );
}

#[test]
fn administrative_override_bypasses_eligibility() {
    let (service, repository, notices) = build_service();
    let mut seeded = profile(AcademicRank::AssociateProfessor, record(0, 0, 0, 0, false));
    seeded.account_id = account("u-9");
    repository.insert(seeded).expect("seed profile");

    let (profile, outcome) = service
        .set_promotion_status(&account("u-9"), PromotionStatus::Promoted)
        .expect("override succeeds");

    assert_eq!(profile.current_rank, AcademicRank::Professor);
    assert_eq!(outcome.previous_rank, AcademicRank::AssociateProfessor);
    assert_eq!(
        repository.stored(&account("u-9")).promotion_status,
        PromotionStatus::Promoted
    );
    assert_eq!(
        notices.templates().last().map(String::as_str),
        Some("promotion_status_set")
    );
}

#[test]
fn list_orders_profiles_by_account() {
    let (service, _, _) = build_service();
    for (id, name) in [("u-30", "c"), ("u-10", "a"), ("u-20", "b")] {
        service.register(account(id), name).expect("registration");
    }

    let ids: Vec<String> = service
        .list()
        .expect("list succeeds")
        .into_iter()
        .map(|profile| profile.account_id.0)
        .collect();
    assert_eq!(ids, vec!["u-10", "u-20", "u-30"]);
}

#[test]
fn get_propagates_not_found() {
    let (service, _, _) = build_service();

    match service.get(&account("missing")) {
        Err(PromotionServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn notice_failures_do_not_fail_persisted_changes() {
    let repository = Arc::new(MemoryRepository::default());
    let service = PromotionService::new(repository.clone(), Arc::new(OfflineNotices));

    service
        .register(account("u-5"), "offline")
        .expect("registration succeeds without notices");
    assert!(repository.fetch(&account("u-5")).expect("fetch").is_some());

    let profile = service
        .update_profile(
            &account("u-5"),
            edit(AcademicRank::AssistantProfessor, record(2, 1, 0, 0, false)),
        )
        .expect("edit succeeds without notices");
    assert_eq!(profile.api_score, 7);
}

#[test]
fn override_with_offline_notices_advances_rank_once() {
    let repository = Arc::new(MemoryRepository::default());
    let service = PromotionService::new(repository.clone(), Arc::new(OfflineNotices));
    service
        .register(account("u-6"), "offline")
        .expect("registration succeeds");

    let (profile, outcome) = service
        .set_promotion_status(&account("u-6"), PromotionStatus::Promoted)
        .expect("override succeeds without notices");
    assert_eq!(outcome.previous_rank, AcademicRank::AssistantProfessor);
    assert_eq!(profile.current_rank, AcademicRank::AssociateProfessor);
    assert_eq!(
        repository.stored(&account("u-6")).current_rank,
        AcademicRank::AssociateProfessor
    );
}

#[test]
fn repository_outages_propagate() {
    let service = PromotionService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotices::default()),
    );

    assert!(matches!(
        service.promote(&account("u-1")),
        Err(PromotionServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}
