use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::{AccountId, ProfileEdit, PromotionStatus};
use super::repository::{NoticePublisher, ProfileRepository, RepositoryError};
use super::service::{PromotionService, PromotionServiceError};

/// Registration payload sent once the external identity record exists.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    pub account_id: String,
    pub username: String,
}

/// Administrative status selection.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusOverrideRequest {
    pub promotion_status: PromotionStatus,
}

/// Router builder exposing the faculty and administrative endpoints.
pub fn promotion_router<R, N>(service: Arc<PromotionService<R, N>>) -> Router
where
    R: ProfileRepository + 'static,
    N: NoticePublisher + 'static,
{
    Router::new()
        .route("/api/v1/faculty", post(register_handler::<R, N>))
        .route("/api/v1/faculty/:account_id", get(profile_handler::<R, N>))
        .route(
            "/api/v1/faculty/:account_id/profile",
            put(update_profile_handler::<R, N>),
        )
        .route(
            "/api/v1/faculty/:account_id/score",
            post(recalculate_handler::<R, N>),
        )
        .route(
            "/api/v1/faculty/:account_id/eligibility",
            get(eligibility_handler::<R, N>),
        )
        .route(
            "/api/v1/faculty/:account_id/promotion",
            post(promote_handler::<R, N>),
        )
        .route("/api/v1/admin/faculty", get(roster_handler::<R, N>))
        .route(
            "/api/v1/admin/faculty/:account_id",
            get(review_handler::<R, N>),
        )
        .route(
            "/api/v1/admin/faculty/:account_id/status",
            put(status_override_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn register_handler<R, N>(
    State(service): State<Arc<PromotionService<R, N>>>,
    Json(request): Json<RegistrationRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.register(AccountId(request.account_id), &request.username) {
        Ok(profile) => (StatusCode::CREATED, Json(profile.owner_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn profile_handler<R, N>(
    State(service): State<Arc<PromotionService<R, N>>>,
    Path(account_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.get(&AccountId(account_id)) {
        Ok(profile) => (StatusCode::OK, Json(profile.owner_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_profile_handler<R, N>(
    State(service): State<Arc<PromotionService<R, N>>>,
    Path(account_id): Path<String>,
    Json(edit): Json<ProfileEdit>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.update_profile(&AccountId(account_id), edit) {
        Ok(profile) => (StatusCode::OK, Json(profile.owner_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn recalculate_handler<R, N>(
    State(service): State<Arc<PromotionService<R, N>>>,
    Path(account_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.recalculate_score(&AccountId(account_id)) {
        Ok(profile) => (StatusCode::OK, Json(profile.owner_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn eligibility_handler<R, N>(
    State(service): State<Arc<PromotionService<R, N>>>,
    Path(account_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.assess_eligibility(&AccountId(account_id)) {
        Ok(assessment) => (StatusCode::OK, Json(assessment)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn promote_handler<R, N>(
    State(service): State<Arc<PromotionService<R, N>>>,
    Path(account_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.promote(&AccountId(account_id)) {
        Ok((profile, attempt)) => {
            let payload = json!({
                "profile": profile.owner_view(),
                "assessment": attempt.assessment,
                "outcome": attempt.outcome,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn roster_handler<R, N>(
    State(service): State<Arc<PromotionService<R, N>>>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.list() {
        Ok(profiles) => {
            let entries: Vec<_> = profiles.iter().map(|profile| profile.roster_entry()).collect();
            (StatusCode::OK, Json(entries)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn review_handler<R, N>(
    State(service): State<Arc<PromotionService<R, N>>>,
    Path(account_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.get(&AccountId(account_id)) {
        Ok(profile) => (StatusCode::OK, Json(profile.review_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn status_override_handler<R, N>(
    State(service): State<Arc<PromotionService<R, N>>>,
    Path(account_id): Path<String>,
    Json(request): Json<StatusOverrideRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NoticePublisher + 'static,
{
    match service.set_promotion_status(&AccountId(account_id), request.promotion_status) {
        Ok((profile, outcome)) => {
            let payload = json!({
                "profile": profile.owner_view(),
                "outcome": outcome,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: PromotionServiceError) -> Response {
    let status = match &err {
        PromotionServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PromotionServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        PromotionServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        PromotionServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_server_error() {
        warn!(error = %err, "promotion request failed");
    }

    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
