use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::promotion::domain::{
    AcademicRank, AccountId, FacultyProfile, ProfileEdit, ScholarlyRecord,
};
use crate::workflows::promotion::repository::{
    Notice, NoticeError, NoticePublisher, ProfileRepository, RepositoryError,
};
use crate::workflows::promotion::{promotion_router, PromotionService};

pub(super) fn record(
    years: u32,
    publications: u32,
    conferences: u32,
    books: u32,
    phd: bool,
) -> ScholarlyRecord {
    ScholarlyRecord {
        years_of_experience: years,
        publications,
        conferences_attended: conferences,
        books_published: books,
        phd_completed: phd,
    }
}

pub(super) fn profile(rank: AcademicRank, record: ScholarlyRecord) -> FacultyProfile {
    let mut profile = FacultyProfile::new(AccountId("fac-001".to_string()), "Dana Whitfield");
    profile.department = Some("Chemistry".to_string());
    profile.current_rank = rank;
    profile.record = record;
    profile
}

/// Assistant professor exactly at the promotion thresholds.
pub(super) fn eligible_assistant() -> FacultyProfile {
    profile(AcademicRank::AssistantProfessor, record(4, 3, 0, 0, true))
}

/// Associate professor exactly at the promotion thresholds.
pub(super) fn eligible_associate() -> FacultyProfile {
    profile(AcademicRank::AssociateProfessor, record(5, 5, 3, 1, true))
}

pub(super) fn edit(rank: AcademicRank, record: ScholarlyRecord) -> ProfileEdit {
    ProfileEdit {
        name: "Dana Whitfield".to_string(),
        department: Some("Chemistry".to_string()),
        current_rank: rank,
        record,
    }
}

pub(super) fn account(id: &str) -> AccountId {
    AccountId(id.to_string())
}

pub(super) fn build_service() -> (
    PromotionService<MemoryRepository, MemoryNotices>,
    Arc<MemoryRepository>,
    Arc<MemoryNotices>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notices = Arc::new(MemoryNotices::default());
    let service = PromotionService::new(repository.clone(), notices.clone());
    (service, repository, notices)
}

pub(super) fn router_with_service(
    service: PromotionService<MemoryRepository, MemoryNotices>,
) -> axum::Router {
    promotion_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AccountId, FacultyProfile>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self, id: &AccountId) -> FacultyProfile {
        self.fetch(id)
            .expect("fetch succeeds")
            .expect("record present")
    }
}

impl ProfileRepository for MemoryRepository {
    fn insert(&self, profile: FacultyProfile) -> Result<FacultyProfile, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&profile.account_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(profile.account_id.clone(), profile.clone());
        Ok(profile)
    }

    fn update(&self, profile: FacultyProfile) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(profile.account_id.clone(), profile);
        Ok(())
    }

    fn fetch(&self, id: &AccountId) -> Result<Option<FacultyProfile>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<FacultyProfile>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotices {
    events: Arc<Mutex<Vec<Notice>>>,
}

impl MemoryNotices {
    pub(super) fn events(&self) -> Vec<Notice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }

    pub(super) fn templates(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .map(|notice| notice.template)
            .collect()
    }
}

impl NoticePublisher for MemoryNotices {
    fn publish(&self, notice: Notice) -> Result<(), NoticeError> {
        self.events
            .lock()
            .expect("notice mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct OfflineNotices;

impl NoticePublisher for OfflineNotices {
    fn publish(&self, _notice: Notice) -> Result<(), NoticeError> {
        Err(NoticeError::Transport("smtp relay offline".to_string()))
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn insert(&self, _profile: FacultyProfile) -> Result<FacultyProfile, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _profile: FacultyProfile) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AccountId) -> Result<Option<FacultyProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<FacultyProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
