use faculty_promotion::workflows::promotion::{
    AccountId, FacultyProfile, Notice, NoticeError, NoticePublisher, ProfileRepository,
    RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<AccountId, FacultyProfile>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
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
        if guard.contains_key(&profile.account_id) {
            guard.insert(profile.account_id.clone(), profile);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
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

impl InMemoryProfileRepository {
    /// Load imported profiles, skipping accounts that already exist. Returns how many were added.
    pub(crate) fn seed(&self, profiles: Vec<FacultyProfile>) -> usize {
        let mut added = 0;
        for profile in profiles {
            let account = profile.account_id.clone();
            match self.insert(profile) {
                Ok(_) => added += 1,
                Err(err) => warn!(%account, error = %err, "skipping roster row"),
            }
        }
        added
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryNoticePublisher {
    events: Arc<Mutex<Vec<Notice>>>,
}

impl NoticePublisher for InMemoryNoticePublisher {
    fn publish(&self, notice: Notice) -> Result<(), NoticeError> {
        debug!(template = %notice.template, account = %notice.account_id, "notice queued");
        let mut guard = self.events.lock().expect("notice mutex poisoned");
        guard.push(notice);
        Ok(())
    }
}

impl InMemoryNoticePublisher {
    pub(crate) fn events(&self) -> Vec<Notice> {
        self.events.lock().expect("notice mutex poisoned").clone()
    }
}
