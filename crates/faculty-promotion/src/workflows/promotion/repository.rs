use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AccountId, FacultyProfile};

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ProfileRepository: Send + Sync {
    fn insert(&self, profile: FacultyProfile) -> Result<FacultyProfile, RepositoryError>;
    fn update(&self, profile: FacultyProfile) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AccountId) -> Result<Option<FacultyProfile>, RepositoryError>;
    fn list(&self) -> Result<Vec<FacultyProfile>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("profile already exists")]
    Conflict,
    #[error("profile not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for user-facing workflow messages (dashboard banners, e-mail adapters).
pub trait NoticePublisher: Send + Sync {
    fn publish(&self, notice: Notice) -> Result<(), NoticeError>;
}

/// Message recorded for a profile owner after a workflow step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub template: String,
    pub account_id: AccountId,
    pub details: BTreeMap<String, String>,
    pub issued_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(template: &str, account_id: AccountId) -> Self {
        Self {
            template: template.to_string(),
            account_id,
            details: BTreeMap::new(),
            issued_at: Utc::now(),
        }
    }

    pub fn with_detail(mut self, key: &str, value: impl ToString) -> Self {
        self.details.insert(key.to_string(), value.to_string());
        self
    }
}

/// Notice dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NoticeError {
    #[error("notice transport unavailable: {0}")]
    Transport(String),
}
