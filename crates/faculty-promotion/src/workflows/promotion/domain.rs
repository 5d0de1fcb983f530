use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of the external identity record that owns a faculty profile.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Academic rank held by a faculty member.
///
/// Labels that do not match a known rank are carried as `Unrecognized` so a stored value
/// survives a round trip untouched; such profiles are never eligible and never advance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AcademicRank {
    #[default]
    AssistantProfessor,
    AssociateProfessor,
    Professor,
    Unrecognized(String),
}

impl AcademicRank {
    pub fn label(&self) -> &str {
        match self {
            AcademicRank::AssistantProfessor => "Assistant Professor",
            AcademicRank::AssociateProfessor => "Associate Professor",
            AcademicRank::Professor => "Professor",
            AcademicRank::Unrecognized(raw) => raw.as_str(),
        }
    }

    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        match label {
            "Assistant Professor" => AcademicRank::AssistantProfessor,
            "Associate Professor" => AcademicRank::AssociateProfessor,
            "Professor" => AcademicRank::Professor,
            _ => AcademicRank::Unrecognized(label.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, AcademicRank::Unrecognized(_))
    }
}

impl From<String> for AcademicRank {
    fn from(value: String) -> Self {
        AcademicRank::from_label(&value)
    }
}

impl From<AcademicRank> for String {
    fn from(value: AcademicRank) -> Self {
        match value {
            AcademicRank::Unrecognized(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for AcademicRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Workflow state of a profile's promotion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PromotionStatus {
    #[default]
    Pending,
    Eligible,
    #[serde(rename = "Not Eligible")]
    NotEligible,
    Promoted,
}

impl PromotionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PromotionStatus::Pending => "Pending",
            PromotionStatus::Eligible => "Eligible",
            PromotionStatus::NotEligible => "Not Eligible",
            PromotionStatus::Promoted => "Promoted",
        }
    }
}

impl fmt::Display for PromotionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counted achievements that feed the API score and the eligibility criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScholarlyRecord {
    #[serde(default)]
    pub years_of_experience: u32,
    #[serde(default)]
    pub publications: u32,
    #[serde(default)]
    pub conferences_attended: u32,
    #[serde(default)]
    pub books_published: u32,
    #[serde(default)]
    pub phd_completed: bool,
}

/// Persisted faculty profile, one per registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyProfile {
    pub account_id: AccountId,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub current_rank: AcademicRank,
    #[serde(flatten)]
    pub record: ScholarlyRecord,
    #[serde(default)]
    pub api_score: u64,
    #[serde(default)]
    pub promotion_status: PromotionStatus,
}

impl FacultyProfile {
    /// Fresh profile created at registration time.
    pub fn new(account_id: AccountId, name: impl Into<String>) -> Self {
        Self {
            account_id,
            name: name.into(),
            department: None,
            current_rank: AcademicRank::default(),
            record: ScholarlyRecord::default(),
            api_score: 0,
            promotion_status: PromotionStatus::Pending,
        }
    }
}

/// Owner-editable subset of a profile, as submitted from the dashboard form.
///
/// The API score is deliberately absent; it is always recomputed after an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEdit {
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub current_rank: AcademicRank,
    #[serde(flatten)]
    pub record: ScholarlyRecord,
}
