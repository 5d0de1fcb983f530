use super::domain::{AcademicRank, FacultyProfile, ProfileEdit};

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_DEPARTMENT_LENGTH: usize = 100;

/// Validation errors raised before a registration or profile edit touches storage.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("account id must not be blank")]
    BlankAccount,
    #[error("name must not be blank")]
    BlankName,
    #[error("name exceeds {max} characters (found {found})")]
    NameTooLong { max: usize, found: usize },
    #[error("department exceeds {max} characters (found {found})")]
    DepartmentTooLong { max: usize, found: usize },
    #[error("rank '{0}' is not one of the recognized ranks")]
    UnrecognizedRank(String),
}

pub(crate) fn validate_name(name: &str) -> Result<String, ProfileValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ProfileValidationError::BlankName);
    }

    let found = trimmed.chars().count();
    if found > MAX_NAME_LENGTH {
        return Err(ProfileValidationError::NameTooLong {
            max: MAX_NAME_LENGTH,
            found,
        });
    }

    Ok(trimmed.to_string())
}

fn validate_department(
    department: Option<&str>,
) -> Result<Option<String>, ProfileValidationError> {
    let Some(trimmed) = department.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    let found = trimmed.chars().count();
    if found > MAX_DEPARTMENT_LENGTH {
        return Err(ProfileValidationError::DepartmentTooLong {
            max: MAX_DEPARTMENT_LENGTH,
            found,
        });
    }

    Ok(Some(trimmed.to_string()))
}

impl FacultyProfile {
    /// Apply an owner edit and recompute the score. Nothing changes when validation fails.
    pub fn apply_edit(&mut self, edit: ProfileEdit) -> Result<u64, ProfileValidationError> {
        let name = validate_name(&edit.name)?;
        let department = validate_department(edit.department.as_deref())?;
        if let AcademicRank::Unrecognized(label) = &edit.current_rank {
            return Err(ProfileValidationError::UnrecognizedRank(label.clone()));
        }

        self.name = name;
        self.department = department;
        self.current_rank = edit.current_rank;
        self.record = edit.record;

        Ok(self.recalculate_score())
    }
}
