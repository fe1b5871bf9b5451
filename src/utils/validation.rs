use crate::core::feasibility::has_valid_assignment;
use crate::domain::model::Participant;
use crate::utils::error::{Result, SantaError};
use std::collections::HashSet;

pub const MIN_PARTICIPANTS: usize = 3;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Accepts `user@host` as well as `Name <user@host>`.
pub fn validate_email_address(field_name: &str, value: &str) -> Result<()> {
    value
        .parse::<lettre::message::Mailbox>()
        .map(|_| ())
        .map_err(|e| SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Not a valid email address: {}", e),
        })
}

/// 環境變數沒設定時 `${VAR}` 會原封不動留下來
pub fn validate_no_placeholder(field_name: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(SantaError::MissingConfigError {
            field: format!("{} (unresolved environment variable in '{}')", field_name, value),
        });
    }
    Ok(())
}

/// Checks a roster before any matching attempt is made.
pub fn validate_roster(
    participants: &[Participant],
    requires_email: bool,
    check_feasibility: bool,
) -> Result<()> {
    if participants.len() < MIN_PARTICIPANTS {
        return Err(SantaError::InfeasibleRoster {
            message: format!(
                "need at least {} participants, got {}",
                MIN_PARTICIPANTS,
                participants.len()
            ),
        });
    }

    let mut seen = HashSet::with_capacity(participants.len());
    for p in participants {
        if !seen.insert(p.id) {
            return Err(SantaError::InfeasibleRoster {
                message: format!("participant id {} is used more than once", p.id),
            });
        }
    }

    for p in participants {
        match p.excluded_id {
            Some(excluded) if excluded == p.id => {
                return Err(SantaError::InfeasibleRoster {
                    message: format!("{} excludes themselves", p.name),
                });
            }
            Some(excluded) if !seen.contains(&excluded) => {
                tracing::warn!(
                    "⚠️ {} excludes unknown participant id {}, ignoring",
                    p.name,
                    excluded
                );
            }
            _ => {}
        }

        if requires_email {
            match p.email.as_deref() {
                None => {
                    return Err(SantaError::MissingConfigError {
                        field: format!("email address for {}", p.name),
                    })
                }
                Some(email) => validate_email_address(&format!("email of {}", p.name), email)?,
            }
        }
    }

    if check_feasibility && !has_valid_assignment(participants) {
        return Err(SantaError::InfeasibleRoster {
            message: "no assignment satisfies every exclusion".to_string(),
        });
    }

    Ok(())
}
