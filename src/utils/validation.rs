use crate::domain::model::{ParticipantId, PoolRoster};
use crate::utils::error::{Result, SantaError};
use std::collections::HashSet;

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

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
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

impl Validate for PoolRoster {
    /// Structural checks on a roster before a draw. The minimum-size rule
    /// is not checked here; the engine reports it as its own error kind.
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("pool.name", &self.name)?;

        let mut seen: HashSet<ParticipantId> = HashSet::new();
        for participant in &self.participants {
            validate_non_empty_string("participants.name", &participant.name)?;
            if !seen.insert(participant.id) {
                return Err(SantaError::ValidationError {
                    message: format!(
                        "duplicate participant id {} in pool '{}'",
                        participant.id, self.name
                    ),
                });
            }
        }

        for exclusion in &self.exclusions {
            if exclusion.giver == exclusion.receiver {
                return Err(SantaError::ValidationError {
                    message: format!(
                        "exclusion for participant {} lists itself as receiver",
                        exclusion.giver
                    ),
                });
            }
            // Exclusions must stay scoped to this pool's members
            for id in [exclusion.giver, exclusion.receiver] {
                if !seen.contains(&id) {
                    return Err(SantaError::ValidationError {
                        message: format!(
                            "exclusion references participant {} which is not in pool '{}'",
                            id, self.name
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}
