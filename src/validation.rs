//! Input validation for staffing problems.
//!
//! Checks structural integrity of contributors and projects before
//! scheduling. Detects:
//! - Duplicate contributor names (names are identities)
//! - Duplicate project names
//! - Negative skill or role levels
//!
//! Validation is advisory: the scheduler itself trusts its input, and
//! behavior under duplicate names is undefined by contract. Callers
//! decide whether findings are fatal.

use crate::models::{Contributor, Project};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same name.
    DuplicateName,
    /// A skill or role level is below zero.
    NegativeLevel,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a staffing problem.
///
/// Checks:
/// 1. No duplicate contributor names
/// 2. No duplicate project names
/// 3. All contributor skill levels are >= 0
/// 4. All role required levels are >= 0
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(contributors: &[Contributor], projects: &[Project]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut contributor_names = HashSet::new();
    for c in contributors {
        if !contributor_names.insert(c.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate contributor name: {}", c.name),
            ));
        }
        for (role, &level) in &c.skills {
            if level < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeLevel,
                    format!("Contributor '{}' has negative level for '{role}'", c.name),
                ));
            }
        }
    }

    let mut project_names = HashSet::new();
    for p in projects {
        if !project_names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate project name: {}", p.name),
            ));
        }
        for role in &p.roles {
            if role.level < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeLevel,
                    format!(
                        "Project '{}' requires negative level for role '{}'",
                        p.name, role.name
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
