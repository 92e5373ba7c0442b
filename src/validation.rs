//! Input validation for simulation requests.
//!
//! The simulators assume a well-formed process set and perform no checks of
//! their own; this module is the boundary that enforces that contract
//! before dispatch. Detects:
//! - Empty process sets (averages would be undefined)
//! - Duplicate process ids
//! - Zero burst times (a process must require at least one tick)
//!
//! Non-negative arrival times and priorities are enforced by the types
//! themselves.

use std::collections::HashSet;

use crate::models::Process;

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
    /// Two processes share the same id.
    DuplicateId,
    /// A process has a burst time of zero.
    ZeroBurstTime,
    /// The process set is empty.
    EmptyProcessSet,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set before simulation.
///
/// Collects every detected issue rather than stopping at the first.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "at least one process is required",
        ));
    }

    let mut seen = HashSet::new();
    for p in processes {
        if !seen.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", p.id),
            ));
        }

        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurstTime,
                format!("Process '{}' has a burst time of 0", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
