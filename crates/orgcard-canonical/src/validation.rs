use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::Person;

/// Failure classes shared by every orgcard error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A required field is absent or empty.
    MissingRequiredField,
    /// A numeric value lies outside its allowed range.
    OutOfRangeValue,
    /// A value does not have the declared shape.
    TypeMismatch,
    /// Wire text is structurally broken.
    MalformedDocument,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::MissingRequiredField => "MissingRequiredField",
            ErrorKind::OutOfRangeValue => "OutOfRangeValue",
            ErrorKind::TypeMismatch => "TypeMismatch",
            ErrorKind::MalformedDocument => "MalformedDocument",
        };
        f.pad(name)
    }
}

/// Location of a value inside a raw document, e.g. `people[1].jobs[0].fte`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path extended with a mapping key.
    pub fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    /// Path extended with a sequence index.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        match segments.last_mut() {
            Some(last) => last.push_str(&format!("[{}]", index)),
            None => segments.push(format!("[{}]", index)),
        }
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Validation failures found while normalizing or checking a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is absent.
    #[error("{path}: missing required field `{field}`")]
    MissingRequiredField {
        /// Location of the owning mapping.
        path: String,
        /// Canonical field name.
        field: &'static str,
    },
    /// A value is outside its allowed range.
    #[error("{path}: {field} ({value}) is out of range")]
    OutOfRangeValue {
        /// Location of the value.
        path: String,
        /// Canonical field name.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A value has the wrong shape.
    #[error("{path}: {field} must be {expected}")]
    TypeMismatch {
        /// Location of the value.
        path: String,
        /// Canonical field name.
        field: &'static str,
        /// Description of the accepted shape.
        expected: &'static str,
    },
}

impl ValidationError {
    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            ValidationError::OutOfRangeValue { .. } => ErrorKind::OutOfRangeValue,
            ValidationError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    /// Location the error refers to.
    pub fn path(&self) -> &str {
        match self {
            ValidationError::MissingRequiredField { path, .. }
            | ValidationError::OutOfRangeValue { path, .. }
            | ValidationError::TypeMismatch { path, .. } => path,
        }
    }

    pub(crate) fn missing(path: &FieldPath, field: &'static str) -> Self {
        ValidationError::MissingRequiredField {
            path: path.to_string(),
            field,
        }
    }

    pub(crate) fn mismatch(path: &FieldPath, field: &'static str, expected: &'static str) -> Self {
        ValidationError::TypeMismatch {
            path: path.to_string(),
            field,
            expected,
        }
    }
}

/// Inclusive bounds for a job's `fte`.
pub const FTE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=1.0;

/// Checks that a uid is present and non-blank.
pub fn check_uid(uid: &str, path: &FieldPath) -> Result<(), ValidationError> {
    if uid.trim().is_empty() {
        return Err(ValidationError::missing(path, "uid"));
    }
    Ok(())
}

/// Checks that an `fte` lies within [`FTE_RANGE`].
pub fn check_fte(fte: f64, path: &FieldPath) -> Result<(), ValidationError> {
    if !FTE_RANGE.contains(&fte) {
        return Err(ValidationError::OutOfRangeValue {
            path: path.to_string(),
            field: "fte",
            value: fte.to_string(),
        });
    }
    Ok(())
}

/// Re-checks an already constructed person, returning every failure.
///
/// Normalized people always pass; this guards people assembled in code.
pub fn validate_person(person: &Person) -> Vec<ValidationError> {
    let root = FieldPath::root();
    let mut errors = Vec::new();
    if let Err(err) = check_uid(&person.uid, &root) {
        errors.push(err);
    }
    for (index, job) in person.jobs.iter().enumerate() {
        let path = root.push_field("jobs").push_index(index).push_field("fte");
        if let Err(err) = check_fte(job.fte, &path) {
            errors.push(err);
        }
    }
    errors
}
