//! Input validation for assignment problems.
//!
//! Checks structural integrity of a problem description before model
//! building. Detects:
//! - Empty reviewer/paper lists
//! - Duplicate IDs
//! - Incomplete bidding matrices (missing rows or entries)
//! - References to unknown reviewers or papers

use std::collections::HashSet;

use crate::models::ProblemDescription;

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
    /// The reviewer list is empty.
    EmptyReviewerList,
    /// The paper list is empty.
    EmptyPaperList,
    /// Two reviewers or two papers share the same ID.
    DuplicateId,
    /// A (reviewer, paper) pair has no bidding entry.
    MissingBidding,
    /// A bidding row, bidding entry, or reduced-load entry references
    /// an ID that doesn't exist.
    UnknownReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a problem description.
///
/// Checks:
/// 1. Reviewer and paper lists are non-empty
/// 2. No duplicate reviewer IDs, no duplicate paper IDs
/// 3. The bidding matrix is total: every (reviewer, paper) pair has
///    exactly one entry — sparse matrices are not defaulted to `no`
/// 4. Bidding rows and entries only reference known reviewers/papers
/// 5. `reduced_load` only names known reviewers
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_description(description: &ProblemDescription) -> ValidationResult {
    let mut errors = Vec::new();

    if description.reviewers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyReviewerList,
            "Description lists no reviewers",
        ));
    }
    if description.papers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPaperList,
            "Description lists no papers",
        ));
    }

    // Collect reviewer and paper IDs
    let mut reviewer_ids = HashSet::new();
    for r in &description.reviewers {
        if !reviewer_ids.insert(r.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate reviewer ID: {r}"),
            ));
        }
    }

    let mut paper_ids = HashSet::new();
    for p in &description.papers {
        if !paper_ids.insert(p.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate paper ID: {p}"),
            ));
        }
    }

    // Bidding matrix completeness
    for reviewer in &description.reviewers {
        match description.biddings.get(reviewer) {
            None => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingBidding,
                    format!("Reviewer '{reviewer}' has no bidding row"),
                ));
            }
            Some(row) => {
                for paper in &description.papers {
                    if !row.contains_key(paper) {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::MissingBidding,
                            format!("Reviewer '{reviewer}' has no bidding for paper '{paper}'"),
                        ));
                    }
                }
            }
        }
    }

    // Unknown references in bidding rows and entries
    for (reviewer, row) in &description.biddings {
        if !reviewer_ids.contains(reviewer.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Bidding row for unknown reviewer '{reviewer}'"),
            ));
        }
        for paper in row.keys() {
            if !paper_ids.contains(paper.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!("Reviewer '{reviewer}' bids on unknown paper '{paper}'"),
                ));
            }
        }
    }

    // Unknown references in reduced_load
    for reviewer in &description.reduced_load {
        if !reviewer_ids.contains(reviewer.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("reduced_load names unknown reviewer '{reviewer}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
