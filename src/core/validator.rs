use std::sync::LazyLock;

use regex::Regex;

use crate::core::record::{ScoreCandidate, ValidationFailure, ValidationResult};

static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{2}-\d{4}$").unwrap());

/// Validates a single candidate record against the domain rules.
///
/// # Rules
///
/// 1. The identifier must match exactly three digits, a hyphen, two digits,
///    a hyphen, four digits. Mismatch yields `InvalidIdentifier`.
/// 2. The score must be an integer between 300 and 850 inclusive. Out of
///    range or non-integer values yield `InvalidScore`.
///
/// The identifier rule is evaluated first; when both rules fail the
/// identifier failure is reported. Validation has no side effects.
///
/// # Examples
///
/// ```
/// use credit_score_rs::core::record::{ScoreCandidate, ValidationResult};
/// use credit_score_rs::core::validator::ScoreRecordValidator;
///
/// let validator = ScoreRecordValidator::default();
/// let candidate = ScoreCandidate::new("123-45-6789", 700);
///
/// assert_eq!(validator.validate(&candidate), ValidationResult::Valid);
/// ```
#[derive(Default)]
pub struct ScoreRecordValidator {}

impl ScoreRecordValidator {
    pub fn validate(&self, candidate: &ScoreCandidate) -> ValidationResult {
        if !IDENTIFIER_PATTERN.is_match(&candidate.identifier) {
            return ValidationResult::Invalid(ValidationFailure::InvalidIdentifier);
        }

        match candidate.score.as_i64() {
            Some(score) if (300..=850).contains(&score) => ValidationResult::Valid,
            _ => ValidationResult::Invalid(ValidationFailure::InvalidScore),
        }
    }
}
