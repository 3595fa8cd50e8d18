//! Assignment configuration.
//!
//! Weights and caps are passed explicitly into the model builder, so
//! model construction stays a pure function of (description, config).

use std::fmt;

use crate::models::BidLevel;

/// Happiness weight per bidding level.
///
/// Weights are reviewer happiness scores and default to negative
/// values (−10 / −3 / −1): the objective *maximizes* their sum, so a
/// `yes` assignment costs less happiness than a forced `no`. The sign
/// convention is load-bearing — do not negate weights or switch the
/// objective sense.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BidWeights {
    /// Happiness when assigning a paper the reviewer didn't want.
    pub no: f64,
    /// Happiness when assigning a paper the reviewer maybe wanted.
    pub maybe: f64,
    /// Happiness when assigning a paper the reviewer did want.
    pub yes: f64,
}

impl Default for BidWeights {
    fn default() -> Self {
        Self {
            no: -10.0,
            maybe: -3.0,
            yes: -1.0,
        }
    }
}

impl BidWeights {
    /// Objective weight for a bidding level.
    ///
    /// `Coi` has no weight: the pair is pinned to zero by a constraint
    /// and never appears in the objective.
    pub fn weight(&self, level: BidLevel) -> Option<f64> {
        match level {
            BidLevel::No => Some(self.no),
            BidLevel::Maybe => Some(self.maybe),
            BidLevel::Yes => Some(self.yes),
            BidLevel::Coi => None,
        }
    }
}

/// Configuration for the assignment model.
///
/// # Examples
///
/// ```
/// use review_assign::config::AssignConfig;
///
/// let config = AssignConfig::default()
///     .with_max_assignments(4)
///     .with_paper_reviewers(2, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AssignConfig {
    /// Happiness weights per bidding level.
    pub weights: BidWeights,
    /// Maximum papers per reviewer.
    pub max_assignments: u32,
    /// Maximum papers per reviewer who asked for reduced load.
    pub reduced_max_assignments: u32,
    /// Minimum reviewers per paper.
    pub min_paper_reviewers: u32,
    /// Maximum reviewers per paper.
    pub max_paper_reviewers: u32,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            weights: BidWeights::default(),
            max_assignments: 3,
            reduced_max_assignments: 1,
            min_paper_reviewers: 1,
            max_paper_reviewers: 3,
        }
    }
}

impl AssignConfig {
    pub fn with_weights(mut self, weights: BidWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_max_assignments(mut self, n: u32) -> Self {
        self.max_assignments = n;
        self
    }

    pub fn with_reduced_max_assignments(mut self, n: u32) -> Self {
        self.reduced_max_assignments = n;
        self
    }

    pub fn with_paper_reviewers(mut self, min: u32, max: u32) -> Self {
        self.min_paper_reviewers = min;
        self.max_paper_reviewers = max;
        self
    }

    /// Validates the configuration.
    ///
    /// Checks that the per-paper coverage bounds are ordered and that
    /// all weights are finite. Returns all detected issues.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if self.min_paper_reviewers > self.max_paper_reviewers {
            errors.push(ConfigError::new(
                ConfigErrorKind::CoverageBoundsInverted,
                format!(
                    "min_paper_reviewers ({}) exceeds max_paper_reviewers ({})",
                    self.min_paper_reviewers, self.max_paper_reviewers
                ),
            ));
        }

        for (name, w) in [
            ("weight-no", self.weights.no),
            ("weight-maybe", self.weights.maybe),
            ("weight-yes", self.weights.yes),
        ] {
            if !w.is_finite() {
                errors.push(ConfigError::new(
                    ConfigErrorKind::NonFiniteWeight,
                    format!("{name} is {w}, weights must be finite"),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A configuration error.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    /// Error category.
    pub kind: ConfigErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// `min_paper_reviewers` exceeds `max_paper_reviewers`.
    CoverageBoundsInverted,
    /// A weight is NaN or infinite.
    NonFiniteWeight,
}

impl ConfigError {
    fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConfigError {}
