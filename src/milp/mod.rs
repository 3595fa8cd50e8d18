//! MILP formulation of the reviewer assignment problem.
//!
//! Translates a [`ProblemDescription`] into a mixed-integer linear
//! program and interprets the solver's output as an assignment plan.
//!
//! # Key Components
//!
//! - **Builder**: [`AssignmentModelBuilder`] — one binary variable per
//!   (reviewer, paper) pair, happiness objective, COI/workload/coverage
//!   constraints
//! - **Adapter**: [`solve`] — hands the model to the backing MILP
//!   solver and maps its verdict
//! - **Extractor**: [`extract_assignments`] — reads solved 0/1 values
//!   into an [`AssignmentPlan`](crate::models::AssignmentPlan)
//!
//! # Design
//!
//! This module defines the formulation only. The solving algorithm
//! (branch-and-bound over the LP relaxation) is `good_lp`'s backend;
//! nothing here depends on how the optimum is found. Model building and
//! extraction are pure functions, so independent problem instances can
//! be processed concurrently.
//!
//! # References
//!
//! - Goldsmith & Sloan (2007), "The AI Conference Paper Assignment Problem"
//! - Taylor (2008), "On the Optimal Assignment of Conference Papers to Reviewers"

mod builder;
mod solve;

use std::fmt;

pub use builder::{AssignmentModel, AssignmentModelBuilder};
pub use solve::{extract_assignments, solve, MilpSolution};

use crate::config::{AssignConfig, ConfigError};
use crate::models::{AssignmentPlan, ProblemDescription};
use crate::validation::ValidationError;

/// An error from the assignment pipeline.
///
/// `Infeasible` is a model-level outcome (the constraint set admits no
/// solution), distinct from operational solver failures.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignError {
    /// Malformed or incomplete problem description.
    Data(Vec<ValidationError>),
    /// Inconsistent numeric configuration.
    Config(Vec<ConfigError>),
    /// No assignment satisfies all constraints simultaneously.
    Infeasible,
    /// The backing solver failed or returned an unusable result.
    Solver(String),
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignError::Data(errors) => {
                write!(f, "invalid problem description ({} errors)", errors.len())
            }
            AssignError::Config(errors) => {
                write!(f, "invalid configuration ({} errors)", errors.len())
            }
            AssignError::Infeasible => {
                f.write_str("no feasible assignment satisfies all constraints")
            }
            AssignError::Solver(message) => write!(f, "solver failure: {message}"),
        }
    }
}

impl std::error::Error for AssignError {}

/// Runs the full pipeline: build the model, solve it, extract the plan.
///
/// # Examples
///
/// ```
/// use review_assign::config::AssignConfig;
/// use review_assign::milp;
/// use review_assign::models::{BidLevel, ProblemDescription};
///
/// let description = ProblemDescription::new(vec!["r1".into()], vec!["p1".into()])
///     .with_bid("r1", "p1", BidLevel::Yes);
/// let plan = milp::assign(&description, &AssignConfig::default()).unwrap();
/// assert!(plan.contains("r1", "p1"));
/// ```
pub fn assign(
    description: &ProblemDescription,
    config: &AssignConfig,
) -> Result<AssignmentPlan, AssignError> {
    let model = AssignmentModelBuilder::new(description, config).build()?;
    let solution = solve(model)?;
    extract_assignments(description, config, &solution)
}
