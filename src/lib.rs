//! Conference reviewer assignment via mixed-integer linear programming.
//!
//! Assigns papers to reviewers by maximizing aggregate reviewer
//! happiness under three kinds of hard constraints: conflict-of-interest
//! exclusions, per-reviewer workload caps (with an opt-in reduced load),
//! and per-paper reviewer-count bounds.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProblemDescription`, `BidLevel`,
//!   `Assignment`, `AssignmentPlan`
//! - **`validation`**: Input integrity checks (duplicate IDs, bidding
//!   completeness, unknown references)
//! - **`config`**: Bid weights and workload/coverage caps
//! - **`milp`**: The MILP formulation — model builder, solver adapter,
//!   assignment extraction
//! - **`cli`**: Command-line shell (YAML description in, report out)
//!
//! # Pipeline
//!
//! Description → validate → build model → solve → extract plan. Model
//! building and extraction are pure functions of their inputs; the
//! description is read once and never mutated. Solving is delegated to
//! `good_lp`'s MILP backend.
//!
//! # References
//!
//! - Goldsmith & Sloan (2007), "The AI Conference Paper Assignment Problem"
//! - Taylor (2008), "On the Optimal Assignment of Conference Papers to Reviewers"

pub mod cli;
pub mod config;
pub mod milp;
pub mod models;
pub mod validation;
