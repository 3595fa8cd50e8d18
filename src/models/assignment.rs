//! Assignment plan (solution) model.
//!
//! A plan is the final output of the pipeline: the list of
//! (reviewer, paper) pairs the solver selected, plus the realized
//! objective value. Plans can be re-checked against the original
//! constraints after the fact; a plan produced from an optimal
//! solution always verifies clean.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::AssignConfig;

use super::ProblemDescription;

/// One reviewer-paper assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned reviewer ID.
    pub reviewer_id: String,
    /// Assigned paper ID.
    pub paper_id: String,
}

/// A complete assignment plan (solution to an assignment problem).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPlan {
    /// Selected (reviewer, paper) pairs, in extraction order.
    pub assignments: Vec<Assignment>,
    /// Total happiness of the plan: sum of bid weights over the pairs.
    pub objective_value: f64,
}

/// A constraint violation found when re-checking a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (reviewer or paper).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of plan violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A pair the bidding matrix marks `coi` was assigned.
    CoiAssigned,
    /// A reviewer holds more papers than their applicable cap.
    WorkloadExceeded,
    /// A paper has fewer reviewers than the minimum.
    CoverageBelowMinimum,
    /// A paper has more reviewers than the maximum.
    CoverageAboveMaximum,
    /// An assignment references an unknown reviewer or paper.
    UnknownPair,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(reviewer_id: impl Into<String>, paper_id: impl Into<String>) -> Self {
        Self {
            reviewer_id: reviewer_id.into(),
            paper_id: paper_id.into(),
        }
    }
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

impl AssignmentPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the plan contains a specific pair.
    pub fn contains(&self, reviewer_id: &str, paper_id: &str) -> bool {
        self.assignments
            .iter()
            .any(|a| a.reviewer_id == reviewer_id && a.paper_id == paper_id)
    }

    /// Papers assigned to a given reviewer, in plan order.
    pub fn papers_for_reviewer(&self, reviewer_id: &str) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.reviewer_id == reviewer_id)
            .map(|a| a.paper_id.as_str())
            .collect()
    }

    /// Reviewers assigned to a given paper, in plan order.
    pub fn reviewers_for_paper(&self, paper_id: &str) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.paper_id == paper_id)
            .map(|a| a.reviewer_id.as_str())
            .collect()
    }

    /// Re-checks the plan against the problem's constraints.
    ///
    /// Verifies, pair by pair:
    /// 1. No assigned pair is marked `coi` in the bidding matrix
    /// 2. Every reviewer is within their applicable workload cap
    ///    (reduced or normal)
    /// 3. Every paper's reviewer count lies in
    ///    `[min_paper_reviewers, max_paper_reviewers]`
    ///
    /// Returns all detected violations; empty means the plan satisfies
    /// the constraint set exactly.
    pub fn verify(&self, description: &ProblemDescription, config: &AssignConfig) -> Vec<Violation> {
        let mut violations = Vec::new();
        let reduced = description.reduced_load_set();

        let mut reviewer_load: HashMap<&str, u32> = HashMap::new();
        let mut paper_cover: HashMap<&str, u32> = HashMap::new();

        for a in &self.assignments {
            match description.bid(&a.reviewer_id, &a.paper_id) {
                Some(level) if level.is_coi() => {
                    violations.push(Violation::new(
                        ViolationType::CoiAssigned,
                        a.reviewer_id.clone(),
                        format!(
                            "Reviewer '{}' declared COI on '{}' but was assigned it",
                            a.reviewer_id, a.paper_id
                        ),
                    ));
                }
                Some(_) => {}
                None => {
                    violations.push(Violation::new(
                        ViolationType::UnknownPair,
                        a.reviewer_id.clone(),
                        format!(
                            "Assignment ('{}', '{}') has no bidding entry",
                            a.reviewer_id, a.paper_id
                        ),
                    ));
                }
            }
            *reviewer_load.entry(a.reviewer_id.as_str()).or_insert(0) += 1;
            *paper_cover.entry(a.paper_id.as_str()).or_insert(0) += 1;
        }

        for reviewer in &description.reviewers {
            let load = reviewer_load.get(reviewer.as_str()).copied().unwrap_or(0);
            let cap = if reduced.contains(reviewer.as_str()) {
                config.reduced_max_assignments
            } else {
                config.max_assignments
            };
            if load > cap {
                violations.push(Violation::new(
                    ViolationType::WorkloadExceeded,
                    reviewer.clone(),
                    format!("Reviewer '{reviewer}' holds {load} papers, cap is {cap}"),
                ));
            }
        }

        for paper in &description.papers {
            let cover = paper_cover.get(paper.as_str()).copied().unwrap_or(0);
            if cover < config.min_paper_reviewers {
                violations.push(Violation::new(
                    ViolationType::CoverageBelowMinimum,
                    paper.clone(),
                    format!(
                        "Paper '{paper}' has {cover} reviewers, minimum is {}",
                        config.min_paper_reviewers
                    ),
                ));
            } else if cover > config.max_paper_reviewers {
                violations.push(Violation::new(
                    ViolationType::CoverageAboveMaximum,
                    paper.clone(),
                    format!(
                        "Paper '{paper}' has {cover} reviewers, maximum is {}",
                        config.max_paper_reviewers
                    ),
                ));
            }
        }

        violations
    }
}
