//! Solver adapter and assignment extraction.

use good_lp::{default_solver, ResolutionError, Solution, SolverModel};

use crate::config::AssignConfig;
use crate::models::{Assignment, AssignmentPlan, ProblemDescription};

use super::builder::AssignmentModel;
use super::AssignError;

/// Solved values within this distance of 0 or 1 are accepted as
/// binary; anything further out is a solver error, never rounded.
const VALUE_TOLERANCE: f64 = 1e-6;

/// Raw solver output: one value per decision variable, snapshotted in
/// the model's reviewer-major variable order. Immutable; consumed only
/// by [`extract_assignments`].
#[derive(Debug, Clone, PartialEq)]
pub struct MilpSolution {
    pub(crate) values: Vec<f64>,
    pub(crate) n_papers: usize,
}

impl MilpSolution {
    /// Solved value for (reviewer index, paper index).
    pub fn value(&self, reviewer_idx: usize, paper_idx: usize) -> f64 {
        self.values[reviewer_idx * self.n_papers + paper_idx]
    }

    /// Number of decision variables.
    pub fn variable_count(&self) -> usize {
        self.values.len()
    }
}

/// Hands the model to the backing MILP solver and maps its verdict.
///
/// Consumes the model: it is built once and solved once. Returns
/// [`AssignError::Infeasible`] when the constraint set admits no
/// solution and [`AssignError::Solver`] for operational failures.
pub fn solve(model: AssignmentModel) -> Result<MilpSolution, AssignError> {
    let AssignmentModel {
        variables,
        objective,
        constraints,
        vars,
        n_papers,
    } = model;

    let mut problem = variables.maximise(objective).using(default_solver);
    for c in constraints {
        problem = problem.with(c);
    }

    match problem.solve() {
        Ok(solution) => Ok(MilpSolution {
            values: vars.iter().map(|&v| solution.value(v)).collect(),
            n_papers,
        }),
        Err(ResolutionError::Infeasible) => Err(AssignError::Infeasible),
        Err(err) => Err(AssignError::Solver(err.to_string())),
    }
}

/// Converts a solution into the final assignment plan.
///
/// A pair is assigned iff its solved value is 1 (within tolerance).
/// Values that are neither 0 nor 1 are rejected as a solver error so
/// the result stays auditable. The plan's objective value is
/// recomputed from the bid weights of the chosen pairs, independent of
/// solver-side reporting.
///
/// Deterministic: a fixed solution always yields the same plan, in
/// reviewer-major input order.
pub fn extract_assignments(
    description: &ProblemDescription,
    config: &AssignConfig,
    solution: &MilpSolution,
) -> Result<AssignmentPlan, AssignError> {
    let mut plan = AssignmentPlan::new();

    for (i, reviewer) in description.reviewers.iter().enumerate() {
        for (j, paper) in description.papers.iter().enumerate() {
            let value = solution.value(i, j);
            let selected = if (value - 1.0).abs() <= VALUE_TOLERANCE {
                true
            } else if value.abs() <= VALUE_TOLERANCE {
                false
            } else {
                return Err(AssignError::Solver(format!(
                    "non-binary value {value} for pair ('{reviewer}', '{paper}')"
                )));
            };

            if selected {
                if let Some(level) = description.bid(reviewer, paper) {
                    if let Some(weight) = config.weights.weight(level) {
                        plan.objective_value += weight;
                    }
                }
                plan.add_assignment(Assignment::new(reviewer, paper));
            }
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milp::{assign, AssignmentModelBuilder};
    use crate::models::BidLevel;

    #[test]
    fn test_trivial_feasible() {
        // 1 reviewer, 1 paper, bid yes → exactly [(R1, P1)]
        let description = ProblemDescription::new(vec!["R1".into()], vec!["P1".into()])
            .with_bid("R1", "P1", BidLevel::Yes);
        let config = AssignConfig::default().with_paper_reviewers(1, 1);

        let plan = assign(&description, &config).unwrap();
        assert_eq!(plan.assignments, vec![Assignment::new("R1", "P1")]);
        assert_eq!(plan.objective_value, -1.0);
        assert!(plan.verify(&description, &config).is_empty());
    }

    #[test]
    fn test_forced_infeasible() {
        // The only reviewer has a COI on the only paper, which still
        // needs one reviewer.
        let description = ProblemDescription::new(vec!["R1".into()], vec!["P1".into()])
            .with_bid("R1", "P1", BidLevel::Coi);
        let config = AssignConfig::default();

        let result = assign(&description, &config);
        assert_eq!(result.unwrap_err(), AssignError::Infeasible);
    }

    #[test]
    fn test_coi_pair_never_assigned() {
        let description = ProblemDescription::new(
            vec!["R1".into(), "R2".into()],
            vec!["P1".into(), "P2".into()],
        )
        .with_bid("R1", "P1", BidLevel::Coi)
        .with_bid("R1", "P2", BidLevel::Yes)
        .with_bid("R2", "P1", BidLevel::Yes)
        .with_bid("R2", "P2", BidLevel::Maybe);
        let config = AssignConfig::default();

        let plan = assign(&description, &config).unwrap();
        assert!(!plan.contains("R1", "P1"));
        assert!(plan.verify(&description, &config).is_empty());
    }

    #[test]
    fn test_optimality_matches_yes_bids() {
        // Each paper needs exactly one reviewer; matching the yes bids
        // is the unique optimum (-1 + -1 beats any mix with a no).
        let description = ProblemDescription::new(
            vec!["R1".into(), "R2".into()],
            vec!["P1".into(), "P2".into()],
        )
        .with_bid("R1", "P1", BidLevel::Yes)
        .with_bid("R1", "P2", BidLevel::No)
        .with_bid("R2", "P1", BidLevel::No)
        .with_bid("R2", "P2", BidLevel::Yes);
        let config = AssignConfig::default().with_paper_reviewers(1, 1);

        let plan = assign(&description, &config).unwrap();
        assert!(plan.contains("R1", "P1"));
        assert!(plan.contains("R2", "P2"));
        assert_eq!(plan.assignment_count(), 2);
        assert_eq!(plan.objective_value, -2.0);
    }

    #[test]
    fn test_reduced_load_alone_is_infeasible() {
        // R1 may take one paper but two papers each need a reviewer.
        let description = ProblemDescription::new(
            vec!["R1".into()],
            vec!["P1".into(), "P2".into()],
        )
        .with_bid("R1", "P1", BidLevel::Yes)
        .with_bid("R1", "P2", BidLevel::Yes)
        .with_reduced_load(vec!["R1".into()]);
        let config = AssignConfig::default();

        let result = assign(&description, &config);
        assert_eq!(result.unwrap_err(), AssignError::Infeasible);
    }

    #[test]
    fn test_reduced_load_honored_with_second_reviewer() {
        let description = ProblemDescription::new(
            vec!["R1".into(), "R2".into()],
            vec!["P1".into(), "P2".into()],
        )
        .with_bid("R1", "P1", BidLevel::Yes)
        .with_bid("R1", "P2", BidLevel::Yes)
        .with_bid("R2", "P1", BidLevel::Yes)
        .with_bid("R2", "P2", BidLevel::Yes)
        .with_reduced_load(vec!["R1".into()]);
        let config = AssignConfig::default();

        let plan = assign(&description, &config).unwrap();
        assert!(plan.papers_for_reviewer("R1").len() <= 1);
        assert!(!plan.reviewers_for_paper("P1").is_empty());
        assert!(!plan.reviewers_for_paper("P2").is_empty());
        assert!(plan.verify(&description, &config).is_empty());
        // Two yes assignments cover both papers
        assert_eq!(plan.objective_value, -2.0);
    }

    #[test]
    fn test_without_reduced_load_one_reviewer_covers_both() {
        let description = ProblemDescription::new(
            vec!["R1".into()],
            vec!["P1".into(), "P2".into()],
        )
        .with_bid("R1", "P1", BidLevel::Yes)
        .with_bid("R1", "P2", BidLevel::Maybe);
        let config = AssignConfig::default();

        let plan = assign(&description, &config).unwrap();
        assert_eq!(plan.assignment_count(), 2);
        assert_eq!(plan.objective_value, -4.0);
        assert!(plan.verify(&description, &config).is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let description = ProblemDescription::new(
            vec!["R1".into(), "R2".into()],
            vec!["P1".into(), "P2".into()],
        )
        .with_bid("R1", "P1", BidLevel::Yes)
        .with_bid("R1", "P2", BidLevel::Maybe)
        .with_bid("R2", "P1", BidLevel::Maybe)
        .with_bid("R2", "P2", BidLevel::Yes);
        let config = AssignConfig::default().with_paper_reviewers(1, 1);

        let model = AssignmentModelBuilder::new(&description, &config)
            .build()
            .unwrap();
        let solution = solve(model).unwrap();

        let first = extract_assignments(&description, &config, &solution).unwrap();
        let second = extract_assignments(&description, &config, &solution).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_binary_value_rejected() {
        let description = ProblemDescription::new(vec!["R1".into()], vec!["P1".into()])
            .with_bid("R1", "P1", BidLevel::Yes);
        let config = AssignConfig::default();
        let solution = MilpSolution {
            values: vec![0.5],
            n_papers: 1,
        };

        let err = extract_assignments(&description, &config, &solution).unwrap_err();
        assert!(matches!(err, AssignError::Solver(_)));
    }

    #[test]
    fn test_tolerance_accepts_solver_noise() {
        let description = ProblemDescription::new(vec!["R1".into()], vec!["P1".into()])
            .with_bid("R1", "P1", BidLevel::Yes);
        let config = AssignConfig::default();
        let solution = MilpSolution {
            values: vec![1.0 - 1e-9],
            n_papers: 1,
        };

        let plan = extract_assignments(&description, &config, &solution).unwrap();
        assert!(plan.contains("R1", "P1"));
    }
}
