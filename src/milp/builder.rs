//! MILP model construction.

use good_lp::{constraint, variable, Constraint, Expression, ProblemVariables, Variable};

use crate::config::AssignConfig;
use crate::models::ProblemDescription;
use crate::validation::validate_description;

use super::AssignError;

/// Builds a MILP model from a problem description and configuration.
///
/// Translates reviewers, papers, and biddings into decision variables,
/// a happiness objective, and the constraint set, ready for solving.
///
/// # Example
/// ```
/// use review_assign::config::AssignConfig;
/// use review_assign::milp::AssignmentModelBuilder;
/// use review_assign::models::{BidLevel, ProblemDescription};
///
/// let description = ProblemDescription::new(vec!["r1".into()], vec!["p1".into()])
///     .with_bid("r1", "p1", BidLevel::Yes);
/// let config = AssignConfig::default();
/// let model = AssignmentModelBuilder::new(&description, &config)
///     .build()
///     .unwrap();
/// assert_eq!(model.variable_count(), 1);
/// ```
pub struct AssignmentModelBuilder<'a> {
    description: &'a ProblemDescription,
    config: &'a AssignConfig,
}

/// A fully specified assignment MILP.
///
/// One binary variable per (reviewer, paper) pair in reviewer-major
/// order, a maximization objective, and the constraint list. Built
/// once, consumed whole by [`solve`](super::solve).
pub struct AssignmentModel {
    pub(crate) variables: ProblemVariables,
    pub(crate) objective: Expression,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) vars: Vec<Variable>,
    pub(crate) n_papers: usize,
}

impl std::fmt::Debug for AssignmentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssignmentModel")
            .field("variable_count", &self.vars.len())
            .field("constraint_count", &self.constraints.len())
            .field("n_papers", &self.n_papers)
            .finish()
    }
}

impl AssignmentModel {
    /// Number of decision variables (reviewers × papers).
    pub fn variable_count(&self) -> usize {
        self.vars.len()
    }

    /// Number of constraint rows.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

impl<'a> AssignmentModelBuilder<'a> {
    /// Creates a new builder.
    pub fn new(description: &'a ProblemDescription, config: &'a AssignConfig) -> Self {
        Self {
            description,
            config,
        }
    }

    /// Builds the MILP model.
    ///
    /// Creates:
    /// - A binary variable `x_<i>_<j>` per (reviewer, paper) pair
    /// - A maximize objective: Σ weight(bidding) · x over non-COI pairs
    /// - `x == 0` for every COI pair
    /// - Per-reviewer workload cap (reduced cap for reviewers in
    ///   `reduced_load`, normal cap otherwise)
    /// - Per-paper coverage bounds `min ≤ Σ x ≤ max`
    ///
    /// Fails with [`AssignError::Data`] on a malformed description and
    /// [`AssignError::Config`] on inconsistent configuration; the
    /// description is never mutated.
    pub fn build(&self) -> Result<AssignmentModel, AssignError> {
        validate_description(self.description).map_err(AssignError::Data)?;
        self.config.validate().map_err(AssignError::Config)?;

        let reviewers = &self.description.reviewers;
        let papers = &self.description.papers;
        let reduced = self.description.reduced_load_set();

        let mut variables = ProblemVariables::new();
        let mut vars = Vec::with_capacity(reviewers.len() * papers.len());
        for i in 0..reviewers.len() {
            for j in 0..papers.len() {
                vars.push(variables.add(variable().binary().name(format!("x_{i}_{j}"))));
            }
        }

        // Bidding totality was checked by validate_description, so
        // direct indexing below cannot miss.
        let mut objective = Expression::with_capacity(vars.len());
        let mut constraints = Vec::new();

        for (i, reviewer) in reviewers.iter().enumerate() {
            for (j, paper) in papers.iter().enumerate() {
                let level = self.description.biddings[reviewer.as_str()][paper.as_str()];
                let x = vars[i * papers.len() + j];
                match self.config.weights.weight(level) {
                    Some(weight) => objective.add_mul(weight, x),
                    // COI: pinned to zero, absent from the objective
                    None => constraints.push(constraint!(x == 0)),
                }
            }
        }

        for (i, reviewer) in reviewers.iter().enumerate() {
            let mut load = Expression::with_capacity(papers.len());
            for j in 0..papers.len() {
                load.add_mul(1.0, vars[i * papers.len() + j]);
            }
            let cap = if reduced.contains(reviewer.as_str()) {
                self.config.reduced_max_assignments
            } else {
                self.config.max_assignments
            } as f64;
            constraints.push(constraint!(load <= cap));
        }

        let min_cover = self.config.min_paper_reviewers as f64;
        let max_cover = self.config.max_paper_reviewers as f64;
        for j in 0..papers.len() {
            let mut cover = Expression::with_capacity(reviewers.len());
            for i in 0..reviewers.len() {
                cover.add_mul(1.0, vars[i * papers.len() + j]);
            }
            constraints.push(constraint!(cover.clone() >= min_cover));
            constraints.push(constraint!(cover <= max_cover));
        }

        Ok(AssignmentModel {
            variables,
            objective,
            constraints,
            vars,
            n_papers: papers.len(),
        })
    }
}
