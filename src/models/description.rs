//! Problem description model.
//!
//! A problem description is the full input to the assignment pipeline:
//! the reviewer and paper identifier sequences, the bidding matrix, and
//! the set of reviewers who asked for a reduced load. It is read once
//! at startup and never mutated.
//!
//! The order of `reviewers` and `papers` is significant: decision
//! variables, extraction, and the final report all follow it.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::BidLevel;

/// A reviewer assignment problem: who can review what, and how gladly.
///
/// The bidding matrix must be total: every (reviewer, paper) pair needs
/// exactly one [`BidLevel`] entry. Partial matrices are rejected by
/// [`validate_description`](crate::validation::validate_description),
/// not defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDescription {
    /// Reviewer identifiers, unique, in input order.
    pub reviewers: Vec<String>,
    /// Paper identifiers, unique, in input order.
    pub papers: Vec<String>,
    /// Bidding matrix: reviewer → paper → preference.
    pub biddings: HashMap<String, HashMap<String, BidLevel>>,
    /// Reviewers with a lowered workload cap. Empty means nobody.
    #[serde(default)]
    pub reduced_load: Vec<String>,
}

impl ProblemDescription {
    /// Creates a description with empty biddings and no reduced load.
    pub fn new(reviewers: Vec<String>, papers: Vec<String>) -> Self {
        Self {
            reviewers,
            papers,
            biddings: HashMap::new(),
            reduced_load: Vec::new(),
        }
    }

    /// Records one bidding entry.
    pub fn with_bid(
        mut self,
        reviewer: impl Into<String>,
        paper: impl Into<String>,
        level: BidLevel,
    ) -> Self {
        self.biddings
            .entry(reviewer.into())
            .or_default()
            .insert(paper.into(), level);
        self
    }

    /// Sets the reduced-load reviewer list.
    pub fn with_reduced_load(mut self, reviewers: Vec<String>) -> Self {
        self.reduced_load = reviewers;
        self
    }

    /// Parses a description from a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    /// Looks up the bidding for one (reviewer, paper) pair.
    pub fn bid(&self, reviewer: &str, paper: &str) -> Option<BidLevel> {
        self.biddings.get(reviewer)?.get(paper).copied()
    }

    /// Reduced-load membership as a set, for O(1) lookup.
    pub fn reduced_load_set(&self) -> HashSet<&str> {
        self.reduced_load.iter().map(String::as_str).collect()
    }

    /// Number of (reviewer, paper) pairs.
    pub fn pair_count(&self) -> usize {
        self.reviewers.len() * self.papers.len()
    }
}
