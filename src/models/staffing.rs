//! Staffing (solution) model.
//!
//! A staffing is the set of projects the scheduler managed to fill,
//! in commit order, each with its role-aligned contributor roster.
//! Projects that could not be fully staffed do not appear at all.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A complete staffing (solution to a staffing problem).
///
/// Holds filled projects in the order they were committed, which is the
/// scheduler's sorted-by-start-date order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Staffing {
    /// Fully staffed projects, in commit order.
    pub filled: Vec<FilledProject>,
}

/// A fully staffed project.
///
/// `contributors` is positionally aligned with the source project's role
/// list: the contributor at index `i` fills role `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilledProject {
    /// The staffed project's name.
    pub name: String,
    /// Assigned contributor names, in role order.
    pub contributors: Vec<String>,
}

impl FilledProject {
    /// Creates a filled project record.
    pub fn new(name: impl Into<String>, contributors: Vec<String>) -> Self {
        Self {
            name: name.into(),
            contributors,
        }
    }

    /// Number of assigned contributors (equals the project's role count).
    pub fn contributor_count(&self) -> usize {
        self.contributors.len()
    }
}

impl Staffing {
    /// Creates an empty staffing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filled project.
    pub fn add_filled(&mut self, filled: FilledProject) {
        self.filled.push(filled);
    }

    /// Number of filled projects.
    pub fn filled_count(&self) -> usize {
        self.filled.len()
    }

    /// Finds the record for a given project, if it was staffed.
    pub fn filled_project(&self, name: &str) -> Option<&FilledProject> {
        self.filled.iter().find(|f| f.name == name)
    }

    /// Whether a given project was staffed.
    pub fn is_staffed(&self, name: &str) -> bool {
        self.filled_project(name).is_some()
    }

    /// Distinct contributor names appearing anywhere in the solution.
    pub fn contributors_used(&self) -> HashSet<&str> {
        self.filled
            .iter()
            .flat_map(|f| f.contributors.iter().map(String::as_str))
            .collect()
    }
}
