//! Contributor model.
//!
//! Contributors are the people assigned to project roles. Each has a
//! set of skills with integer proficiency levels and a single scalar
//! availability day. The name doubles as the identity for membership
//! checks, so it is assumed unique across the pool.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A contributor that can be assigned to project roles.
///
/// `available` is the first day on or after which the contributor may
/// start a new project. It starts at 0 and only ever increases: the
/// scheduler advances it to a project's deadline on every committed
/// assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    /// Unique contributor name (identity).
    pub name: String,
    /// Skills with proficiency levels (role name → level, levels >= 0).
    pub skills: HashMap<String, i32>,
    /// First day the contributor is free to start a new project.
    pub available: i64,
}

impl Contributor {
    /// Creates a new contributor, available from day 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skills: HashMap::new(),
            available: 0,
        }
    }

    /// Adds a skill.
    pub fn with_skill(mut self, role: impl Into<String>, level: i32) -> Self {
        self.skills.insert(role.into(), level);
        self
    }

    /// Whether this contributor has a given role in their skill set.
    pub fn has_skill(&self, role: &str) -> bool {
        self.skills.contains_key(role)
    }

    /// Returns the proficiency level for a role, or `None` if absent.
    pub fn skill_level(&self, role: &str) -> Option<i32> {
        self.skills.get(role).copied()
    }

    /// Whether the contributor is free on or before the given day.
    ///
    /// The comparison is plain signed `<=`; negative start dates are
    /// legal inputs and are not clamped.
    pub fn is_free_at(&self, day: i64) -> bool {
        self.available <= day
    }
}
