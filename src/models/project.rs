//! Project model.
//!
//! A project is a unit of work with a duration, a deadline, and an
//! ordered roster of role slots to fill. Role order is significant:
//! slots are filled in listed order, and a contributor locked in for an
//! earlier slot can mentor a later one.

use serde::{Deserialize, Serialize};

/// A project to be staffed.
///
/// # Time Representation
/// All day values are integers relative to day 0. The derived
/// `start_date` may be negative when `length > best_before`; it is used
/// as-is, never clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project name.
    pub name: String,
    /// Duration in days.
    pub length: i64,
    /// Score reward. Carried for reporting; never drives scheduling.
    pub points: i64,
    /// Deadline day.
    pub best_before: i64,
    /// Role slots, in fill order.
    pub roles: Vec<Role>,
}

/// One role slot: a role name and the required proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role (skill) name.
    pub name: String,
    /// Required proficiency level (>= 0).
    pub level: i32,
}

impl Project {
    /// Creates a new project with no roles.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length: 0,
            points: 0,
            best_before: 0,
            roles: Vec::new(),
        }
    }

    /// Sets the duration in days.
    pub fn with_length(mut self, length: i64) -> Self {
        self.length = length;
        self
    }

    /// Sets the score reward.
    pub fn with_points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    /// Sets the deadline day.
    pub fn with_best_before(mut self, best_before: i64) -> Self {
        self.best_before = best_before;
        self
    }

    /// Appends a role slot.
    pub fn with_role(mut self, name: impl Into<String>, level: i32) -> Self {
        self.roles.push(Role {
            name: name.into(),
            level,
        });
        self
    }

    /// Latest day the project can start and still finish by its deadline.
    ///
    /// May be negative; callers compare against contributor availability
    /// with plain signed arithmetic.
    #[inline]
    pub fn start_date(&self) -> i64 {
        self.best_before - self.length
    }

    /// Number of role slots.
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}

impl Role {
    /// Creates a new role slot.
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_builder() {
        let p = Project::new("WebServer")
            .with_length(7)
            .with_points(10)
            .with_best_before(20)
            .with_role("coding", 3)
            .with_role("design", 1);

        assert_eq!(p.name, "WebServer");
        assert_eq!(p.length, 7);
        assert_eq!(p.points, 10);
        assert_eq!(p.best_before, 20);
        assert_eq!(p.role_count(), 2);
        assert_eq!(p.roles[0], Role::new("coding", 3));
        assert_eq!(p.roles[1], Role::new("design", 1));
    }

    #[test]
    fn test_start_date() {
        let p = Project::new("P").with_length(5).with_best_before(12);
        assert_eq!(p.start_date(), 7);
    }

    #[test]
    fn test_start_date_negative() {
        // length > best_before: start date goes negative, no clamping
        let p = Project::new("P").with_length(10).with_best_before(3);
        assert_eq!(p.start_date(), -7);
    }

    #[test]
    fn test_empty_roles() {
        let p = Project::new("trivial");
        assert_eq!(p.role_count(), 0);
    }
}
