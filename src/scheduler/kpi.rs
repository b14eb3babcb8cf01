//! Staffing quality metrics (KPIs).
//!
//! Computes summary indicators from a completed staffing and its input
//! projects. Purely observational: nothing here feeds back into the
//! scheduler, and in particular `points` never influences decisions.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Filled Count | Projects fully staffed |
//! | Skipped Count | Projects left unstaffed |
//! | Fill Rate | filled / total projects |
//! | Total Points | Sum of `points` over filled projects |
//! | Contributors Used | Distinct contributors appearing in rosters |

use std::collections::HashMap;

use crate::models::{Project, Staffing};

/// Staffing performance indicators.
#[derive(Debug, Clone)]
pub struct StaffingKpi {
    /// Number of fully staffed projects.
    pub filled_count: usize,
    /// Number of unstaffed (skipped) projects.
    pub skipped_count: usize,
    /// Fraction of projects staffed (0.0..1.0; 1.0 for empty input).
    pub fill_rate: f64,
    /// Sum of reward points over filled projects.
    pub total_points: i64,
    /// Number of distinct contributors assigned anywhere.
    pub contributors_used: usize,
}

impl StaffingKpi {
    /// Computes KPIs from a staffing and its input projects.
    pub fn calculate(staffing: &Staffing, projects: &[Project]) -> Self {
        let points_by_name: HashMap<&str, i64> = projects
            .iter()
            .map(|p| (p.name.as_str(), p.points))
            .collect();

        let total_points = staffing
            .filled
            .iter()
            .filter_map(|f| points_by_name.get(f.name.as_str()))
            .sum();

        let filled_count = staffing.filled_count();
        let skipped_count = projects.len().saturating_sub(filled_count);
        let fill_rate = if projects.is_empty() {
            1.0
        } else {
            filled_count as f64 / projects.len() as f64
        };

        Self {
            filled_count,
            skipped_count,
            fill_rate,
            total_points,
            contributors_used: staffing.contributors_used().len(),
        }
    }
}
