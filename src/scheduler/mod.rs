//! Greedy staffing scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyScheduler` runs a single deterministic forward pass: projects
//! ordered by deadline-derived start date, each role slot filled by the
//! lowest-skilled eligible contributor, with a one-level mentoring
//! relaxation. It is not optimal and does not backtrack; unstaffable
//! projects are skipped silently.
//!
//! # KPI
//!
//! `StaffingKpi` summarizes a solution: fill counts, fill rate, points
//! earned, contributors used.

mod greedy;
mod kpi;
mod selection;

pub use greedy::GreedyScheduler;
pub use kpi::StaffingKpi;
pub use selection::{can_mentor, select_candidate};
