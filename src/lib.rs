//! Greedy project-staffing solver.
//!
//! Assigns contributors with typed skill levels to deadline-bounded
//! projects, each requiring an ordered roster of (role, level) slots.
//! A one-level "mentoring" relaxation lets a slightly under-qualified
//! contributor fill a role when a sufficiently skilled teammate is
//! already on the project.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Contributor`, `Project`, `Role`,
//!   `Staffing`, `FilledProject`
//! - **`scheduler`**: The greedy scheduler, candidate selection, and
//!   staffing KPIs
//! - **`validation`**: Input integrity checks (duplicate names, negative levels)
//! - **`io`**: Plain-text problem parsing and solution output
//!
//! # Algorithm
//!
//! A deterministic single forward pass: projects are ordered by
//! `start_date = best_before - length` ascending, and each role slot is
//! filled by the lowest-skilled eligible contributor. There is no
//! backtracking and no optimality guarantee — skipped projects are a
//! normal outcome, not an error.

pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;
