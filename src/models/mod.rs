//! Staffing domain models.
//!
//! Provides the core data types for representing staffing problems and
//! solutions: contributors with skill levels, projects with ordered
//! role slots, and the filled-project records the scheduler emits.

mod contributor;
mod project;
mod staffing;

pub use contributor::Contributor;
pub use project::{Project, Role};
pub use staffing::{FilledProject, Staffing};
