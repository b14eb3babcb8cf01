//! Candidate selection and the mentoring check.
//!
//! Both operate on pool indices: `taken` holds indices of contributors
//! already locked in for earlier roles of the current project. The pool
//! itself is never mutated here.
//!
//! # Determinism
//! Selection scans the pool in its original input order and breaks ties
//! by first occurrence. That scan order is part of the observable
//! contract; replacing it with an index or heap would change which of
//! two equally skilled contributors gets picked.

use crate::models::Contributor;

/// Finds the best-fit available contributor for a role slot.
///
/// A contributor is eligible if they are not already taken for this
/// project, are free by `start_date`, have the role, and meet `level`
/// (possibly mentoring-relaxed, so it may be negative). Among eligible
/// contributors the one with the lowest skill for the role wins,
/// conserving stronger contributors for harder slots. An exact skill
/// match short-circuits the scan; that is an optimization only, the
/// result is the same without it.
///
/// Returns the pool index of the selection, or `None`.
pub fn select_candidate(
    pool: &[Contributor],
    taken: &[usize],
    start_date: i64,
    role: &str,
    level: i32,
) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;

    for (idx, contributor) in pool.iter().enumerate() {
        if taken.contains(&idx) || !contributor.is_free_at(start_date) {
            continue;
        }
        let Some(skill) = contributor.skill_level(role) else {
            continue;
        };
        if skill < level {
            continue;
        }

        match best {
            Some((_, best_skill)) if skill >= best_skill => {}
            _ => best = Some((idx, skill)),
        }

        // Exact fit: nothing closer can exist, stop scanning.
        if let Some((_, best_skill)) = best {
            if best_skill == level {
                break;
            }
        }
    }

    best.map(|(idx, _)| idx)
}

/// Whether an already-taken teammate can mentor a role at `level`.
///
/// True iff any contributor in `taken` has the role at `level` or above.
/// The scheduler calls this with the *original* required level and, on
/// success, relaxes the requirement by exactly one. Only teammates from
/// earlier roles of the same project count; assignments to other
/// projects are irrelevant.
pub fn can_mentor(pool: &[Contributor], taken: &[usize], role: &str, level: i32) -> bool {
    taken
        .iter()
        .any(|&idx| matches!(pool[idx].skill_level(role), Some(skill) if skill >= level))
}
