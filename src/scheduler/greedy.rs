//! Greedy deadline-driven staffing scheduler.
//!
//! # Algorithm
//!
//! 1. Sort projects by `start_date` ascending (stable; ties keep input order).
//! 2. For each project, fill roles in listed order: check mentoring,
//!    then select the lowest-skilled eligible contributor.
//! 3. Abort the project on the first unfillable role (SKIPPED).
//! 4. Commit only complete rosters: advance each contributor's
//!    availability to the deadline and grow stretched skills by one.
//!
//! Single forward pass, no backtracking across projects.
//!
//! # Complexity
//! O(p * r * c) where p=projects, r=roles/project, c=pool size.

use tracing::debug;

use super::selection::{can_mentor, select_candidate};
use crate::models::{Contributor, FilledProject, Project, Staffing};

/// Greedy deadline-driven staffing scheduler.
///
/// Projects with earlier required start dates are staffed first, since
/// they constrain contributor availability windows more tightly. The
/// pass is deterministic: identical input yields identical output.
///
/// # Example
///
/// ```
/// use crew_schedule::models::{Contributor, Project};
/// use crew_schedule::scheduler::GreedyScheduler;
///
/// let mut pool = vec![Contributor::new("Anna").with_skill("coding", 3)];
/// let projects = vec![
///     Project::new("P1")
///         .with_length(1)
///         .with_best_before(3)
///         .with_role("coding", 2),
/// ];
///
/// let staffing = GreedyScheduler::new().solve(&mut pool, &projects);
/// assert_eq!(staffing.filled_count(), 1);
/// assert_eq!(pool[0].available, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler;

impl GreedyScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Staffs projects from the contributor pool.
    ///
    /// The pool is mutated in place: every committed assignment sets the
    /// contributor's `available` to the project's `best_before` and
    /// raises the exercised skill by one when the contributor was at or
    /// below the role's nominal requirement. Skipped projects leave no
    /// trace on the pool.
    pub fn solve(&self, pool: &mut [Contributor], projects: &[Project]) -> Staffing {
        self.solve_with_progress(pool, projects, |_, _| {})
    }

    /// Like [`solve`](Self::solve), invoking `progress(done, total)`
    /// after each project is decided. Cosmetic reporting only; the
    /// callback cannot influence scheduling.
    pub fn solve_with_progress(
        &self,
        pool: &mut [Contributor],
        projects: &[Project],
        mut progress: impl FnMut(usize, usize),
    ) -> Staffing {
        let order = sort_by_start_date(projects);
        let total = order.len();
        let mut staffing = Staffing::new();

        for (done, &pi) in order.iter().enumerate() {
            let project = &projects[pi];
            match fill_roster(pool, project) {
                Some(taken) => commit(pool, project, &taken, &mut staffing),
                None => debug!(project = %project.name, "no full roster, skipped"),
            }
            progress(done + 1, total);
        }

        staffing
    }
}

/// Returns project indices sorted by ascending start date.
///
/// `sort_by_key` is stable, so projects with equal start dates keep
/// their input order; commit order is exactly this order.
fn sort_by_start_date(projects: &[Project]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..projects.len()).collect();
    indices.sort_by_key(|&i| projects[i].start_date());
    indices
}

/// Attempts to fill every role slot of a project.
///
/// Returns pool indices aligned with the role list, or `None` as soon
/// as any role has no eligible contributor. Read-only on the pool, so
/// a partial fill evaporates without side effects.
fn fill_roster(pool: &[Contributor], project: &Project) -> Option<Vec<usize>> {
    let start_date = project.start_date();
    let mut taken: Vec<usize> = Vec::with_capacity(project.roles.len());

    for role in &project.roles {
        // Mentoring is judged against the original level and relaxes the
        // bar by exactly one; it never stacks.
        let effective_level = if can_mentor(pool, &taken, &role.name, role.level) {
            role.level - 1
        } else {
            role.level
        };

        let idx = select_candidate(pool, &taken, start_date, &role.name, effective_level)?;
        taken.push(idx);
    }

    Some(taken)
}

/// Applies a complete roster to the pool and records the fill.
///
/// The skill comparison uses the role's original level, not the
/// mentoring-relaxed one, so a mentored contributor measured against
/// the harder bar still gains a level. A contributor already above the
/// requirement gains nothing.
fn commit(pool: &mut [Contributor], project: &Project, taken: &[usize], staffing: &mut Staffing) {
    for (&idx, role) in taken.iter().zip(&project.roles) {
        let contributor = &mut pool[idx];
        contributor.available = project.best_before;
        if let Some(skill) = contributor.skills.get_mut(&role.name) {
            if *skill <= role.level {
                *skill += 1;
            }
        }
    }

    let names = taken.iter().map(|&idx| pool[idx].name.clone()).collect();
    staffing.add_filled(FilledProject::new(&project.name, names));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contributor, Project};

    fn coder(name: &str, level: i32) -> Contributor {
        Contributor::new(name).with_skill("coding", level)
    }

    #[test]
    fn test_single_project_exact_selection() {
        // A(coding=3) and B(coding=1); role needs level 2. B is not
        // eligible, no mentor exists yet, so A fills the slot. A was
        // already above the bar, so coding stays at 3.
        let mut pool = vec![coder("A", 3), coder("B", 1)];
        let projects = vec![Project::new("P1")
            .with_length(1)
            .with_points(10)
            .with_best_before(3)
            .with_role("coding", 2)];

        let staffing = GreedyScheduler::new().solve(&mut pool, &projects);

        assert_eq!(staffing.filled_count(), 1);
        let fp = staffing.filled_project("P1").unwrap();
        assert_eq!(fp.contributors, vec!["A"]);
        assert_eq!(pool[0].available, 3);
        assert_eq!(pool[0].skill_level("coding"), Some(3)); // 3 <= 2 is false
        assert_eq!(pool[1].available, 0); // B untouched
    }

    #[test]
    fn test_mentoring_relaxes_second_role() {
        // Roles [(coding,3), (coding,2)]. A(3) takes the first. For the
        // second, A mentors (3 >= 2), the bar drops to 1 and B(1)
        // qualifies. B is compared against the original level 2, so
        // B's coding grows to 2.
        let mut pool = vec![coder("A", 3), coder("B", 1)];
        let projects = vec![Project::new("P1")
            .with_length(2)
            .with_best_before(5)
            .with_role("coding", 3)
            .with_role("coding", 2)];

        let staffing = GreedyScheduler::new().solve(&mut pool, &projects);

        let fp = staffing.filled_project("P1").unwrap();
        assert_eq!(fp.contributors, vec!["A", "B"]);
        assert_eq!(pool[1].skill_level("coding"), Some(2));
        // A filled a role at exactly its level: 3 <= 3, so A grows too.
        assert_eq!(pool[0].skill_level("coding"), Some(4));
        assert_eq!(pool[0].available, 5);
        assert_eq!(pool[1].available, 5);
    }

    #[test]
    fn test_mentoring_does_not_stack() {
        // One mentor, role at level 3: the bar relaxes to 2, not lower,
        // so a level-1 contributor still misses the cut.
        let mut pool = vec![coder("Mentor", 5), coder("Junior", 1)];
        let projects = vec![Project::new("P1")
            .with_length(1)
            .with_best_before(2)
            .with_role("coding", 5)
            .with_role("coding", 3)];

        let staffing = GreedyScheduler::new().solve(&mut pool, &projects);
        assert_eq!(staffing.filled_count(), 0);
    }

    #[test]
    fn test_all_or_nothing_commit() {
        // First role fillable, second not: nothing may change anywhere.
        let mut pool = vec![coder("A", 3)];
        let projects = vec![Project::new("P1")
            .with_length(1)
            .with_best_before(4)
            .with_role("coding", 2)
            .with_role("design", 1)];

        let staffing = GreedyScheduler::new().solve(&mut pool, &projects);

        assert_eq!(staffing.filled_count(), 0);
        assert_eq!(pool[0].available, 0);
        assert_eq!(pool[0].skill_level("coding"), Some(3));
    }

    #[test]
    fn test_no_double_booking_within_project() {
        // Two coding roles, one coder: the exclusion set blocks reuse.
        let mut pool = vec![coder("Solo", 9)];
        let projects = vec![Project::new("P1")
            .with_length(1)
            .with_best_before(2)
            .with_role("coding", 1)
            .with_role("coding", 1)];

        let staffing = GreedyScheduler::new().solve(&mut pool, &projects);
        assert_eq!(staffing.filled_count(), 0);
    }

    #[test]
    fn test_projects_ordered_by_start_date() {
        // Late(start 8) listed first, Early(start 1) second. Early must
        // be staffed first, locking the only coder until day 3, who is
        // then free again by Late's start date.
        let mut pool = vec![coder("A", 2)];
        let projects = vec![
            Project::new("Late")
                .with_length(2)
                .with_best_before(10)
                .with_role("coding", 1),
            Project::new("Early")
                .with_length(2)
                .with_best_before(3)
                .with_role("coding", 1),
        ];

        let staffing = GreedyScheduler::new().solve(&mut pool, &projects);

        assert_eq!(staffing.filled_count(), 2);
        assert_eq!(staffing.filled[0].name, "Early");
        assert_eq!(staffing.filled[1].name, "Late");
        assert_eq!(pool[0].available, 10);
    }

    #[test]
    fn test_stable_order_on_equal_start_dates() {
        // Same start date: input order is kept, so First grabs the coder
        // and Second is skipped.
        let mut pool = vec![coder("A", 1)];
        let projects = vec![
            Project::new("First")
                .with_length(3)
                .with_best_before(5)
                .with_role("coding", 1),
            Project::new("Second")
                .with_length(3)
                .with_best_before(5)
                .with_role("coding", 1),
        ];

        let staffing = GreedyScheduler::new().solve(&mut pool, &projects);

        assert_eq!(staffing.filled_count(), 1);
        assert_eq!(staffing.filled[0].name, "First");
    }

    #[test]
    fn test_availability_locks_until_deadline() {
        // P1 runs to day 6; P2 starts at day 4 < 6, so A cannot take it.
        let mut pool = vec![coder("A", 3)];
        let projects = vec![
            Project::new("P1")
                .with_length(5)
                .with_best_before(6)
                .with_role("coding", 1),
            Project::new("P2")
                .with_length(1)
                .with_best_before(5)
                .with_role("coding", 1),
        ];

        let staffing = GreedyScheduler::new().solve(&mut pool, &projects);

        assert_eq!(staffing.filled_count(), 1);
        assert_eq!(staffing.filled[0].name, "P1");
        assert_eq!(pool[0].available, 6);
    }

    #[test]
    fn test_skill_grows_at_most_one_per_assignment() {
        // A(coding=1) stretched across two sequential level-matched
        // projects: 1 -> 2 -> 3, one level per commit.
        let mut pool = vec![coder("A", 1)];
        let projects = vec![
            Project::new("P1")
                .with_length(1)
                .with_best_before(1)
                .with_role("coding", 1),
            Project::new("P2")
                .with_length(1)
                .with_best_before(2)
                .with_role("coding", 2),
        ];

        let staffing = GreedyScheduler::new().solve(&mut pool, &projects);

        assert_eq!(staffing.filled_count(), 2);
        assert_eq!(pool[0].skill_level("coding"), Some(3));
        assert_eq!(pool[0].available, 2);
    }

    #[test]
    fn test_negative_start_date_skips_fresh_pool() {
        // start_date = 1 - 5 = -4; available 0 <= -4 is false.
        let mut pool = vec![coder("A", 9)];
        let projects = vec![Project::new("Doomed")
            .with_length(5)
            .with_best_before(1)
            .with_role("coding", 1)];

        let staffing = GreedyScheduler::new().solve(&mut pool, &projects);
        assert_eq!(staffing.filled_count(), 0);
    }

    #[test]
    fn test_zero_role_project_commits_empty_roster() {
        let mut pool = vec![coder("A", 1)];
        let projects = vec![Project::new("NoRoles").with_length(1).with_best_before(1)];

        let staffing = GreedyScheduler::new().solve(&mut pool, &projects);

        assert_eq!(staffing.filled_count(), 1);
        assert!(staffing.filled[0].contributors.is_empty());
        assert_eq!(pool[0].available, 0); // Nobody assigned, nobody locked
    }

    #[test]
    fn test_roster_aligns_with_roles() {
        let mut pool = vec![
            Contributor::new("Des").with_skill("design", 2),
            coder("Cod", 2),
        ];
        let projects = vec![Project::new("P")
            .with_length(1)
            .with_best_before(2)
            .with_role("coding", 1)
            .with_role("design", 1)];

        let staffing = GreedyScheduler::new().solve(&mut pool, &projects);

        let fp = staffing.filled_project("P").unwrap();
        assert_eq!(fp.contributor_count(), 2);
        assert_eq!(fp.contributors, vec!["Cod", "Des"]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let pool = vec![coder("A", 3), coder("B", 3), coder("C", 1)];
        let projects = vec![
            Project::new("P1")
                .with_length(2)
                .with_best_before(4)
                .with_role("coding", 3)
                .with_role("coding", 2),
            Project::new("P2")
                .with_length(1)
                .with_best_before(6)
                .with_role("coding", 2),
        ];

        let scheduler = GreedyScheduler::new();
        let mut pool_a = pool.clone();
        let mut pool_b = pool.clone();
        let run_a = scheduler.solve(&mut pool_a, &projects);
        let run_b = scheduler.solve(&mut pool_b, &projects);

        let flatten = |s: &Staffing| {
            s.filled
                .iter()
                .map(|f| (f.name.clone(), f.contributors.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(flatten(&run_a), flatten(&run_b));
        for (a, b) in pool_a.iter().zip(&pool_b) {
            assert_eq!(a.available, b.available);
            assert_eq!(a.skills, b.skills);
        }
    }

    #[test]
    fn test_progress_callback_counts_projects() {
        let mut pool = vec![coder("A", 1)];
        let projects = vec![
            Project::new("P1")
                .with_length(1)
                .with_best_before(1)
                .with_role("coding", 1),
            Project::new("P2")
                .with_length(1)
                .with_best_before(1)
                .with_role("design", 1), // Will be skipped
        ];

        let mut seen = Vec::new();
        GreedyScheduler::new().solve_with_progress(&mut pool, &projects, |done, total| {
            seen.push((done, total));
        });

        // The callback fires per decided project, filled or skipped.
        assert_eq!(seen, vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn test_empty_input() {
        let mut pool: Vec<Contributor> = Vec::new();
        let staffing = GreedyScheduler::new().solve(&mut pool, &[]);
        assert_eq!(staffing.filled_count(), 0);
    }
}
