//! Batch entry point.
//!
//! Runs the greedy scheduler over the fixed set of named problem
//! instances found under `input_data/` in the current directory and
//! writes staffings to `output_data/`. No flags; log verbosity is
//! controlled through `RUST_LOG`.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crew_schedule::io::{DataStore, StoreError};
use crew_schedule::scheduler::{GreedyScheduler, StaffingKpi};
use crew_schedule::validation::validate_input;

const INSTANCES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn main() -> Result<(), StoreError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = DataStore::new(".");
    let scheduler = GreedyScheduler::new();

    for name in INSTANCES {
        let mut problem = store.load(name)?;
        info!(
            instance = name,
            contributors = problem.contributors.len(),
            projects = problem.projects.len(),
            "loaded"
        );

        // Input is trusted; findings are surfaced but not fatal.
        if let Err(errors) = validate_input(&problem.contributors, &problem.projects) {
            for error in &errors {
                warn!(instance = name, "{}", error.message);
            }
        }

        let bar = ProgressBar::new(problem.projects.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .expect("static template"),
        );
        bar.set_message(name.to_string());

        let staffing = scheduler.solve_with_progress(
            &mut problem.contributors,
            &problem.projects,
            |done, _total| bar.set_position(done as u64),
        );
        bar.finish_and_clear();

        let kpi = StaffingKpi::calculate(&staffing, &problem.projects);
        info!(
            instance = name,
            filled = kpi.filled_count,
            skipped = kpi.skipped_count,
            points = kpi.total_points,
            contributors_used = kpi.contributors_used,
            "solved"
        );

        store.store(name, &staffing)?;
    }

    Ok(())
}
