use super::{Algorithm, Solver};
use crate::checks::ensure_valid_projects;
use crate::model::{Project, Solution};
use eyre::Error;
use tracing::{debug, instrument, trace};

/// Ratio-greedy heuristic: rank projects by decreasing value per hour and
/// take every project that still fits. Runs in O(n log n) time and O(n)
/// space but is not guaranteed to reach the optimal value.
pub struct Greedy;

impl Solver for Greedy {
    fn name(&self) -> &'static str {
        Algorithm::Greedy.name()
    }

    /// Selected projects are reported in ranking order.
    #[instrument(skip_all, fields(items = projects.len(), capacity = capacity))]
    fn solve(&self, projects: &[Project], capacity: u32) -> Result<Solution, Error> {
        ensure_valid_projects(projects)?;
        let mut ranked = (0..projects.len()).collect::<Vec<_>>();
        // Stable sort: equal ratios keep their input order.
        ranked.sort_by(|&a, &b| projects[b].cmp_ratio(&projects[a]));
        let mut remaining = capacity;
        let chosen = ranked
            .into_iter()
            .filter(|&i| {
                let project = &projects[i];
                if project.hours <= remaining {
                    remaining -= project.hours;
                    trace!(project = %project, remaining, "Taking project");
                    true
                } else {
                    false
                }
            })
            .collect::<Vec<_>>();
        let solution = Solution::from_indices(projects, chosen);
        debug!(solution = %solution, "Greedy selection done");
        Ok(solution)
    }
}
