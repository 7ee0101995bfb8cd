use super::{Algorithm, Solver};
use crate::checks::ensure_valid_projects;
use crate::model::{Project, Solution};
use eyre::Error;
use tracing::{debug, instrument, trace};

/// Naive exhaustive recursion, without any caching. Exact but O(2^n), and
/// reconstruction recomputes the recursion at every step.
pub struct BruteForce;

/// Best value reachable with the first `i` projects and `rem` hours left.
fn best_value(projects: &[Project], i: usize, rem: u32) -> u64 {
    if i == 0 || rem == 0 {
        return 0;
    }
    let project = &projects[i - 1];
    let without = best_value(projects, i - 1, rem);
    if project.hours <= rem {
        without.max(project.value + best_value(projects, i - 1, rem - project.hours))
    } else {
        without
    }
}

impl Solver for BruteForce {
    fn name(&self) -> &'static str {
        Algorithm::BruteForce.name()
    }

    #[instrument(skip_all, fields(items = projects.len(), capacity = capacity))]
    fn solve(&self, projects: &[Project], capacity: u32) -> Result<Solution, Error> {
        ensure_valid_projects(projects)?;
        let best = best_value(projects, projects.len(), capacity);
        let mut chosen = Vec::new();
        let mut rem = capacity;
        for i in (1..=projects.len()).rev() {
            if rem == 0 {
                break;
            }
            let project = &projects[i - 1];
            let without = best_value(projects, i - 1, rem);
            let with = (project.hours <= rem)
                .then(|| project.value + best_value(projects, i - 1, rem - project.hours));
            // On a tie the project is left out.
            if with.is_some_and(|with| with > without) {
                trace!(project = %project, rem, "Project is part of the optimum");
                chosen.push(i - 1);
                rem -= project.hours;
            }
        }
        chosen.reverse();
        let solution = Solution::from_indices(projects, chosen);
        debug_assert_eq!(solution.total_value, best);
        debug!(best, solution = %solution, "Exhaustive search done");
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_value() {
        let projects = vec![
            Project::new("A", 8, 4).unwrap(),
            Project::new("B", 7, 3).unwrap(),
            Project::new("C", 6, 2).unwrap(),
        ];
        assert_eq!(best_value(&projects, 3, 6), 14);
        assert_eq!(best_value(&projects, 3, 9), 21);
        assert_eq!(best_value(&projects, 2, 6), 8);
        assert_eq!(best_value(&projects, 0, 6), 0);
        assert_eq!(best_value(&projects, 3, 0), 0);
    }

    #[test]
    fn test_tie_prefers_exclusion() {
        // Both projects are worth the same: the last one is left out
        // since the first one alone reaches the same value.
        let projects = vec![
            Project::new("A", 5, 2).unwrap(),
            Project::new("B", 5, 2).unwrap(),
        ];
        let s = BruteForce.solve(&projects, 2).unwrap();
        assert_eq!(s.selected, vec!["A"]);
        assert_eq!(s.total_value, 5);
    }

    #[test]
    fn test_zero_value_never_selected() {
        let projects = vec![
            Project::new("nothing", 0, 1).unwrap(),
            Project::new("something", 3, 1).unwrap(),
        ];
        let s = BruteForce.solve(&projects, 5).unwrap();
        assert_eq!(s.selected, vec!["something"]);
        assert_eq!(s.used_hours, 1);
    }
}
