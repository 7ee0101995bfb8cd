use super::{Algorithm, Solver};
use crate::checks::ensure_valid_projects;
use crate::model::{Project, Solution};
use eyre::Error;
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

/// Top-down recursion where every `(items, remaining hours)` subproblem is
/// computed once. O(n·C) time and space.
pub struct Memoized;

/// Cache owned by a single `solve` call.
struct Memo<'a> {
    projects: &'a [Project],
    cache: HashMap<(usize, u32), u64>,
}

impl<'a> Memo<'a> {
    fn new(projects: &'a [Project]) -> Self {
        Memo {
            projects,
            cache: HashMap::new(),
        }
    }

    /// Best value reachable with the first `i` projects and `rem` hours left.
    fn best_value(&mut self, i: usize, rem: u32) -> u64 {
        if i == 0 || rem == 0 {
            return 0;
        }
        if let Some(&value) = self.cache.get(&(i, rem)) {
            return value;
        }
        let projects = self.projects;
        let project = &projects[i - 1];
        let mut best = self.best_value(i - 1, rem);
        if project.hours <= rem {
            best = best.max(project.value + self.best_value(i - 1, rem - project.hours));
        }
        self.cache.insert((i, rem), best);
        best
    }

    /// Walk back from `(n, capacity)`, keeping a project only when taking it
    /// is strictly better than leaving it out.
    fn reconstruct(&mut self, capacity: u32) -> Vec<usize> {
        let mut chosen = Vec::new();
        let mut rem = capacity;
        let projects = self.projects;
        let mut i = projects.len();
        while i > 0 && rem > 0 {
            let project = &projects[i - 1];
            let without = self.best_value(i - 1, rem);
            let with = (project.hours <= rem)
                .then(|| project.value + self.best_value(i - 1, rem - project.hours));
            if with.is_some_and(|with| with > without) {
                trace!(project = %project, rem, "Project is part of the optimum");
                chosen.push(i - 1);
                rem -= project.hours;
            }
            i -= 1;
        }
        chosen.reverse();
        chosen
    }
}

impl Solver for Memoized {
    fn name(&self) -> &'static str {
        Algorithm::Memoized.name()
    }

    #[instrument(skip_all, fields(items = projects.len(), capacity = capacity))]
    fn solve(&self, projects: &[Project], capacity: u32) -> Result<Solution, Error> {
        ensure_valid_projects(projects)?;
        let mut memo = Memo::new(projects);
        let best = memo.best_value(projects.len(), capacity);
        debug!(best, cached = memo.cache.len(), "Subproblems solved");
        let solution = Solution::from_indices(projects, memo.reconstruct(capacity));
        debug_assert_eq!(solution.total_value, best);
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_is_bounded() {
        let projects = (1..=6)
            .map(|i| Project::new(format!("P{i}"), u64::from(i) * 3, i))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let mut memo = Memo::new(&projects);
        assert_eq!(memo.best_value(projects.len(), 10), 30);
        assert!(memo.cache.len() <= projects.len() * 10);
    }

    #[test]
    fn test_reconstruction_with_cache() {
        let projects = vec![
            Project::new("A", 8, 4).unwrap(),
            Project::new("B", 7, 3).unwrap(),
            Project::new("C", 6, 2).unwrap(),
        ];
        let s = Memoized.solve(&projects, 6).unwrap();
        assert_eq!(s.selected, vec!["A", "C"]);
        assert_eq!((s.total_value, s.used_hours), (14, 6));
    }
}
