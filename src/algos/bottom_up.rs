use super::{Algorithm, Solver};
use crate::checks::ensure_valid_projects;
use crate::model::{Project, Solution};
use eyre::Error;
use pathfinding::matrix::Matrix;
use tracing::{debug, instrument, trace};

/// Iterative dynamic programming over a dense `(n+1) × (C+1)` table, in
/// O(n·C) time and space.
///
/// Only row `i-1` is read while filling row `i`, so the value alone could be
/// computed with a single row of C+1 entries. The full table is kept because
/// reconstruction needs it.
pub struct BottomUp;

/// `table[(i, c)]` is the best value using the first `i` projects within `c` hours.
fn fill_table(projects: &[Project], capacity: u32) -> Matrix<u64> {
    let columns = capacity as usize + 1;
    let mut table = Matrix::new(projects.len() + 1, columns, 0u64);
    for (i, project) in projects.iter().enumerate().map(|(i, p)| (i + 1, p)) {
        let hours = project.hours as usize;
        for c in 0..columns {
            let without = table[(i - 1, c)];
            table[(i, c)] = if hours <= c {
                without.max(project.value + table[(i - 1, c - hours)])
            } else {
                without
            };
        }
    }
    table
}

/// Walk back from the bottom-right cell: a change of value between two rows
/// means the project of the lower row was used.
fn reconstruct(projects: &[Project], table: &Matrix<u64>, capacity: u32) -> Vec<usize> {
    let mut chosen = Vec::new();
    let mut c = capacity as usize;
    for i in (1..=projects.len()).rev() {
        if table[(i, c)] != table[(i - 1, c)] {
            let project = &projects[i - 1];
            trace!(project = %project, c, "Project is part of the optimum");
            chosen.push(i - 1);
            c = c.saturating_sub(project.hours as usize);
        }
    }
    chosen.reverse();
    chosen
}

impl Solver for BottomUp {
    fn name(&self) -> &'static str {
        Algorithm::BottomUp.name()
    }

    #[instrument(skip_all, fields(items = projects.len(), capacity = capacity))]
    fn solve(&self, projects: &[Project], capacity: u32) -> Result<Solution, Error> {
        ensure_valid_projects(projects)?;
        let table = fill_table(projects, capacity);
        let best = table[(projects.len(), capacity as usize)];
        debug!(best, rows = table.rows, columns = table.columns, "Table filled");
        let solution = Solution::from_indices(projects, reconstruct(projects, &table, capacity));
        debug_assert_eq!(solution.total_value, best);
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Vec<Project> {
        vec![
            Project::new("A", 8, 4).unwrap(),
            Project::new("B", 7, 3).unwrap(),
            Project::new("C", 6, 2).unwrap(),
        ]
    }

    #[test]
    fn test_table() {
        let table = fill_table(&projects(), 6);
        assert_eq!(table.rows, 4);
        assert_eq!(table.columns, 7);
        assert!((0..7).all(|c| table[(0, c)] == 0));
        assert_eq!(table[(1, 3)], 0);
        assert_eq!(table[(1, 4)], 8);
        assert_eq!(table[(2, 6)], 8);
        assert_eq!(table[(3, 5)], 13);
        assert_eq!(table[(3, 6)], 14);
    }

    #[test]
    fn test_solution() {
        let s = BottomUp.solve(&projects(), 6).unwrap();
        assert_eq!(s.selected, vec!["A", "C"]);
        assert_eq!((s.total_value, s.used_hours), (14, 6));
    }

    #[test]
    fn test_only_column_zero() {
        let table = fill_table(&projects(), 0);
        assert_eq!(table.columns, 1);
        assert_eq!(BottomUp.solve(&projects(), 0).unwrap(), Solution::empty());
    }
}
