use super::Project;
use std::fmt;

/// Outcome of a solver: selected project names, their total value and
/// the hours they consume.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Solution {
    pub selected: Vec<String>,
    pub total_value: u64,
    pub used_hours: u32,
}

impl Solution {
    pub fn empty() -> Solution {
        Solution::default()
    }

    /// Build a solution from item indices, keeping the order in which they are given.
    pub fn from_indices(
        projects: &[Project],
        indices: impl IntoIterator<Item = usize>,
    ) -> Solution {
        indices.into_iter().fold(Solution::empty(), |mut solution, i| {
            let project = &projects[i];
            solution.selected.push(project.name.clone());
            solution.total_value += project.value;
            solution.used_hours += project.hours;
            solution
        })
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] value {} in {} hours",
            self.selected.join(", "),
            self.total_value,
            self.used_hours
        )
    }
}

#[test]
fn test_from_indices() {
    let projects = vec![
        Project::new("A", 8, 4).unwrap(),
        Project::new("B", 7, 3).unwrap(),
        Project::new("C", 6, 2).unwrap(),
    ];
    let s = Solution::from_indices(&projects, [2, 0]);
    assert_eq!(s.selected, vec!["C", "A"]);
    assert_eq!(s.total_value, 14);
    assert_eq!(s.used_hours, 6);
    assert!(Solution::from_indices(&projects, []).is_empty());
}
