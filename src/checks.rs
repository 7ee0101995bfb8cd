use crate::model::{Project, Solution};
use eyre::{Error, bail, ensure, eyre};
use std::collections::{HashMap, HashSet};

pub fn ensure_valid_projects(projects: &[Project]) -> Result<(), Error> {
    if let Some(p) = projects.iter().find(|p| p.hours == 0) {
        bail!("project {} requires no hours", p.name);
    }
    // Every partial sum computed by a solver is bounded by this total.
    ensure!(
        projects
            .iter()
            .try_fold(0u64, |acc, p| acc.checked_add(p.value))
            .is_some(),
        "total value of the projects does not fit in 64 bits"
    );
    Ok(())
}

/// Check that a solution respects the capacity, names no project twice and
/// reports the value and hours of exactly the projects it names.
pub fn check_solution(
    projects: &[Project],
    capacity: u32,
    solution: &Solution,
) -> Result<(), Error> {
    ensure!(
        solution.used_hours <= capacity,
        "{} hours used out of {capacity} available",
        solution.used_hours
    );
    let by_name = projects
        .iter()
        .map(|p| (p.name.as_str(), p))
        .collect::<HashMap<_, _>>();
    let mut seen = HashSet::new();
    let (mut value, mut hours) = (0u64, 0u32);
    for name in &solution.selected {
        ensure!(seen.insert(name), "project {name} selected twice");
        let project = by_name
            .get(name.as_str())
            .ok_or_else(|| eyre!("unknown project {name} selected"))?;
        value = value
            .checked_add(project.value)
            .ok_or_else(|| eyre!("total value of selected projects overflows"))?;
        hours = hours
            .checked_add(project.hours)
            .ok_or_else(|| eyre!("total hours of selected projects overflow"))?;
    }
    ensure!(
        value == solution.total_value,
        "total value is {} but selected projects are worth {value}",
        solution.total_value
    );
    ensure!(
        hours == solution.used_hours,
        "used hours are {} but selected projects take {hours}",
        solution.used_hours
    );
    Ok(())
}
