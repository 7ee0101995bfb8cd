use crate::model::Project;
use eyre::Error;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Scenario {
    pub title: String,
    pub projects: Vec<Project>,
    pub capacity: u32,
}

impl Scenario {
    pub fn new(
        title: impl Into<String>,
        projects: &[(&str, u64, u32)],
        capacity: u32,
    ) -> Result<Self, Error> {
        Ok(Scenario {
            title: title.into(),
            projects: projects
                .iter()
                .map(|&(name, value, hours)| Project::new(name, value, hours))
                .collect::<Result<_, _>>()?,
            capacity,
        })
    }

    pub fn total_hours(&self) -> u32 {
        self.projects.iter().map(|p| p.hours).sum()
    }
}

/// Fixed cases, including one where the greedy heuristic misses the optimum.
pub fn builtin() -> Result<Vec<Scenario>, Error> {
    Ok(vec![
        Scenario::new(
            "Statement example (C=10)",
            &[
                ("Projeto A", 12, 4),
                ("Projeto B", 10, 3),
                ("Projeto C", 7, 2),
                ("Projeto D", 4, 3),
            ],
            10,
        )?,
        // Ratios: C 3.0, B 2.33, A 2.0. Greedy takes C+B (13), optimum is A+C (14).
        Scenario::new("Greedy fails", &[("A", 8, 4), ("B", 7, 3), ("C", 6, 2)], 6)?,
        Scenario::new("Zero capacity", &[("X", 5, 3), ("Y", 10, 5)], 0)?,
        Scenario::new(
            "Larger case (C=15)",
            &[
                ("P1", 20, 6),
                ("P2", 30, 9),
                ("P3", 14, 4),
                ("P4", 16, 5),
                ("P5", 9, 3),
            ],
            15,
        )?,
    ])
}

/// Generate `n` projects worth 1 to 100 and taking 1 to 20 hours each.
pub fn random_projects(rng: &mut impl Rng, n: usize) -> Vec<Project> {
    (1..=n)
        .map(|i| Project {
            name: format!("R{i}"),
            value: rng.random_range(1..=100),
            hours: rng.random_range(1..=20),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin() {
        let scenarios = builtin().unwrap();
        assert_eq!(scenarios.len(), 4);
        assert_eq!(scenarios[0].total_hours(), 12);
        assert_eq!(scenarios[2].capacity, 0);
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = random_projects(&mut StdRng::seed_from_u64(42), 10);
        let b = random_projects(&mut StdRng::seed_from_u64(42), 10);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| (1..=20).contains(&p.hours) && (1..=100).contains(&p.value)));
    }
}
