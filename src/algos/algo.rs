use super::{BottomUp, BruteForce, Greedy, Memoized};
use crate::model::{Project, Solution};
use clap::ValueEnum;
use eyre::Error;
use serde::Deserialize;
use std::fmt;

pub trait Solver {
    fn name(&self) -> &'static str;
    fn solve(&self, projects: &[Project], capacity: u32) -> Result<Solution, Error>;
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Greedy,
    BruteForce,
    Memoized,
    #[serde(alias = "dp")]
    #[value(alias = "dp")]
    BottomUp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Greedy,
        Algorithm::BruteForce,
        Algorithm::Memoized,
        Algorithm::BottomUp,
    ];

    pub fn solver(self) -> Box<dyn Solver> {
        match self {
            Algorithm::Greedy => Box::new(Greedy),
            Algorithm::BruteForce => Box::new(BruteForce),
            Algorithm::Memoized => Box::new(Memoized),
            Algorithm::BottomUp => Box::new(BottomUp),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Greedy => "Greedy",
            Algorithm::BruteForce => "Brute force",
            Algorithm::Memoized => "Memoized (top-down)",
            Algorithm::BottomUp => "Dynamic programming (bottom-up)",
        }
    }

    /// Greedy is a heuristic, every other algorithm returns the optimum.
    pub fn is_exact(self) -> bool {
        self != Algorithm::Greedy
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
