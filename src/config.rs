use crate::algos::Algorithm;
use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "knapsolver.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub solver: SolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub capacity: Option<u32>,
    pub algorithms: Vec<Algorithm>,
    /// Brute force is skipped for instances with more items than this.
    pub brute_force_limit: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            capacity: None,
            algorithms: Algorithm::ALL.to_vec(),
            brute_force_limit: 24,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub complexity_summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            complexity_summary: true,
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Error> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot read configuration file {}", file_name.display()))?;
        Self::parse(&content).wrap_err("cannot load configuration file")
    }

    pub fn parse(content: &str) -> Result<Config, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Load the given file, or the default one if it exists.
    pub fn find(file_name: Option<&Path>) -> Result<Config, Error> {
        match file_name {
            Some(file_name) => Self::load(file_name),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Config::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.solver.capacity, None);
        assert_eq!(config.solver.algorithms, Algorithm::ALL.to_vec());
        assert_eq!(config.solver.brute_force_limit, 24);
        assert!(config.output.complexity_summary);
    }

    #[test]
    fn test_parse() {
        let config = Config::parse(
            r#"
            [solver]
            capacity = 10
            algorithms = ["greedy", "dp"]

            [output]
            complexity_summary = false
            "#,
        )
        .unwrap();
        assert_eq!(config.solver.capacity, Some(10));
        assert_eq!(
            config.solver.algorithms,
            vec![Algorithm::Greedy, Algorithm::BottomUp]
        );
        assert!(!config.output.complexity_summary);
    }

    #[test]
    fn test_unknown_keys() {
        assert!(Config::parse("[solver]\nbudget = 3\n").is_err());
        assert!(Config::parse("[solver]\nalgorithms = [\"simplex\"]\n").is_err());
    }
}
