use crate::algos::Algorithm;
use crate::model::Solution;

#[derive(Debug, PartialEq)]
pub struct Comparison {
    /// Value found by the exact algorithms, if they all agree.
    pub optimum: Option<u64>,
    /// Distinct values returned by exact algorithms which disagree.
    pub disagreement: Vec<(Algorithm, u64)>,
    /// Greedy value and its distance to the optimum.
    pub greedy: Option<(u64, u64)>,
}

pub fn compare(results: &[(Algorithm, Solution)]) -> Comparison {
    let exact = results
        .iter()
        .filter(|(a, _)| a.is_exact())
        .map(|(a, s)| (*a, s.total_value))
        .collect::<Vec<_>>();
    let agree = exact.windows(2).all(|w| w[0].1 == w[1].1);
    let optimum = if agree {
        exact.first().map(|&(_, v)| v)
    } else {
        None
    };
    let greedy = results
        .iter()
        .find(|(a, _)| !a.is_exact())
        .map(|(_, s)| s.total_value)
        .and_then(|g| optimum.map(|o| (g, o.saturating_sub(g))));
    Comparison {
        optimum,
        disagreement: if agree { Vec::new() } else { exact },
        greedy,
    }
}

impl Comparison {
    /// Percentage of the optimum lost by greedy.
    #[allow(clippy::cast_precision_loss)]
    pub fn greedy_gap_percent(&self) -> Option<f64> {
        match (self.greedy, self.optimum) {
            (Some((_, gap)), Some(optimum)) if optimum > 0 => {
                Some(100.0 * gap as f64 / optimum as f64)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valued(total_value: u64) -> Solution {
        Solution {
            total_value,
            ..Solution::empty()
        }
    }

    #[test]
    fn test_gap() {
        let c = compare(&[
            (Algorithm::Greedy, valued(13)),
            (Algorithm::Memoized, valued(14)),
            (Algorithm::BottomUp, valued(14)),
        ]);
        assert_eq!(c.optimum, Some(14));
        assert_eq!(c.greedy, Some((13, 1)));
        assert!(c.disagreement.is_empty());
        let gap = c.greedy_gap_percent().unwrap();
        assert!((gap - 100.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_disagreement() {
        let c = compare(&[
            (Algorithm::Memoized, valued(14)),
            (Algorithm::BottomUp, valued(13)),
        ]);
        assert_eq!(c.optimum, None);
        assert_eq!(c.disagreement.len(), 2);
    }

    #[test]
    fn test_greedy_only() {
        let c = compare(&[(Algorithm::Greedy, valued(5))]);
        assert_eq!(c.optimum, None);
        assert_eq!(c.greedy, None);
        assert!(c.disagreement.is_empty());
        assert_eq!(c.greedy_gap_percent(), None);
    }
}
