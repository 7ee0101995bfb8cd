use eyre::{Error, ensure};
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    pub name: String,
    pub value: u64,
    pub hours: u32,
}

impl Project {
    pub fn new(name: impl Into<String>, value: u64, hours: u32) -> Result<Project, Error> {
        let name = name.into();
        ensure!(hours > 0, "project {name} must require at least one hour");
        Ok(Project { name, value, hours })
    }

    /// Value per hour, for display purposes only.
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        self.value as f64 / f64::from(self.hours)
    }

    /// Compare value/hours ratios exactly, without going through floats.
    pub fn cmp_ratio(&self, other: &Project) -> Ordering {
        (u128::from(self.value) * u128::from(other.hours))
            .cmp(&(u128::from(other.value) * u128::from(self.hours)))
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (value {}, hours {})", self.name, self.value, self.hours)
    }
}

#[test]
fn test_reject_zero_hours() {
    assert!(Project::new("idle", 3, 0).is_err());
    assert!(Project::new("free", 0, 1).is_ok());
}

#[test]
fn test_cmp_ratio() {
    let a = Project::new("A", 8, 4).unwrap();
    let b = Project::new("B", 7, 3).unwrap();
    let c = Project::new("C", 6, 2).unwrap();
    assert_eq!(c.cmp_ratio(&b), Ordering::Greater);
    assert_eq!(b.cmp_ratio(&a), Ordering::Greater);
    let d = Project::new("D", 4, 2).unwrap();
    assert_eq!(a.cmp_ratio(&d), Ordering::Equal);
    assert_eq!(format!("{a}"), "A (value 8, hours 4)");
}
