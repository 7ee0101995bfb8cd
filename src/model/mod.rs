pub use self::project::Project;
pub use self::solution::Solution;

mod project;
mod solution;
