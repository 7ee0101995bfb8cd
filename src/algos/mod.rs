pub use self::algo::{Algorithm, Solver};
pub use self::bottom_up::BottomUp;
pub use self::brute_force::BruteForce;
pub use self::greedy::Greedy;
pub use self::memoized::Memoized;

mod algo;
mod bottom_up;
mod brute_force;
mod greedy;
mod memoized;
