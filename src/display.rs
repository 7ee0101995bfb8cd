use crate::algos::Algorithm;
use crate::model::{Project, Solution};
use crate::stats::Comparison;

pub fn display_case(title: &str, projects: &[Project], capacity: u32) {
    println!("{}", "=".repeat(60));
    println!("Case: {title}");
    println!("Projects:");
    for p in projects {
        println!("  - {p} (ratio {:.2})", p.ratio());
    }
    println!("Capacity: {capacity}");
}

pub fn display_solution(algorithm: Algorithm, solution: &Solution) {
    println!();
    println!("--- {algorithm} ---");
    if solution.is_empty() {
        println!("Selected: none");
    } else {
        println!("Selected: [{}]", solution.selected.join(", "));
    }
    println!("Total value: {}", solution.total_value);
    println!("Used hours: {}", solution.used_hours);
}

pub fn display_comparison(c: &Comparison) {
    println!();
    if !c.disagreement.is_empty() {
        println!("Exact algorithms disagree:");
        for (algorithm, value) in &c.disagreement {
            println!("  - {algorithm}: {value}");
        }
        return;
    }
    match (c.greedy, c.optimum) {
        (Some((greedy, 0)), Some(_)) => {
            println!("Greedy found the optimal value ({greedy}) in this case.");
        }
        (Some((greedy, gap)), Some(optimum)) => {
            print!("Greedy did NOT find the optimum: {greedy} vs {optimum} (missing {gap}");
            if let Some(percent) = c.greedy_gap_percent() {
                print!(", {percent:.2}%");
            }
            println!(")");
        }
        _ => {}
    }
}

pub fn display_complexity_summary() {
    println!("{}", "=".repeat(60));
    println!("Complexity:");
    println!("  - Greedy: O(n log n) time, O(n) space. Heuristic, not optimal in general.");
    println!("  - Brute force: O(2^n) time, O(n) stack space.");
    println!("  - Memoized (top-down): O(n * C) time, O(n * C) space.");
    println!(
        "  - Dynamic programming (bottom-up): O(n * C) time, O(n * C) space (O(C) for the value alone)."
    );
}
