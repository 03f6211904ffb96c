use std::fmt::{Display, Write};

use search_core::{SearchOutcome, SearchReport};

/// Render a solved path, one step per block, labelling each transition with `describe`.
pub fn render_solution<S, D>(report: &SearchReport<S>, mut describe: D) -> String
where
    S: Display,
    D: FnMut(&S, &S) -> Option<String>,
{
    let mut out = String::new();
    match &report.outcome {
        SearchOutcome::NoSolution => {
            let _ = writeln!(out, "No solution found.");
        }
        SearchOutcome::Found(solution) => {
            let mut prev: Option<&S> = None;
            for (i, state) in solution.path.iter().enumerate() {
                match prev.and_then(|p| describe(p, state)) {
                    Some(label) => {
                        let _ = writeln!(out, "Step {i}: {label}");
                    }
                    None => {
                        let _ = writeln!(out, "Step {i}:");
                    }
                }
                let _ = writeln!(out, "{state}");
                prev = Some(state);
            }
            let _ = writeln!(
                out,
                "Solved in {} moves (cost {}).",
                solution.moves(),
                solution.cost
            );
        }
    }
    let stats = report.stats;
    let _ = write!(
        out,
        "Expanded {} states, generated {}, peak frontier {}.",
        stats.expanded, stats.generated, stats.max_frontier
    );
    out
}

pub fn print_solution<S, D>(report: &SearchReport<S>, describe: D)
where
    S: Display,
    D: FnMut(&S, &S) -> Option<String>,
{
    println!("{}", render_solution(report, describe));
}
