//! Plain-text reports.
//!
//! - [`summary_table`] - hits, faults and hit ratio per policy
//! - [`step_table`] - one row per step with the memory contents

use crate::common::PageId;
use crate::engine::{Comparison, Policy, SimulationResult};
use crate::stats::Summary;

/// Shown in place of a step table when a run produced no steps.
pub const NO_DATA: &str = "No simulation data available";

/// Render `[ 1, 2, 3 ]`, or `[ ]` for an empty frame set.
pub fn format_memory(memory: &[PageId]) -> String {
    if memory.is_empty() {
        return "[ ]".to_string();
    }
    let pages: Vec<String> = memory.iter().map(PageId::to_string).collect();
    format!("[ {} ]", pages.join(", "))
}

/// One row per policy, in fifo, lru, optimal order.
///
/// ```text
/// Algorithm  Hits  Faults  Hit Ratio
/// fifo          2       5     28.57%
/// ```
pub fn summary_table(comparison: &Comparison) -> String {
    render_summary(comparison.summaries())
}

/// Same layout as [`summary_table`], restricted to `policy` when set.
pub fn filtered_summary_table(comparison: &Comparison, policy: Option<Policy>) -> String {
    render_summary(
        comparison
            .summaries()
            .into_iter()
            .filter(|(p, _)| policy.map_or(true, |only| only == *p))
            .collect(),
    )
}

fn render_summary(rows: Vec<(Policy, Summary)>) -> String {
    let mut out = format!(
        "{:<10} {:>5} {:>7} {:>10}\n",
        "Algorithm", "Hits", "Faults", "Hit Ratio"
    );
    for (policy, summary) in rows {
        out.push_str(&format!(
            "{:<10} {:>5} {:>7} {:>9.2}%\n",
            policy.name(),
            summary.hits,
            summary.faults,
            summary.hit_ratio() * 100.0
        ));
    }
    out
}

/// Step-by-step table for one run, steps numbered from 1.
pub fn step_table(result: &SimulationResult) -> String {
    let mut out = format!("{} Algorithm\n", result.policy().title());

    if result.steps().is_empty() {
        out.push_str(NO_DATA);
        out.push('\n');
        return out;
    }

    out.push_str(&format!(
        "{:>4}  {:>6}  {:<24} {}\n",
        "Step", "Page", "Memory State", "Status"
    ));
    for (index, step) in result.steps().iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:>6}  {:<24} {}\n",
            index + 1,
            step.page,
            format_memory(&step.memory),
            if step.fault { "Fault" } else { "Hit" }
        ));
    }
    out
}
