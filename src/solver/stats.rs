use prettytable::{Cell, Row, Table};

use crate::solver::engine::SearchStats;

/// Renders a solve run's counters as a bordered table.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

    let rows: [(&str, String); 8] = [
        ("Nodes visited", stats.nodes_visited.to_string()),
        ("Trial assignments", stats.assignments.to_string()),
        ("Backtracks", stats.backtracks.to_string()),
        ("Prunings", stats.prunings.to_string()),
        ("Consistency checks", stats.propagation_calls.to_string()),
        ("Trail pushes", stats.trail_pushes.to_string()),
        ("Undos", stats.undo_count.to_string()),
        (
            "Time (ms)",
            format!("{:.2}", stats.time_spent_micros as f64 / 1000.0),
        ),
    ];
    for (metric, value) in rows {
        table.add_row(Row::new(vec![Cell::new(metric), Cell::new(&value)]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_counter() {
        let stats = SearchStats {
            nodes_visited: 12,
            backtracks: 3,
            ..SearchStats::default()
        };
        let rendered = render_stats_table(&stats);
        assert!(rendered.contains("Nodes visited"));
        assert!(rendered.contains("12"));
        assert!(rendered.contains("Backtracks"));
        assert!(rendered.contains("Trail pushes"));
    }
}
