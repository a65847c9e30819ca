//! Plain-text banner report.
//!
//! Renders the analysis report in the classic fixed-width banner layout,
//! suitable for saving to a file or piping to a pager.

use chrono::Local;
use dijk_core::Report;

const RULE_HEAVY: &str =
    "======================================================================";
const RULE_LIGHT: &str =
    "----------------------------------------------------------------------";

/// Render the full banner-style analysis report.
pub fn banner_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(RULE_HEAVY);
    out.push('\n');
    out.push_str("DIJKSTRA'S SHORTEST PATH ALGORITHM - ANALYSIS REPORT\n");
    out.push_str(RULE_HEAVY);
    out.push_str("\n\n");

    out.push_str(&format!(
        "Generated: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Source Node: {}\n", report.source));
    out.push_str(&format!("Total Nodes: {}\n", report.node_count));
    out.push_str(&format!("Total Edges: {}\n", report.edge_count));
    out.push_str(&format!(
        "Graph Type: {}\n",
        if report.directed {
            "Directed"
        } else {
            "Undirected"
        }
    ));
    out.push('\n');
    out.push_str(RULE_LIGHT);
    out.push_str("\n\n");

    out.push_str("SHORTEST DISTANCES FROM SOURCE\n");
    out.push_str(RULE_LIGHT);
    out.push_str("\n\n");

    let reachable: Vec<_> = report.reachable().collect();
    if reachable.is_empty() {
        out.push_str("No reachable nodes found.\n");
    } else {
        out.push_str(&format!(
            "{:<15} {:<15} {:<40}\n",
            "Destination", "Distance", "Path"
        ));
        out.push_str(RULE_LIGHT);
        out.push('\n');
        for dest in &reachable {
            let distance = dest.distance.unwrap_or(f64::INFINITY);
            out.push_str(&format!(
                "{:<15} {:<15.1} {:<40}\n",
                dest.label,
                distance,
                dest.path.join(" → ")
            ));
        }
    }

    out.push('\n');
    out.push_str(RULE_LIGHT);
    out.push_str("\n\n");

    let unreachable: Vec<_> = report.unreachable().collect();
    if unreachable.is_empty() {
        out.push_str("ALL NODES ARE REACHABLE\n");
        out.push_str(RULE_LIGHT);
        out.push_str("\n\n");
        out.push_str("All nodes in the graph can be reached from the source node.\n");
    } else {
        out.push_str("UNREACHABLE NODES\n");
        out.push_str(RULE_LIGHT);
        out.push_str("\n\n");
        out.push_str("The following nodes cannot be reached from the source node:\n");
        let labels: Vec<&str> = unreachable.iter().map(|d| d.label.as_str()).collect();
        out.push_str(&labels.join(", "));
        out.push_str("\n\n");
        out.push_str("Reason: No valid path exists from source to these nodes.\n");
        if report.directed {
            out.push_str("Note: In a directed graph, check if edges point toward these nodes.\n");
        }
    }

    out.push('\n');
    out.push_str("STATISTICS\n");
    out.push_str(RULE_LIGHT);
    out.push_str("\n\n");
    out.push_str(&format!("Reachable: {}\n", report.stats.reachable));
    out.push_str(&format!("Unreachable: {}\n", report.stats.unreachable));
    if let Some((label, d)) = &report.stats.min {
        out.push_str(&format!("Closest: {} ({:.1})\n", label, d));
    }
    if let Some((label, d)) = &report.stats.max {
        out.push_str(&format!("Farthest: {} ({:.1})\n", label, d));
    }
    if let Some(avg) = report.stats.average {
        out.push_str(&format!("Average distance: {:.2}\n", avg));
    }

    out.push('\n');
    out.push_str(RULE_HEAVY);
    out.push('\n');
    out.push_str("END OF REPORT\n");
    out.push_str(RULE_HEAVY);
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dijk_core::Session;

    fn report_for(directed: bool) -> Report {
        let mut session = Session::new();
        let a = session.add_node(0.0, 0.0).unwrap();
        let b = session.add_node(100.0, 0.0).unwrap();
        session.add_node(200.0, 0.0).unwrap();
        session.add_edge(a, b, 1.5).unwrap();
        session.set_source(a);
        session.set_directedness(directed);
        session.run().unwrap();
        session.run_to_completion();
        session.report().unwrap()
    }

    #[test]
    fn test_banner_layout() {
        let text = banner_report(&report_for(true));
        assert!(text.starts_with(RULE_HEAVY));
        assert!(text.contains("ANALYSIS REPORT"));
        assert!(text.contains("Source Node: A"));
        assert!(text.contains("Graph Type: Directed"));
        assert!(text.contains("A → B"));
        assert!(text.contains("UNREACHABLE NODES"));
        assert!(text.contains("check if edges point toward"));
        assert!(text.trim_end().ends_with(RULE_HEAVY));
    }

    #[test]
    fn test_undirected_omits_direction_note() {
        let text = banner_report(&report_for(false));
        assert!(text.contains("Graph Type: Undirected"));
        assert!(!text.contains("check if edges point toward"));
    }

    #[test]
    fn test_all_reachable_section() {
        let mut session = Session::new();
        let a = session.add_node(0.0, 0.0).unwrap();
        let b = session.add_node(100.0, 0.0).unwrap();
        session.add_edge(a, b, 1.0).unwrap();
        session.set_source(a);
        session.run().unwrap();
        session.run_to_completion();

        let text = banner_report(&session.report().unwrap());
        assert!(text.contains("ALL NODES ARE REACHABLE"));
    }
}
