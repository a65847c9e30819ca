//! Table output formatting using the `tabled` crate.
//!
//! Implements [`Outputter`] for the core result types: the post-run
//! [`Report`] and the editor's [`RenderState`] view.

use super::{text, OutputConfig, Outputter};
use colored::Colorize;
use dijk_core::{RenderState, Report};
use tabled::{
    builder::Builder,
    settings::{style::Style, Width},
};

impl Outputter for Report {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{} {}   {} {}   {} {}   {} {}\n",
            "Source:".bold(),
            self.source.cyan(),
            "Nodes:".bold(),
            self.node_count,
            "Edges:".bold(),
            self.edge_count,
            "Type:".bold(),
            if self.directed {
                "directed"
            } else {
                "undirected"
            },
        ));
        out.push('\n');

        if self.destinations.is_empty() {
            out.push_str("(no destinations)\n");
            return out;
        }

        let mut builder = Builder::default();
        builder.push_record(["Destination", "Distance", "Path"]);
        for dest in &self.destinations {
            match dest.distance {
                Some(d) => {
                    builder.push_record([
                        dest.label.clone(),
                        format!("{:.1}", d),
                        dest.path.join(" → "),
                    ]);
                }
                None => {
                    builder.push_record([dest.label.clone(), "∞".to_string(), "-".to_string()]);
                }
            }
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        table.with(Width::wrap(config.effective_width()));
        out.push_str(&table.to_string());
        out.push('\n');

        out.push('\n');
        out.push_str(&format!(
            "{} {} reachable, {} unreachable",
            "Stats:".bold(),
            self.stats.reachable,
            self.stats.unreachable,
        ));
        if let (Some((min_label, min_d)), Some((max_label, max_d))) =
            (&self.stats.min, &self.stats.max)
        {
            out.push_str(&format!(
                "   min {} ({:.1})   max {} ({:.1})",
                min_label.cyan(),
                min_d,
                max_label.cyan(),
                max_d,
            ));
        }
        if let Some(avg) = self.stats.average {
            out.push_str(&format!("   avg {:.2}", avg));
        }
        out.push('\n');
        out
    }

    fn to_text(&self, _config: &OutputConfig) -> String {
        text::banner_report(self)
    }
}

impl Outputter for RenderState {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut out = String::new();

        if self.nodes.is_empty() {
            out.push_str("(empty graph)\n");
            return out;
        }

        let mut builder = Builder::default();
        builder.push_record(["Node", "Position", "Source", "Visited", "Distance"]);
        for node in &self.nodes {
            builder.push_record([
                node.label.clone(),
                format!("({:.0}, {:.0})", node.x, node.y),
                if node.is_source { "*" } else { "" }.to_string(),
                if node.visited { "yes" } else { "" }.to_string(),
                match node.distance {
                    Some(d) => format!("{:.1}", d),
                    None => "∞".to_string(),
                },
            ]);
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        table.with(Width::wrap(config.effective_width()));
        out.push_str(&table.to_string());
        out.push('\n');

        // Edge endpoints and the armed selection are node ids; show labels.
        let label_of = |id: dijk_core::NodeId| {
            self.nodes
                .iter()
                .find(|n| n.id == id)
                .map(|n| n.label.clone())
                .unwrap_or_default()
        };

        if !self.edges.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["From", "To", "Weight", "Kind", "Shortest"]);
            for edge in &self.edges {
                builder.push_record([
                    label_of(edge.from),
                    label_of(edge.to),
                    format!("{:.1}", edge.weight),
                    if edge.directed {
                        "directed"
                    } else {
                        "undirected"
                    }
                    .to_string(),
                    if edge.on_shortest_path { "*" } else { "" }.to_string(),
                ]);
            }
            let mut table = builder.build();
            table.with(Style::rounded());
            table.with(Width::wrap(config.effective_width()));
            out.push('\n');
            out.push_str(&table.to_string());
            out.push('\n');
        }

        if let Some(armed) = self.armed {
            out.push('\n');
            out.push_str(&format!(
                "{} edge pending from {}; next `edge` completes it\n",
                "armed:".yellow(),
                label_of(armed).cyan()
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dijk_core::Session;

    fn solved_session() -> Session {
        let mut session = Session::new();
        let a = session.add_node(0.0, 0.0).unwrap();
        let b = session.add_node(100.0, 0.0).unwrap();
        session.add_node(200.0, 0.0).unwrap();
        session.add_edge(a, b, 2.5).unwrap();
        session.set_source(a);
        session.run().unwrap();
        session.run_to_completion();
        session
    }

    #[test]
    fn test_report_table_lists_destinations() {
        colored::control::set_override(false);
        let session = solved_session();
        let report = session.report().unwrap();
        let config = OutputConfig::new(super::super::OutputFormat::Table);
        let rendered = report.to_table(&config);

        assert!(rendered.contains("Destination"));
        assert!(rendered.contains("2.5"));
        assert!(rendered.contains("A → B"));
        assert!(rendered.contains("∞"));
        assert!(rendered.contains("1 reachable, 1 unreachable"));
    }

    #[test]
    fn test_render_state_table_marks_source() {
        colored::control::set_override(false);
        let session = solved_session();
        let state = session.render_state();
        let config = OutputConfig::new(super::super::OutputFormat::Table);
        let rendered = state.to_table(&config);

        assert!(rendered.contains("Node"));
        assert!(rendered.contains("*"));
        assert!(rendered.contains("2.5"));
    }

    #[test]
    fn test_edge_rows_and_armed_selection_show_labels() {
        colored::control::set_override(false);
        let mut session = Session::new();
        let a = session.add_node(0.0, 0.0).unwrap();
        let b = session.add_node(100.0, 0.0).unwrap();
        session.add_edge(a, b, 1.5).unwrap();
        session.begin_add_edge(b);

        let config = OutputConfig::new(super::super::OutputFormat::Table);
        let rendered = session.render_state().to_table(&config);

        let edge_line = rendered.lines().find(|l| l.contains("1.5")).unwrap();
        assert!(edge_line.contains('A') && edge_line.contains('B'));
        assert!(rendered.contains("edge pending from B"));
    }

    #[test]
    fn test_empty_graph_table() {
        let session = Session::new();
        let config = OutputConfig::new(super::super::OutputFormat::Table);
        assert!(session
            .render_state()
            .to_table(&config)
            .contains("(empty graph)"));
    }
}
