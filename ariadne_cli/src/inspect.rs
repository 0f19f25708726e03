use ariadne_routing::graph::Graph;
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};

use crate::fragments::FragmentArgs;

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    fragments: FragmentArgs,

    /// Print the summary as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: InspectArgs) -> Result<(), anyhow::Error> {
    let (session, summaries) = args.fragments.load()?;
    let graph = session.snapshot();

    if args.json {
        let files: Vec<_> = summaries
            .iter()
            .map(|(path, summary)| {
                serde_json::json!({
                    "file": path.display().to_string(),
                    "summary": summary,
                })
            })
            .collect();

        let output = serde_json::json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "dangling_edges": graph.dangling_edges(),
            "fragments": files,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Fragment",
        "Nodes added",
        "Edges added",
        "Malformed elements",
        "Dropped ways",
        "Dropped edges",
        "Conflicting points",
    ]);

    for (path, summary) in &summaries {
        table.add_row(vec![
            path.display().to_string(),
            summary.nodes_added.to_string(),
            summary.edges_added.to_string(),
            summary.report.malformed_elements.to_string(),
            summary.report.dropped_ways.to_string(),
            summary.report.dropped_edges.to_string(),
            summary.report.conflicting_nodes.to_string(),
        ]);
    }

    println!("{table}");
    println!(
        "Road graph: {} nodes, {} directed edges, {} dangling",
        graph.node_count(),
        graph.edge_count(),
        graph.dangling_edges()
    );

    Ok(())
}
