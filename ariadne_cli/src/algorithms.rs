use ariadne_routing::routing::search_algorithm::SearchAlgorithm;
use comfy_table::{Table, presets::UTF8_FULL};

pub fn run() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Id", "Name", "Shortest path"]);

    for algorithm in SearchAlgorithm::ALL {
        table.add_row(vec![
            algorithm.id(),
            algorithm.name(),
            if algorithm.is_optimal() { "yes" } else { "no" },
        ]);
    }

    println!("{table}");
}
