use std::{path::PathBuf, thread};

use anyhow::bail;
use ariadne_routing::{
    comparison::{RaceEntry, race},
    constants::SNAP_RADIUS_METERS,
    geopoint::GeoPoint,
    location_index::LocationIndex,
    playback::{Frame, PlaybackSchedule, PlaybackSpeed},
    routing::search_algorithm::SearchAlgorithm,
};
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing::info;

use crate::{fragments::FragmentArgs, geojson_export, parsers};

#[derive(Args)]
pub struct RouteArgs {
    #[command(flatten)]
    fragments: FragmentArgs,

    /// Start point as LAT,LNG
    #[arg(long, value_parser = parsers::parse_geopoint, allow_hyphen_values = true)]
    from: GeoPoint,

    /// Destination as LAT,LNG
    #[arg(long, value_parser = parsers::parse_geopoint, allow_hyphen_values = true)]
    to: GeoPoint,

    #[arg(short, long, default_value = "astar")]
    algorithm: SearchAlgorithm,

    /// Race a second strategy against the first one on the same graph
    #[arg(short, long)]
    versus: Option<SearchAlgorithm>,

    /// Write explored edges and paths to a GeoJSON file
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Replay the exploration in the terminal
    #[arg(long)]
    replay: bool,

    /// Replay speed, from 1 to 25
    #[arg(long, default_value_t = 5)]
    speed: u8,
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let (session, _) = args.fragments.load()?;
    let graph = session.snapshot();
    let index = LocationIndex::build_from_graph(&graph);

    let Some(start) = index.find_nearest(&args.from) else {
        bail!(
            "No street within {SNAP_RADIUS_METERS} m of the start point, load a fragment covering it"
        );
    };
    let Some(goal) = index.find_nearest(&args.to) else {
        bail!(
            "No street within {SNAP_RADIUS_METERS} m of the destination, load a fragment covering it"
        );
    };

    info!("Routing from node {start} to node {goal}");

    let (entries, shared) = match args.versus {
        Some(versus) => {
            let outcome = race(graph.as_ref(), args.algorithm, versus, &start, &goal);
            info!("{} shared segments", outcome.shared.len());
            (vec![outcome.first, outcome.second], Some(outcome.shared))
        }
        None => {
            let (result, metrics) = args.algorithm.measure(graph.as_ref(), &start, &goal);
            let entry = RaceEntry {
                algorithm: args.algorithm,
                result,
                metrics,
            };
            (vec![entry], None)
        }
    };

    if args.replay {
        replay(&entries, PlaybackSpeed::new(args.speed));
    }

    print_metrics(&entries);

    if entries.iter().all(|entry| !entry.result.has_path()) {
        info!("No path found, load fragments covering the roads between both points");
    }

    if let Some(output) = &args.geojson {
        let mut features = Vec::new();
        for entry in &entries {
            features.extend(geojson_export::search_features(
                entry.algorithm.id(),
                &entry.result,
            ));
        }
        if let Some(shared) = &shared {
            features.push(geojson_export::shared_feature(shared));
        }

        std::fs::write(output, geojson_export::to_geojson(features).to_string())?;
        info!("GeoJSON written to {}", output.display());
    }

    Ok(())
}

fn print_metrics(entries: &[RaceEntry]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Algorithm",
        "Time (ms)",
        "Visited edges",
        "Distance (km)",
        "Path points",
    ]);

    for entry in entries {
        table.add_row(vec![
            entry.algorithm.name().to_string(),
            format!("{:.2}", entry.metrics.duration_ms()),
            entry.metrics.visited_edges.to_string(),
            format!("{:.2}", entry.metrics.distance_km),
            entry
                .result
                .path()
                .map_or_else(|| String::from("-"), |path| path.len().to_string()),
        ]);
    }

    println!("{table}");
}

/// Plays every entry side by side, one progress bar each.
fn replay(entries: &[RaceEntry], speed: PlaybackSpeed) {
    let progress = MultiProgress::new();
    let style = ProgressStyle::default_bar()
        .template("{prefix:>18} [{bar:40}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());

    thread::scope(|scope| {
        for entry in entries {
            let schedule = PlaybackSchedule::new(&entry.result, speed);
            let bar = progress.add(ProgressBar::new(schedule.frame_count() as u64));
            bar.set_style(style.clone());
            bar.set_prefix(entry.algorithm.name());

            scope.spawn(move || {
                let mut explored = 0;
                for frame in schedule {
                    match frame {
                        Frame::Explore { events, .. } => {
                            explored += events.len();
                            bar.set_message(format!("{explored} edges explored"));
                        }
                        Frame::Trace { path, .. } => {
                            bar.set_message(format!("tracing {} points", path.len()));
                        }
                    }

                    bar.inc(1);
                    thread::sleep(frame.delay().unsigned_abs());
                }
                bar.finish();
            });
        }
    });
}
