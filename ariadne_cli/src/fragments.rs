use std::path::PathBuf;

use anyhow::Context;
use ariadne_routing::{
    osm::raw_fragment::RawMapFragment,
    session::{MergeSummary, RoutingSession},
};
use clap::Args;
use tracing::info;

use crate::file_utils::collect_fragment_files;

#[derive(Args)]
pub struct FragmentArgs {
    /// Overpass JSON fragments, or folders holding them
    #[arg(
        short,
        long = "fragment",
        env = "ARIADNE_FRAGMENT_DIR",
        value_delimiter = ',',
        required = true
    )]
    pub fragments: Vec<PathBuf>,
}

impl FragmentArgs {
    /// Merges every fragment into a fresh session, in the order given.
    pub fn load(&self) -> Result<(RoutingSession, Vec<(PathBuf, MergeSummary)>), anyhow::Error> {
        let session = RoutingSession::new();
        let mut summaries = Vec::new();

        for path in collect_fragment_files(&self.fragments)? {
            let fragment = RawMapFragment::from_file(&path)
                .with_context(|| format!("Failed to read fragment {}", path.display()))?;

            let summary = session.merge_fragment(&fragment);
            info!(
                "Loaded {} ({} nodes, {} edges added)",
                path.display(),
                summary.nodes_added,
                summary.edges_added
            );
            summaries.push((path, summary));
        }

        Ok((session, summaries))
    }
}
