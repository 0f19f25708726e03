use std::{fmt::Display, sync::Arc};

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    constants::{FIRST_CLICK_PADDING_DEGREES, ROUTE_PADDING_DEGREES},
    error::ProviderError,
    geopoint::GeoPoint,
    graph::Graph,
    osm::{
        fragment_reader::{FragmentReader, ImportReport},
        raw_fragment::RawMapFragment,
    },
    road_graph::RoadGraph,
    types::NodeId,
};

/// Axis-aligned area in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn around(point: &GeoPoint, padding: f64) -> Self {
        BoundingBox {
            south: point.lat - padding,
            west: point.lng - padding,
            north: point.lat + padding,
            east: point.lng + padding,
        }
    }

    /// Smallest box holding both points, grown by `padding` on every side.
    pub fn spanning(a: &GeoPoint, b: &GeoPoint, padding: f64) -> Self {
        BoundingBox {
            south: a.lat.min(b.lat) - padding,
            west: a.lng.min(b.lng) - padding,
            north: a.lat.max(b.lat) + padding,
            east: a.lng.max(b.lng) + padding,
        }
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.south..=self.north).contains(&point.lat) && (self.west..=self.east).contains(&point.lng)
    }
}

/// Overpass order: `south,west,north,east`.
impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}

/// Source of map fragments, usually a remote map service.
pub trait FragmentProvider {
    fn fetch(&self, bbox: &BoundingBox) -> Result<RawMapFragment, ProviderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    pub report: ImportReport,
    pub nodes_added: usize,
    pub edges_added: usize,
    pub node_count: usize,
    pub edge_count: usize,
}

/// Owns the graph shared by every search of a session.
///
/// Searches work on an [`Arc`] snapshot and never hold the lock. Merges are copy-on-write: a
/// snapshot taken before a merge keeps seeing the graph it was taken from.
#[derive(Default)]
pub struct RoutingSession {
    graph: RwLock<Arc<RoadGraph>>,
}

impl RoutingSession {
    pub fn new() -> Self {
        RoutingSession::default()
    }

    pub fn with_graph(graph: RoadGraph) -> Self {
        RoutingSession {
            graph: RwLock::new(Arc::new(graph)),
        }
    }

    pub fn snapshot(&self) -> Arc<RoadGraph> {
        self.graph.read().clone()
    }

    #[instrument(skip_all)]
    pub fn merge_fragment(&self, fragment: &RawMapFragment) -> MergeSummary {
        // Parse outside of the lock, only the merge itself is exclusive
        let (incoming, report) = FragmentReader::default().read(fragment);

        let mut guard = self.graph.write();
        let (nodes_before, edges_before) = (guard.node_count(), guard.edge_count());

        Arc::make_mut(&mut *guard).merge(incoming);

        let summary = MergeSummary {
            report,
            nodes_added: guard.node_count() - nodes_before,
            edges_added: guard.edge_count() - edges_before,
            node_count: guard.node_count(),
            edge_count: guard.edge_count(),
        };

        info!(
            nodes_added = summary.nodes_added,
            edges_added = summary.edges_added,
            nodes = summary.node_count,
            edges = summary.edge_count,
            "merged fragment"
        );

        summary
    }

    /// A failed fetch is "no new data": the graph stays as it was.
    pub fn apply_fetch(
        &self,
        fetched: Result<RawMapFragment, ProviderError>,
    ) -> Result<MergeSummary, ProviderError> {
        match fetched {
            Ok(fragment) => Ok(self.merge_fragment(&fragment)),
            Err(error) => {
                warn!(%error, "fragment fetch failed, keeping the current graph");
                Err(error)
            }
        }
    }

    pub fn reset(&self) {
        *self.graph.write() = Arc::new(RoadGraph::new());
    }

    /// Nearest node within the snap radius.
    pub fn resolve(&self, point: &GeoPoint) -> Option<NodeId> {
        self.snapshot().find_nearest(point)
    }

    /// Loads the neighbourhood of a first click and resolves it.
    pub fn expand_around<P: FragmentProvider>(
        &self,
        provider: &P,
        click: &GeoPoint,
    ) -> Result<Option<NodeId>, ProviderError> {
        let bbox = BoundingBox::around(click, FIRST_CLICK_PADDING_DEGREES);
        self.expand(provider, &bbox, click)
    }

    /// Loads the area spanned by an already resolved start and a new click, then resolves the
    /// click.
    pub fn expand_between<P: FragmentProvider>(
        &self,
        provider: &P,
        start: &NodeId,
        click: &GeoPoint,
    ) -> Result<Option<NodeId>, ProviderError> {
        let snapshot = self.snapshot();
        let start_point = snapshot.node_geometry(start).copied().unwrap_or(*click);

        let bbox = BoundingBox::spanning(&start_point, click, ROUTE_PADDING_DEGREES);
        self.expand(provider, &bbox, click)
    }

    #[instrument(skip_all, fields(%bbox))]
    fn expand<P: FragmentProvider>(
        &self,
        provider: &P,
        bbox: &BoundingBox,
        click: &GeoPoint,
    ) -> Result<Option<NodeId>, ProviderError> {
        self.apply_fetch(provider.fetch(bbox))?;

        let resolved = self.resolve(click);
        if resolved.is_none() {
            warn!("no street within the snap radius of the click");
        }

        Ok(resolved)
    }
}
