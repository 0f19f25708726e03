use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use fxhash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{constants::UNNAMED_STREET, error::FragmentError, geopoint::GeoPoint, types::NodeId};

/// A bounded piece of road network as delivered by a map provider (Overpass JSON layout).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawMapFragment {
    #[serde(default, deserialize_with = "deserialize_elements")]
    pub elements: Vec<OsmElement>,
}

/// Decodes element by element so a single broken element does not take the fragment down with it.
fn deserialize_elements<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<OsmElement>, D::Error> {
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;

    Ok(values
        .into_iter()
        .map(|value| OsmElement::deserialize(value).unwrap_or(OsmElement::Malformed))
        .collect())
}

/// Entries that are not node ids decode to `None`, only the segments touching them are lost.
fn deserialize_way_nodes<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Option<NodeId>>, D::Error> {
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;

    Ok(values
        .into_iter()
        .map(|value| NodeId::deserialize(value).ok())
        .collect())
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OsmElement {
    Node(OsmNode),
    Way(OsmWay),
    /// A node or way that could not be decoded.
    #[serde(skip)]
    Malformed,
    /// Relations and anything else the engine does not route over.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OsmNode {
    pub id: NodeId,
    pub lat: f64,
    pub lon: f64,
}

impl OsmNode {
    pub fn coordinates(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OsmWay {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_way_nodes")]
    pub nodes: Vec<Option<NodeId>>,
    #[serde(default)]
    pub tags: FxHashMap<String, String>,
}

impl OsmWay {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn has_tag(&self, key: &str, value: &str) -> bool {
        self.tag(key).is_some_and(|tag_value| tag_value == value)
    }

    pub fn street_name(&self) -> &str {
        self.tag("name").unwrap_or(UNNAMED_STREET)
    }

    /// Only an explicit `oneway=yes` restricts the way to its drawing direction.
    pub fn is_oneway(&self) -> bool {
        self.has_tag("oneway", "yes")
    }
}

impl RawMapFragment {
    pub fn from_json_str(json: &str) -> Result<Self, FragmentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FragmentError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FragmentError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn malformed(&self) -> usize {
        self.elements
            .iter()
            .filter(|element| matches!(element, OsmElement::Malformed))
            .count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &OsmNode> {
        self.elements.iter().filter_map(|element| match element {
            OsmElement::Node(node) => Some(node),
            _ => None,
        })
    }

    pub fn ways(&self) -> impl Iterator<Item = &OsmWay> {
        self.elements.iter().filter_map(|element| match element {
            OsmElement::Way(way) => Some(way),
            _ => None,
        })
    }

    pub fn with_node(mut self, id: i64, lat: f64, lon: f64) -> Self {
        self.elements.push(OsmElement::Node(OsmNode {
            id: NodeId::from(id),
            lat,
            lon,
        }));
        self
    }

    pub fn with_way(mut self, id: i64, nodes: &[i64], name: Option<&str>, oneway: bool) -> Self {
        let mut tags = FxHashMap::default();
        if let Some(name) = name {
            tags.insert("name".to_owned(), name.to_owned());
        }
        if oneway {
            tags.insert("oneway".to_owned(), "yes".to_owned());
        }

        self.elements.push(OsmElement::Way(OsmWay {
            id,
            nodes: nodes.iter().map(|&id| Some(NodeId::from(id))).collect(),
            tags,
        }));
        self
    }
}
