use ariadne_routing::{comparison::Segment, geopoint::GeoPoint, routing::search_result::SearchResult};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value::MultiLineString};

fn position(point: &GeoPoint) -> Vec<f64> {
    vec![point.lng, point.lat]
}

fn feature(geometry: geojson::Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn properties(algorithm: &str, layer: &str) -> JsonObject {
    let mut properties = JsonObject::new();
    properties.insert("algorithm".to_owned(), algorithm.into());
    properties.insert("layer".to_owned(), layer.into());
    properties
}

/// Explored edges and found path of one search, as two features.
pub fn search_features(algorithm: &str, result: &SearchResult) -> Vec<Feature> {
    let explored: Vec<Vec<Vec<f64>>> = result
        .visitation_log()
        .iter()
        .map(|event| vec![position(&event.geometry.0), position(&event.geometry.1)])
        .collect();

    let mut features = vec![feature(MultiLineString(explored), properties(algorithm, "explored"))];

    if let Some(path) = result.path() {
        let mut path_properties = properties(algorithm, "path");
        path_properties.insert(
            "distance_m".to_owned(),
            result.path_distance().value().into(),
        );

        let line: geo_types::LineString<f64> =
            path.iter().copied().map(geo_types::Coord::from).collect();

        features.push(feature(geojson::Value::from(&line), path_properties));
    }

    features
}

pub fn shared_feature(shared: &[Segment]) -> Feature {
    let lines = shared
        .iter()
        .map(|(from, to)| vec![position(from), position(to)])
        .collect();

    feature(MultiLineString(lines), properties("both", "shared"))
}

pub fn to_geojson(features: Vec<Feature>) -> GeoJson {
    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
