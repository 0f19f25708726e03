use ariadne_routing::geopoint::GeoPoint;

/// Parses `lat,lng` in decimal degrees.
pub fn parse_geopoint(input: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = input
        .split_once(',')
        .ok_or_else(|| String::from("Expected coordinates as LAT,LNG"))?;

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("Invalid latitude '{}'", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("Invalid longitude '{}'", lng.trim()))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("Latitude {lat} is out of range"));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(format!("Longitude {lng} is out of range"));
    }

    Ok(GeoPoint::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geopoint() {
        assert_eq!(
            parse_geopoint("51.505, -0.09"),
            Ok(GeoPoint::new(51.505, -0.09))
        );
    }

    #[test]
    fn test_parse_geopoint_errors() {
        assert!(parse_geopoint("51.505").is_err());
        assert!(parse_geopoint("north,-0.09").is_err());
        assert!(parse_geopoint("91,0").is_err());
        assert!(parse_geopoint("0,181").is_err());
    }
}
