use crate::models::CoordinatePair;

/// Build a Google Maps directions link from donor to NGO.
///
/// Coordinates are written with `f64`'s shortest round-trip formatting, so
/// `-74.0060` becomes `-74.006`.
pub fn build_route_url(base_url: &str, pair: &CoordinatePair) -> String {
    format!(
        "{}/{},{}/{},{}",
        base_url.trim_end_matches('/'),
        pair.donor.lat,
        pair.donor.lng,
        pair.ngo.lat,
        pair.ngo.lng
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    fn nyc_pair() -> CoordinatePair {
        CoordinatePair {
            donor: GeoPoint::new(40.7128, -74.0060),
            ngo: GeoPoint::new(40.7589, -73.9851),
        }
    }

    #[test]
    fn test_route_url_format() {
        let url = build_route_url("https://www.google.com/maps/dir", &nyc_pair());
        assert_eq!(url, "https://www.google.com/maps/dir/40.7128,-74.006/40.7589,-73.9851");
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let url = build_route_url("https://maps.test/dir/", &nyc_pair());
        assert_eq!(url, "https://maps.test/dir/40.7128,-74.006/40.7589,-73.9851");
    }
}
