use crate::models::{CoordinatePair, GeoPoint, RouteRequest};
use std::fmt;
use thiserror::Error;
use validator::Validate;

/// Which end of a route failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Donor,
    Ngo,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Donor => write!(f, "donor"),
            Side::Ngo => write!(f, "NGO"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("Missing coordinates. Required: donor_lat, donor_lng, ngo_lat, ngo_lng")]
    Missing { fields: Vec<&'static str> },

    #[error("Invalid {0} coordinates. Latitude must be between -90 and 90, longitude between -180 and 180")]
    OutOfRange(Side),
}

/// Check that all four coordinates are present and within range.
///
/// The donor pair is checked before the NGO pair, so a request with both
/// sides out of range reports the donor.
pub fn validate_coordinates(req: &RouteRequest) -> Result<CoordinatePair, CoordinateError> {
    let fields = [
        ("donor_lat", req.donor_lat),
        ("donor_lng", req.donor_lng),
        ("ngo_lat", req.ngo_lat),
        ("ngo_lng", req.ngo_lng),
    ];

    let (Some(donor_lat), Some(donor_lng), Some(ngo_lat), Some(ngo_lng)) =
        (req.donor_lat, req.donor_lng, req.ngo_lat, req.ngo_lng)
    else {
        let missing = fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        return Err(CoordinateError::Missing { fields: missing });
    };

    let donor = GeoPoint::new(donor_lat, donor_lng);
    let ngo = GeoPoint::new(ngo_lat, ngo_lng);

    check_point(&donor, Side::Donor)?;
    check_point(&ngo, Side::Ngo)?;

    Ok(CoordinatePair { donor, ngo })
}

#[inline]
fn check_point(point: &GeoPoint, side: Side) -> Result<(), CoordinateError> {
    // NaN slips through a plain range comparison
    if !point.lat.is_finite() || !point.lng.is_finite() || point.validate().is_err() {
        return Err(CoordinateError::OutOfRange(side));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let pair = validate_coordinates(&RouteRequest::new(40.7128, -74.0060, 40.7589, -73.9851))
            .unwrap();
        assert_eq!(pair.donor, GeoPoint::new(40.7128, -74.0060));
        assert_eq!(pair.ngo, GeoPoint::new(40.7589, -73.9851));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(validate_coordinates(&RouteRequest::new(90.0, 180.0, -90.0, -180.0)).is_ok());
    }

    #[test]
    fn test_zero_is_not_missing() {
        assert!(validate_coordinates(&RouteRequest::new(0.0, 0.0, 0.0, 0.0)).is_ok());
    }

    #[test]
    fn test_missing_fields_are_named() {
        let req = RouteRequest {
            donor_lat: Some(1.0),
            donor_lng: None,
            ngo_lat: Some(2.0),
            ngo_lng: None,
        };
        let err = validate_coordinates(&req).unwrap_err();
        assert_eq!(
            err,
            CoordinateError::Missing { fields: vec!["donor_lng", "ngo_lng"] }
        );
        assert!(err.to_string().starts_with("Missing coordinates"));
    }

    #[test]
    fn test_donor_reported_first() {
        let err = validate_coordinates(&RouteRequest::new(91.0, 0.0, 0.0, 200.0)).unwrap_err();
        assert_eq!(err, CoordinateError::OutOfRange(Side::Donor));
        assert!(err.to_string().starts_with("Invalid donor coordinates"));
    }

    #[test]
    fn test_ngo_out_of_range() {
        let err = validate_coordinates(&RouteRequest::new(10.0, 10.0, 10.0, -180.5)).unwrap_err();
        assert_eq!(err, CoordinateError::OutOfRange(Side::Ngo));
        assert!(err.to_string().starts_with("Invalid NGO coordinates"));
    }

    #[test]
    fn test_nan_rejected() {
        let err = validate_coordinates(&RouteRequest::new(f64::NAN, 0.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(err, CoordinateError::OutOfRange(Side::Donor));
    }
}
