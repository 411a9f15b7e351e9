// Unit tests for the Food Donation API public surface

use food_donation_api::core::{
    build_route_url, match_report, parse_completion, validate_coordinates, CoordinateError,
    Extraction, Side,
};
use food_donation_api::models::{ExtractedDonation, GeoPoint, ResponseStatus, RouteRequest};

const MAPS_DIR: &str = "https://www.google.com/maps/dir";

#[test]
fn test_validated_pair_builds_url() {
    let pair = validate_coordinates(&RouteRequest::new(28.6139, 77.2090, 28.5355, 77.3910)).unwrap();
    assert_eq!(
        build_route_url(MAPS_DIR, &pair),
        "https://www.google.com/maps/dir/28.6139,77.209/28.5355,77.391"
    );
}

#[test]
fn test_negative_and_integer_coordinates() {
    let pair = validate_coordinates(&RouteRequest::new(-33.0, 151.0, -34.5, 150.25)).unwrap();
    assert_eq!(build_route_url(MAPS_DIR, &pair), format!("{}/-33,151/-34.5,150.25", MAPS_DIR));
}

#[test]
fn test_every_missing_combination_is_reported_as_missing() {
    // Every non-empty subset of the four fields left out
    for mask in 1u8..16 {
        let value = |bit: u8| if mask & (1 << bit) == 0 { Some(10.0) } else { None };
        let req = RouteRequest {
            donor_lat: value(0),
            donor_lng: value(1),
            ngo_lat: value(2),
            ngo_lng: value(3),
        };

        match validate_coordinates(&req) {
            Err(CoordinateError::Missing { fields }) => {
                assert_eq!(fields.len(), mask.count_ones() as usize);
            }
            other => panic!("mask {:04b}: expected missing error, got {:?}", mask, other),
        }
    }
}

#[test]
fn test_missing_wins_over_out_of_range() {
    let req = RouteRequest {
        donor_lat: Some(500.0),
        donor_lng: None,
        ngo_lat: Some(0.0),
        ngo_lng: Some(0.0),
    };
    assert!(matches!(
        validate_coordinates(&req),
        Err(CoordinateError::Missing { .. })
    ));
}

#[test]
fn test_out_of_range_sides() {
    let err = validate_coordinates(&RouteRequest::new(0.0, 180.0001, 0.0, 0.0)).unwrap_err();
    assert_eq!(err, CoordinateError::OutOfRange(Side::Donor));

    let err = validate_coordinates(&RouteRequest::new(0.0, 0.0, -90.0001, 0.0)).unwrap_err();
    assert_eq!(err, CoordinateError::OutOfRange(Side::Ngo));
}

#[test]
fn test_parse_completion_success() {
    let extraction = parse_completion(
        r#"{"food": "biryani", "quantity": "5 kg", "expiry": "tonight", "location": "Hyderabad"}"#,
    );
    assert_eq!(
        extraction,
        Extraction::Success(ExtractedDonation {
            food: "biryani".to_string(),
            quantity: "5 kg".to_string(),
            expiry: "tonight".to_string(),
            location: "Hyderabad".to_string(),
        })
    );
}

#[test]
fn test_parse_completion_fenced_reply_is_partial() {
    let reply = "```json\n{\"food\": \"rice\"}\n```";
    let extraction = parse_completion(reply);
    assert_eq!(extraction.status(), ResponseStatus::PartialSuccess);

    let response = extraction.into_chat_response("rice".to_string());
    assert_eq!(response.ai_response.as_deref(), Some(reply));
    assert_eq!(response.donation, ExtractedDonation::unknown());
}

#[test]
fn test_parse_completion_empty_reply_is_partial() {
    assert_eq!(
        parse_completion("   "),
        Extraction::PartialSuccess { raw: String::new() }
    );
}

#[test]
fn test_match_report_is_constant() {
    let first = match_report();
    let second = match_report();
    assert_eq!(first, second);
    assert_eq!(first.total_donors, 45);
    assert_eq!(first.total_ngos, 23);
    assert_eq!(first.recent_matches.len(), 3);
}

#[test]
fn test_geo_point_echo_serialization() {
    let json = serde_json::to_value(GeoPoint::new(40.7128, -74.006)).unwrap();
    assert_eq!(json, serde_json::json!({"lat": 40.7128, "lng": -74.006}));
}
