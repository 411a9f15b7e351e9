use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Aggregate donation statistics served by `GET /match`.
///
/// This is fixed demo data. There is no real donor/NGO matching behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchReport {
    pub total_donors: u32,
    pub total_ngos: u32,
    pub total_food_quantity: u32,
    pub food_units: &'static str,
    #[serde(serialize_with = "serialize_breakdown")]
    pub donations_by_food_type: &'static [(&'static str, u32)],
    #[serde(serialize_with = "serialize_breakdown")]
    pub donations_by_location: &'static [(&'static str, u32)],
    pub recent_matches: &'static [RecentMatch],
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecentMatch {
    pub donor: &'static str,
    pub ngo: &'static str,
    pub food: &'static str,
    pub quantity: &'static str,
    pub status: &'static str,
}

static MATCH_REPORT: MatchReport = MatchReport {
    total_donors: 45,
    total_ngos: 23,
    total_food_quantity: 1250,
    food_units: "kg",
    donations_by_food_type: &[
        ("Rice", 320),
        ("Rotis", 280),
        ("Dal", 170),
        ("Vegetables", 210),
        ("Fruits", 150),
        ("Bread", 120),
    ],
    donations_by_location: &[
        ("Delhi", 410),
        ("Mumbai", 350),
        ("Bangalore", 290),
        ("Chennai", 200),
    ],
    recent_matches: &[
        RecentMatch {
            donor: "Sharma Caterers",
            ngo: "Annapurna Food Bank",
            food: "Rotis",
            quantity: "20 kg",
            status: "completed",
        },
        RecentMatch {
            donor: "Green Leaf Restaurant",
            ngo: "Feeding Mumbai Trust",
            food: "Rice",
            quantity: "35 kg",
            status: "in_transit",
        },
        RecentMatch {
            donor: "Fresh Bakes Bakery",
            ngo: "Hope Shelter Bangalore",
            food: "Bread",
            quantity: "12 kg",
            status: "pending",
        },
    ],
    status: "success",
};

/// The fixed report. Every call returns the same value.
pub fn match_report() -> &'static MatchReport {
    &MATCH_REPORT
}

/// Write `(name, amount)` pairs as a JSON object, keeping their order
fn serialize_breakdown<S>(entries: &&'static [(&'static str, u32)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (name, amount) in entries.iter() {
        map.serialize_entry(name, amount)?;
    }
    map.end()
}
