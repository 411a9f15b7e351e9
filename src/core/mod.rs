// Core exports: pure request logic, no I/O
pub mod coordinates;
pub mod directions;
pub mod extraction;
pub mod match_report;
pub mod prompt;

pub use coordinates::{validate_coordinates, CoordinateError, Side};
pub use directions::build_route_url;
pub use extraction::{parse_completion, Extraction};
pub use match_report::{match_report, MatchReport, RecentMatch};
