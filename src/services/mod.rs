// Service exports
pub mod distance_matrix;
pub mod intent;
pub mod openai;
pub mod route_planner;

pub use distance_matrix::{DistanceMatrixClient, DistanceMatrixError};
pub use intent::{IntentError, IntentExtractor};
pub use openai::{CompletionClient, CompletionError};
pub use route_planner::RoutePlanner;

use reqwest::Client;
use std::time::Duration;

/// Outbound client; without a configured timeout reqwest's defaults apply
pub(crate) fn http_client(timeout_secs: Option<u64>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}
