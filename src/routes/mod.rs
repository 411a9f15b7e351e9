// Route exports
pub mod chat;
pub mod info;
pub mod matches;
pub mod route;

use crate::config::Settings;
use crate::error::handle_json_payload_error;
use crate::services::{IntentExtractor, RoutePlanner};
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub intent: Arc<IntentExtractor>,
    pub planner: Arc<RoutePlanner>,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        Ok(Self {
            intent: Arc::new(IntentExtractor::from_settings(&settings.openai)?),
            planner: Arc::new(RoutePlanner::from_settings(&settings.maps)?),
        })
    }
}

/// JSON extractor config that reports payload errors in the API's error shape
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(info::configure)
        .configure(chat::configure)
        .configure(route::configure)
        .configure(matches::configure);
}
