use dotenvy::dotenv;
use std::env;

use premier_types::filter::FilterMode;

pub const DEFAULT_HTTP_PORT: u16 = 9090;

pub struct Config {
    pub http_port: u16,
    pub filter_mode: FilterMode,
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let http_port = match env::var("PREMIER_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(DEFAULT_HTTP_PORT),
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let filter_mode = match env::var("PREMIER_FILTER_MODE") {
            Ok(val) => val.parse::<FilterMode>().unwrap_or_else(|e| {
                tracing::warn!("{e}, falling back to '{}'", FilterMode::Precedence);
                FilterMode::Precedence
            }),
            Err(_) => FilterMode::Precedence,
        };

        let cors_origin = env::var("PREMIER_CORS_ORIGIN")
            .ok()
            .filter(|origin| !origin.is_empty());

        Self {
            http_port,
            filter_mode,
            cors_origin,
        }
    }
}
