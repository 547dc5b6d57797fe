use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::upstream::SERP_ENDPOINT;

pub struct Config {
    pub port: u16,
    pub serp_api_key: String,
    pub serp_url: String,
    pub frontend_origin: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "3001"),
            serp_api_key: var("SERP_API_KEY").expect("Environment misconfigured!"),
            serp_url: try_load("SERP_URL", SERP_ENDPOINT),
            frontend_origin: try_load("FRONTEND_URL", "http://localhost:5173"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
