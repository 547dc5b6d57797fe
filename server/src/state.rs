use std::sync::Arc;

use reqwest::Client;

use super::config::Config;

pub struct State {
    pub config: Config,
    pub http: Client,
}

impl State {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            config: Config::load(),
            http: Client::new(),
        })
    }

    pub fn with_config(config: Config) -> Arc<Self> {
        Arc::new(Self {
            config,
            http: Client::new(),
        })
    }
}
