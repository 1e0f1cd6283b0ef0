use std::time::SystemTime;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub started_at: SystemTime,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            started_at: SystemTime::now(),
        }
    }
}
