use std::sync::{ Mutex, MutexGuard, OnceLock };
use std::time::SystemTime;

use crate::config::{ Config, SecurityConfig, ServerConfig };
use crate::state::AppState;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

// Tests that touch process environment variables must hold this lock.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn test_config(environment: &str, version: &str) -> Config {
    Config {
        server: ServerConfig {
            port: 4000,
            host: "127.0.0.1".to_string(),
            environment: environment.to_string(),
            version: version.to_string(),
        },
        security: SecurityConfig {
            cors_enabled: false,
            allowed_origins: Vec::new(),
        },
    }
}

pub fn test_state(environment: &str, version: &str) -> AppState {
    AppState {
        config: test_config(environment, version),
        started_at: SystemTime::now(),
    }
}
