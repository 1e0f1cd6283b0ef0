use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub environment: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub cors_enabled: bool,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy
            ::from_filename(".env.local")
            .or_else(|_| dotenvy::dotenv())
            .ok();

        let environment = env
            ::var("NODE_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_lowercase();

        let is_production = environment == "production";

        let version = env::var("APP_VERSION").unwrap_or_else(|_| "1.0.0".to_string());

        let dev_origins = env::var("DEV_FRONTEND_ORIGIN").unwrap_or_default();
        let prod_origins = env::var("PRODUCTION_FRONTEND_ORIGIN").unwrap_or_default();

        let allowed_origins: Vec<String> = (if is_production { prod_origins } else { dev_origins })
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.trim().to_string())
            .collect();

        let config = Config {
            server: ServerConfig {
                port: env
                    ::var("PORT")
                    .unwrap_or_else(|_| "4000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                environment,
                version,
            },
            security: SecurityConfig {
                cors_enabled: is_production,
                allowed_origins,
            },
        };

        Ok(config)
    }

    #[allow(dead_code)]
    pub fn is_development(&self) -> bool {
        self.server.environment != "production"
    }

    #[allow(dead_code)]
    pub fn is_production(&self) -> bool {
        self.server.environment == "production"
    }
}
