use std::env;

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// When set, requests must carry `Authorization: Bearer <token>`.
    pub api_token: Option<String>,
    /// Upper bound for a single report computation.
    pub report_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "4000".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid u16".to_string())?;

        let api_token = env::var("API_TOKEN").ok().filter(|t| !t.is_empty());

        let report_timeout_ms: u64 = env::var("REPORT_TIMEOUT_MS")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| "REPORT_TIMEOUT_MS must be a valid u64".to_string())?;

        Ok(Config {
            host,
            port,
            api_token,
            report_timeout_ms,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 4000,
            api_token: None,
            report_timeout_ms: 5000,
        }
    }
}
