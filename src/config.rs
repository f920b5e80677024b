use std::env;

use crate::errors::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub relay_url: String,
    pub relay_timeout_secs: u64,
    pub site_name: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            relay_url: env::var("RELAY_URL").unwrap_or_default(),
            relay_timeout_secs: env::var("RELAY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            site_name: env::var("SITE_NAME").unwrap_or_else(|_| "Run Your Brain".to_string()),
        }
    }

    /// An empty relay URL is allowed (submissions then fail); a malformed
    /// one is not.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.relay_url.is_empty() {
            reqwest::Url::parse(&self.relay_url)
                .map_err(|e| AppError::Config(format!("RELAY_URL is not a valid URL: {e}")))?;
        }
        if self.relay_timeout_secs == 0 {
            return Err(AppError::Config(
                "RELAY_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
