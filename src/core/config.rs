// src/core/config.rs
use std::env;
use std::time::Duration;

use log::LevelFilter;

// PBKDF2 requests below this are raised to it
pub const PBKDF2_ITERATION_FLOOR: u32 = 10_000;

// Configuration for the password toolbox
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Password Generation
    pub default_password_length: usize,

    // Hashing
    pub pbkdf2_iterations: u32,

    // Breach lookup
    pub breach_api_url: String,
    pub breach_timeout: Duration,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            // Password Generation
            default_password_length: 16,

            // Hashing
            pbkdf2_iterations: 100_000,

            // Breach lookup
            breach_api_url: "https://api.pwnedpasswords.com".to_string(),
            breach_timeout: Duration::from_secs(10),

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Web Interface
        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        // Hashing
        if let Ok(val) = env::var("PBKDF2_ITERATIONS") {
            if let Ok(iterations) = val.parse::<u32>() {
                if iterations < PBKDF2_ITERATION_FLOOR {
                    log::warn!(
                        "PBKDF2_ITERATIONS {} below floor, using {}",
                        iterations,
                        PBKDF2_ITERATION_FLOOR
                    );
                }
                config.pbkdf2_iterations = iterations.max(PBKDF2_ITERATION_FLOOR);
            }
        }

        // Breach lookup
        if let Ok(url) = env::var("BREACH_API_URL") {
            config.breach_api_url = url;
        }

        if let Ok(val) = env::var("BREACH_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.breach_timeout = Duration::from_secs(secs);
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }

    // Resolve an optional per-request iteration override against the floor
    pub fn clamped_iterations(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.pbkdf2_iterations)
            .max(PBKDF2_ITERATION_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.pbkdf2_iterations, 100_000);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.breach_api_url, "https://api.pwnedpasswords.com");
    }

    #[test]
    fn test_iteration_floor_applied() {
        let config = Config::default();
        assert_eq!(config.clamped_iterations(Some(1)), PBKDF2_ITERATION_FLOOR);
        assert_eq!(config.clamped_iterations(Some(250_000)), 250_000);
        assert_eq!(config.clamped_iterations(None), 100_000);
    }
}
