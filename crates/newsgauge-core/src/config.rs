use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; defaults mirror [`AppConfig::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_positive_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        let value = match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => default,
        };
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let parse_positive_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        let value = match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => default,
        };
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("NEWSGAUGE_ENV", "development"))?;
    let log_level = or_default("NEWSGAUGE_LOG_LEVEL", &defaults.log_level);

    let search_base_url = or_default("NEWSGAUGE_SEARCH_BASE_URL", &defaults.search_base_url)
        .trim_end_matches('/')
        .to_string();
    if !(search_base_url.starts_with("http://") || search_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "NEWSGAUGE_SEARCH_BASE_URL".to_string(),
            reason: format!("expected an http(s) origin, got \"{search_base_url}\""),
        });
    }

    let search_qualifier = or_default("NEWSGAUGE_SEARCH_QUALIFIER", &defaults.search_qualifier)
        .trim()
        .to_string();

    let user_agent = or_default("NEWSGAUGE_USER_AGENT", &defaults.user_agent);
    if user_agent.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "NEWSGAUGE_USER_AGENT".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let request_timeout_secs =
        parse_positive_u64("NEWSGAUGE_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
    let max_concurrent_fetches = parse_positive_usize(
        "NEWSGAUGE_MAX_CONCURRENT_FETCHES",
        defaults.max_concurrent_fetches,
    )?;
    let summary_sentences =
        parse_positive_usize("NEWSGAUGE_SUMMARY_SENTENCES", defaults.summary_sentences)?;

    Ok(AppConfig {
        env,
        log_level,
        search_base_url,
        search_qualifier,
        user_agent,
        request_timeout_secs,
        max_concurrent_fetches,
        summary_sentences,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NEWSGAUGE_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
