use crate::analytics::TimeRange;
use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://portafolio-backend-9d99.onrender.com";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// configuration pointed at the production API.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("FOLIO_ENV", "development"));

    let api_base_url = or_default("FOLIO_API_BASE_URL", DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string();
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "FOLIO_API_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{api_base_url}'"),
        });
    }

    let log_level = or_default("FOLIO_LOG_LEVEL", "info");
    let session_path = PathBuf::from(or_default("FOLIO_SESSION_PATH", "./.folio/session_id"));
    let request_timeout_secs = parse_u64("FOLIO_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("FOLIO_USER_AGENT", "folio/0.1 (portfolio-client)");

    let live_stats_interval_secs = parse_u64("FOLIO_LIVE_STATS_INTERVAL_SECS", "30")?;
    if live_stats_interval_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FOLIO_LIVE_STATS_INTERVAL_SECS".to_string(),
            reason: "interval must be at least one second".to_string(),
        });
    }

    let raw_range = or_default("FOLIO_ANALYTICS_RANGE", "7d");
    let analytics_range =
        raw_range
            .parse::<TimeRange>()
            .map_err(|reason| ConfigError::InvalidEnvVar {
                var: "FOLIO_ANALYTICS_RANGE".to_string(),
                reason,
            })?;

    Ok(AppConfig {
        env,
        api_base_url,
        log_level,
        session_path,
        request_timeout_secs,
        user_agent,
        live_stats_interval_secs,
        analytics_range,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_test() {
        assert_eq!(parse_environment("test"), Environment::Test);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_defaults_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.session_path.to_str(), Some("./.folio/session_id"));
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "folio/0.1 (portfolio-client)");
        assert_eq!(cfg.live_stats_interval_secs, 30);
        assert_eq!(cfg.analytics_range, TimeRange::SevenDays);
    }

    #[test]
    fn api_base_url_trailing_slash_is_stripped() {
        let mut map = HashMap::new();
        map.insert("FOLIO_API_BASE_URL", "http://localhost:8080/");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn api_base_url_without_scheme_is_rejected() {
        let mut map = HashMap::new();
        map.insert("FOLIO_API_BASE_URL", "localhost:8080");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FOLIO_API_BASE_URL"),
            "expected InvalidEnvVar(FOLIO_API_BASE_URL), got: {result:?}"
        );
    }

    #[test]
    fn request_timeout_override() {
        let mut map = HashMap::new();
        map.insert("FOLIO_REQUEST_TIMEOUT_SECS", "5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 5);
    }

    #[test]
    fn request_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("FOLIO_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FOLIO_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(FOLIO_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn live_stats_interval_zero_is_rejected() {
        let mut map = HashMap::new();
        map.insert("FOLIO_LIVE_STATS_INTERVAL_SECS", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FOLIO_LIVE_STATS_INTERVAL_SECS"),
            "expected InvalidEnvVar(FOLIO_LIVE_STATS_INTERVAL_SECS), got: {result:?}"
        );
    }

    #[test]
    fn analytics_range_override() {
        let mut map = HashMap::new();
        map.insert("FOLIO_ANALYTICS_RANGE", "90d");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.analytics_range, TimeRange::NinetyDays);
    }

    #[test]
    fn analytics_range_invalid() {
        let mut map = HashMap::new();
        map.insert("FOLIO_ANALYTICS_RANGE", "2w");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FOLIO_ANALYTICS_RANGE"),
            "expected InvalidEnvVar(FOLIO_ANALYTICS_RANGE), got: {result:?}"
        );
    }

    #[test]
    fn session_path_override() {
        let mut map = HashMap::new();
        map.insert("FOLIO_SESSION_PATH", "/tmp/folio/session");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.session_path.to_str(), Some("/tmp/folio/session"));
    }
}
