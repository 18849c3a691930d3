use std::env;

use chrono_tz::Tz;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_KUSC_FEED_URL: &str = "http://schedule.kusc.org/now/KUSC.json";
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://query.yahooapis.com/v1/public/yql";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::US::Pacific;
pub const DEFAULT_SOURCE: &str = "apiai-weather-webhook-sample";

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub kusc_feed_url: String,
    pub weather_base_url: String,
    /// No default: the quote responder reports itself unconfigured when unset.
    pub quotes_url: Option<String>,
    pub timeout_ms: u64,
    pub timezone: Tz,
    /// Label echoed back in every speech response's `source` field.
    pub source: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let kusc_feed_url =
            lookup("KUSC_FEED_URL").unwrap_or_else(|| DEFAULT_KUSC_FEED_URL.to_string());

        let weather_base_url =
            lookup("WEATHER_BASE_URL").unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string());

        let quotes_url = lookup("QUOTES_URL").filter(|value| !value.trim().is_empty());

        let timeout_ms = lookup("UPSTREAM_TIMEOUT_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let timezone = lookup("WEBHOOK_TIMEZONE")
            .and_then(|value| value.parse::<Tz>().ok())
            .unwrap_or(DEFAULT_TIMEZONE);

        let source = lookup("WEBHOOK_SOURCE").unwrap_or_else(|| DEFAULT_SOURCE.to_string());

        Self {
            port,
            kusc_feed_url,
            weather_base_url,
            quotes_url,
            timeout_ms,
            timezone,
            source,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
