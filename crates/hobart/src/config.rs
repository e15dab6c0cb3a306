//! Immutable provider configuration.

use std::time::Duration;

/// Provider site root.
const ZACKS_BASE_URL: &str = "https://www.zacks.com";

/// Browser User-Agent for the detailed-estimates page (the provider serves a
/// stripped page to non-browser agents).
const ESTIMATES_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_2) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/55.0.2883.95 Safari/537.36";

/// Browser User-Agent for the calendar export endpoint.
const CALENDAR_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/50.0.2661.75 Safari/537.36";

/// Default request timeout. The provider can hang indefinitely on degraded
/// responses, and callers must not block forever.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration owned by a [`ZacksClient`](crate::zacks::ZacksClient).
///
/// All values are fixed at client construction; the client holds no ambient
/// or mutable state. Tests override `base_url` to point the client at a
/// controlled address.
#[derive(Debug, Clone)]
pub struct ZacksConfig {
    /// Scheme and host that endpoint paths are joined to.
    pub base_url: String,
    /// User-Agent sent with detailed-estimates requests.
    pub estimates_user_agent: String,
    /// User-Agent sent with calendar export requests.
    pub calendar_user_agent: String,
    /// Timeout applied to every outbound request.
    pub timeout: Duration,
}

impl Default for ZacksConfig {
    fn default() -> Self {
        Self {
            base_url: ZACKS_BASE_URL.to_string(),
            estimates_user_agent: ESTIMATES_USER_AGENT.to_string(),
            calendar_user_agent: CALENDAR_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_provider() {
        let config = ZacksConfig::default();
        assert_eq!(config.base_url, "https://www.zacks.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.estimates_user_agent.starts_with("Mozilla/5.0"));
        assert!(config.calendar_user_agent.starts_with("Mozilla/5.0"));
    }
}
