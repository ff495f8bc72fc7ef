//! Function configuration, resolved once per cold start.

use crate::error::ConfigError;
use std::{env, fmt, time::Duration};

pub(crate) const URL_VAR: &str = "SUPABASE_URL";
pub(crate) const KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub(crate) const TIMEOUT_VAR: &str = "INTERVIEW_STORE_TIMEOUT_SECS";

/// Store round trips give up after this long unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the interview store
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Supabase project, without a trailing slash
    pub supabase_url: String,
    /// Service role key, sent as both `apikey` and bearer token
    pub service_role_key: String,
    /// Timeout applied to every store request
    pub timeout: Duration,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let (supabase_url, service_role_key) = match (var(URL_VAR), var(KEY_VAR)) {
            (Some(url), Some(key)) => (url.trim_end_matches('/').to_string(), key),
            _ => return Err(ConfigError::MissingCredentials),
        };

        let timeout = match var(TIMEOUT_VAR) {
            None => DEFAULT_TIMEOUT,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
        };

        Ok(Config {
            supabase_url,
            service_role_key,
            timeout,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("supabase_url", &self.supabase_url)
            .field("service_role_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_TIMEOUT};
    use crate::error::ConfigError;
    use std::{collections::HashMap, time::Duration};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_required_credentials() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co/"),
            ("SUPABASE_SERVICE_ROLE_KEY", "service-key"),
        ]))
        .expect("failed to read config");

        assert_eq!(config.supabase_url, "https://project.supabase.co");
        assert_eq!(config.service_role_key, "service-key");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn missing_or_empty_credentials_are_rejected() {
        let cases = vec![
            lookup(&[]),
            lookup(&[("SUPABASE_URL", "https://project.supabase.co")]),
            lookup(&[("SUPABASE_SERVICE_ROLE_KEY", "service-key")]),
            lookup(&[("SUPABASE_URL", ""), ("SUPABASE_SERVICE_ROLE_KEY", "service-key")]),
        ];
        for case in cases {
            assert_eq!(Config::from_lookup(case), Err(ConfigError::MissingCredentials));
        }
    }

    #[test]
    fn timeout_override() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "service-key"),
            ("INTERVIEW_STORE_TIMEOUT_SECS", "3"),
        ]))
        .expect("failed to read config");
        assert_eq!(config.timeout, Duration::from_secs(3));

        for bad in &["0", "-1", "soon"] {
            let result = Config::from_lookup(lookup(&[
                ("SUPABASE_URL", "https://project.supabase.co"),
                ("SUPABASE_SERVICE_ROLE_KEY", "service-key"),
                ("INTERVIEW_STORE_TIMEOUT_SECS", bad),
            ]));
            assert_eq!(result, Err(ConfigError::InvalidTimeout(bad.to_string())));
        }
    }

    #[test]
    fn debug_redacts_service_key() {
        let config = Config {
            supabase_url: "https://project.supabase.co".into(),
            service_role_key: "super-secret".into(),
            timeout: DEFAULT_TIMEOUT,
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
