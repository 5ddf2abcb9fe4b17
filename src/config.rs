use std::env;
use std::time::Duration;

use crate::error::Error;

const DEFAULT_API_URL: &str = "https://dns.hetzner.com";
const SERVICE_ACCOUNT_NAMESPACE_FILE: &str = "/run/secrets/kubernetes.io/serviceaccount/namespace";

#[derive(Clone, Debug)]
pub struct Config {
    pub group_name: String,
    pub api_url: String,
    pub http_timeout: Duration,
    pub namespace: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let group_name = env::var("GROUP_NAME").unwrap_or_default();
        if group_name.is_empty() {
            return Err(Error::ConfigError("GROUP_NAME must be specified".into()));
        }

        Ok(Config {
            group_name,
            api_url: env::var("HETZNER_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            http_timeout: Duration::from_secs(
                env::var("HTTP_TIMEOUT")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            ),
            namespace: Config::namespace_from(
                env::var("POD_NAMESPACE").ok(),
                SERVICE_ACCOUNT_NAMESPACE_FILE,
            ),
        })
    }

    // Explicit value first, then the mounted service account namespace.
    fn namespace_from(explicit: Option<String>, namespace_file: &str) -> String {
        if let Some(ns) = explicit.filter(|ns| !ns.trim().is_empty()) {
            return ns.trim().to_string();
        }
        match std::fs::read_to_string(namespace_file) {
            Ok(data) if !data.trim().is_empty() => data.trim().to_string(),
            _ => String::from("default"),
        }
    }
}

pub(crate) mod mock {
    use super::*;

    impl Default for Config {
        fn default() -> Self {
            Config {
                group_name: String::from("acme.example.com"),
                api_url: String::from("http://127.0.0.1:8080"),
                http_timeout: Duration::from_secs(5),
                namespace: String::from("cert-manager"),
            }
        }
    }
}
