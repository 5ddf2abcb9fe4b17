use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

use crate::auth::credentials::SecretResolver;
use crate::error::Error;

/// Solver configuration set on the issuer under
/// `spec.acme.solvers[].dns01.webhook.config`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct ProviderConfigOpts {
    #[serde(default)]
    api_key_secret_ref: Option<SecretRef>,
    #[serde(default)]
    api_key: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct SecretRef {
    #[serde(default)]
    name: String,
    #[serde(default)]
    key: String,
}

/// Credentials resolved for a single Present/CleanUp call.
pub struct ProviderConfig {
    pub api_key: String,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

pub async fn load_config(
    raw: Option<&Value>,
    namespace: &str,
    secrets: &dyn SecretResolver,
) -> Result<ProviderConfig, Error> {
    let Some(raw) = raw.filter(|v| !v.is_null()) else {
        return Err(Error::ConfigError("no solver config provided".into()));
    };
    let opts = ProviderConfigOpts::deserialize(raw)
        .map_err(|e| Error::ConfigError(format!("error decoding solver config: {e}")))?;

    if let Some(api_key) = opts.api_key.filter(|k| !k.is_empty()) {
        warn!(
            "Please migrate to a secret based solver configuration (apiKeySecretRef) instead of an inline apiKey"
        );
        return Ok(ProviderConfig { api_key });
    }

    let Some(secret_ref) = opts.api_key_secret_ref else {
        return Err(Error::ConfigError(
            "neither apiKey nor apiKeySecretRef is set".into(),
        ));
    };
    if secret_ref.name.is_empty() || secret_ref.key.is_empty() {
        return Err(Error::ConfigError(
            "apiKeySecretRef requires both name and key".into(),
        ));
    }

    let api_key = secrets
        .resolve_secret_value(namespace, &secret_ref.name, &secret_ref.key)
        .await
        .map_err(|e| Error::ConfigError(e.to_string()))?;
    if api_key.is_empty() {
        return Err(Error::ConfigError(format!(
            "secret {}/{} key {} is empty",
            namespace, secret_ref.name, secret_ref.key
        )));
    }
    debug!(name = %secret_ref.name, namespace, "Resolved api key from secret");
    Ok(ProviderConfig { api_key })
}
