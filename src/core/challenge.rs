use crate::error::Error;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeAction {
    Present,
    CleanUp,
}

/// A DNS01 challenge handed over by cert-manager.
///
/// `resolved_fqdn` and `resolved_zone` are both dot-terminated and the zone is
/// always a suffix of the fqdn.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    #[serde(default)]
    pub uid: String,
    pub action: ChallengeAction,
    #[serde(default, rename = "type")]
    pub challenge_type: String,
    pub dns_name: String,
    pub key: String,
    #[serde(default)]
    pub resource_namespace: String,
    #[serde(rename = "resolvedFQDN")]
    pub resolved_fqdn: String,
    pub resolved_zone: String,
    #[serde(default)]
    pub allow_ambient_credentials: bool,
    #[serde(default)]
    pub config: Option<Value>,
}

impl ChallengeRequest {
    /// Decodes a challenge handed over by the host. A malformed document is
    /// the caller's input error, not a provider response problem.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        serde_json::from_str(raw)
            .map_err(|e| Error::Other(format!("malformed challenge request: {e}")))
    }
}
