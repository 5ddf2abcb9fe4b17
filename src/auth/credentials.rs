use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client, Error as KubeError};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Secret not found: {namespace}/{name} key {key}")]
    SecretNotFound {
        namespace: String,
        name: String,
        key: String,
    },

    #[error("Secret {namespace}/{name} key {key} is not valid UTF-8")]
    InvalidValue {
        namespace: String,
        name: String,
        key: String,
    },

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] KubeError),
}

/// Looks up a single value out of a namespaced secret store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SecretResolver: Send + Sync {
    async fn resolve_secret_value(
        &self,
        namespace: &str,
        secret_name: &str,
        key: &str,
    ) -> Result<String, SecretError>;
}

/// Reads Secrets from the Kubernetes API server. The client is built from the
/// in-cluster environment (or KUBECONFIG) on first use.
pub struct KubeSecretResolver {
    client: OnceCell<Client>,
}

impl KubeSecretResolver {
    pub fn new() -> Self {
        Self {
            client: OnceCell::new(),
        }
    }

    #[cfg(test)]
    pub fn with_client(client: Client) -> Self {
        Self {
            client: OnceCell::new_with(Some(client)),
        }
    }

    async fn client(&self) -> Result<&Client, SecretError> {
        let client = self
            .client
            .get_or_try_init(|| async {
                let client = Client::try_default().await?;
                info!("Kubernetes client initialized");
                Ok::<_, KubeError>(client)
            })
            .await?;
        Ok(client)
    }
}

#[async_trait]
impl SecretResolver for KubeSecretResolver {
    async fn resolve_secret_value(
        &self,
        namespace: &str,
        secret_name: &str,
        key: &str,
    ) -> Result<String, SecretError> {
        let not_found = || SecretError::SecretNotFound {
            namespace: namespace.to_string(),
            name: secret_name.to_string(),
            key: key.to_string(),
        };
        if secret_name.is_empty() || key.is_empty() {
            return Err(not_found());
        }

        let secrets: Api<Secret> = Api::namespaced(self.client().await?.clone(), namespace);
        let secret = match secrets.get(secret_name).await {
            Ok(secret) => secret,
            Err(KubeError::Api(ae)) if ae.code == 404 => return Err(not_found()),
            Err(e) => return Err(e.into()),
        };
        debug!(name = secret_name, namespace, "Gathered secret from apiserver");

        let Some(value) = secret.data.and_then(|mut data| data.remove(key)) else {
            return Err(not_found());
        };
        String::from_utf8(value.0).map_err(|_| SecretError::InvalidValue {
            namespace: namespace.to_string(),
            name: secret_name.to_string(),
            key: key.to_string(),
        })
    }
}
