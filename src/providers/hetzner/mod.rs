//! Hetzner DNS solver for ACME DNS01 challenges

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::HetznerClient;
pub use error::map_error;

use crate::auth::credentials::SecretResolver;
use crate::config::Config;
use crate::core::challenge::ChallengeRequest;
use crate::core::record::ChallengeRecord;
use crate::core::solver::Solver;
use crate::error::Error;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use types::NewRecord;

pub struct HetznerSolver {
    client: HetznerClient,
    secrets: Arc<dyn SecretResolver>,
    namespace: String,
}

impl HetznerSolver {
    pub fn new(client: HetznerClient, secrets: Arc<dyn SecretResolver>, namespace: &str) -> Self {
        Self {
            client,
            secrets,
            namespace: namespace.to_string(),
        }
    }

    async fn prepare(&self, ch: &ChallengeRequest) -> Result<(String, ChallengeRecord, String), Error> {
        let cfg = config::load_config(ch.config.as_ref(), &self.namespace, self.secrets.as_ref()).await?;
        let record = ChallengeRecord::from_challenge(ch);
        let zone_id = self
            .client
            .get_zone_id(&cfg.api_key, &record.apex)
            .await
            .map_err(map_error)?;
        debug!(zone_id = %zone_id, label = %record.label, "Resolved challenge zone");
        Ok((cfg.api_key, record, zone_id))
    }

    /// Deletes every TXT record matching the challenge, returning how many
    /// deletions succeeded. Individual failures are logged and skipped.
    async fn remove_matching_records(
        &self,
        api_key: &str,
        zone_id: &str,
        label: &str,
        key: &str,
    ) -> Result<usize, Error> {
        let records = self
            .client
            .list_records(api_key, zone_id)
            .await
            .map_err(map_error)?;
        debug!(count = records.len(), zone_id, "Fetched zone records");

        let mut deleted = 0;
        for rec in records.iter().filter(|r| r.is_challenge(label, key)) {
            debug!(
                id = %rec.id,
                name = %rec.name,
                ttl = ?rec.ttl,
                zone_id = %rec.zone_id,
                "Found challenge record"
            );
            match self.client.delete_record(api_key, &rec.id).await {
                Ok(()) => deleted += 1,
                Err(e) => warn!(
                    error = %e,
                    id = %rec.id,
                    name = %rec.name,
                    value = %rec.value,
                    "Cannot delete DNS record"
                ),
            }
        }
        Ok(deleted)
    }
}

#[async_trait]
impl Solver for HetznerSolver {
    fn name(&self) -> &str {
        "hetzner"
    }

    async fn present(&self, ch: &ChallengeRequest) -> Result<(), Error> {
        info!(name = %ch.dns_name, namespace = %ch.resource_namespace, "Presenting DNS challenge");
        let (api_key, record, zone_id) = self.prepare(ch).await?;

        let entry = NewRecord::txt(&record.label, &ch.key, &zone_id);
        let status = self
            .client
            .create_record(&api_key, &entry)
            .await
            .map_err(map_error)?;
        // Repeated presents may be rejected as duplicates; only transport
        // failures abort.
        if !status.is_success() {
            warn!(%status, name = %record.label, zone_id = %zone_id, "Record creation was not accepted");
        }
        Ok(())
    }

    async fn clean_up(&self, ch: &ChallengeRequest) -> Result<(), Error> {
        info!(name = %ch.dns_name, namespace = %ch.resource_namespace, "Cleaning up challenge");
        let (api_key, record, zone_id) = self.prepare(ch).await?;

        let deleted = self
            .remove_matching_records(&api_key, &zone_id, &record.label, &ch.key)
            .await?;
        info!(deleted, name = %record.label, "Challenge clean up finished");
        Ok(())
    }

    async fn initialize(&self, _config: &Config, _stop: watch::Receiver<bool>) -> Result<(), Error> {
        Ok(())
    }
}
