use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::providers::hetzner::error::HetznerError;
use crate::providers::hetzner::types::*;

const AUTH_HEADER: &str = "Auth-API-Token";

/// Thin client over the Hetzner DNS API. The api key is passed per call since
/// each challenge may carry its own credentials.
pub struct HetznerClient {
    api_url: String,
    client: Client,
}

impl HetznerClient {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, HetznerError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn send(&self, req: RequestBuilder) -> Result<(StatusCode, Vec<u8>), HetznerError> {
        let response = req.send().await.map_err(|e| {
            error!(error = %e, "Request to Hetzner DNS API failed");
            e
        })?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, len = body.len(), "Hetzner DNS API response");
        Ok((status, body.to_vec()))
    }

    async fn handle_request<T>(&self, req: RequestBuilder) -> Result<T, HetznerError>
    where
        T: DeserializeOwned,
    {
        let (status, body) = self.send(req).await?;
        if status != StatusCode::OK {
            return Err(HetznerError::UnexpectedStatus {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Looks up the id of the zone named exactly `apex`.
    pub async fn get_zone_id(&self, api_key: &str, apex: &str) -> Result<String, HetznerError> {
        let req = self
            .client
            .get(format!("{}/api/v1/zones", self.api_url))
            .query(&[("name", apex)])
            .header(AUTH_HEADER, api_key);
        let zones: ZoneList = self.handle_request(req).await?;

        match <[Zone; 1]>::try_from(zones.zones) {
            Ok([zone]) => {
                debug!(zone = %zone, "Resolved zone");
                Ok(zone.id)
            }
            Err(zones) => Err(HetznerError::AmbiguousZone {
                apex: apex.to_string(),
                zones,
            }),
        }
    }

    /// Creates a record and hands back the response status untouched.
    pub async fn create_record(
        &self,
        api_key: &str,
        record: &NewRecord,
    ) -> Result<StatusCode, HetznerError> {
        let req = self
            .client
            .post(format!("{}/api/v1/records", self.api_url))
            .header(AUTH_HEADER, api_key)
            .json(record);
        let (status, body) = self.send(req).await?;
        debug!(%status, body = %String::from_utf8_lossy(&body), "Create record response");
        Ok(status)
    }

    pub async fn list_records(
        &self,
        api_key: &str,
        zone_id: &str,
    ) -> Result<Vec<Record>, HetznerError> {
        let req = self
            .client
            .get(format!("{}/api/v1/records", self.api_url))
            .query(&[("zone_id", zone_id)])
            .header(AUTH_HEADER, api_key);
        // Only send and decode failures count here; an error body decodes to
        // an empty listing.
        let (status, body) = self.send(req).await?;
        if status != StatusCode::OK {
            warn!(%status, zone_id, "Listing records did not return HTTP 200");
        }
        let records: RecordList = serde_json::from_slice(&body)?;
        Ok(records.records)
    }

    pub async fn delete_record(&self, api_key: &str, id: &str) -> Result<(), HetznerError> {
        let req = self
            .client
            .delete(format!("{}/api/v1/records/{}", self.api_url, id))
            .header(AUTH_HEADER, api_key);
        let (status, body) = self.send(req).await?;
        if !status.is_success() {
            return Err(HetznerError::UnexpectedStatus {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(())
    }
}
