use crate::config::Config;
use crate::core::challenge::ChallengeRequest;
use crate::error::Error;
use async_trait::async_trait;
use tokio::sync::watch;

/// A DNS01 challenge solver as invoked by cert-manager.
///
/// `present` and `clean_up` must tolerate being called repeatedly with the
/// same challenge.
#[async_trait]
pub trait Solver: Send + Sync {
    fn name(&self) -> &str;
    async fn present(&self, ch: &ChallengeRequest) -> Result<(), Error>;
    async fn clean_up(&self, ch: &ChallengeRequest) -> Result<(), Error>;
    async fn initialize(&self, config: &Config, stop: watch::Receiver<bool>) -> Result<(), Error>;
}
