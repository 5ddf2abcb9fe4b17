use config::Config;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::{signal, sync::watch};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod auth;
mod config;
mod core;
mod error;
mod providers;

use crate::auth::credentials::KubeSecretResolver;
use crate::core::challenge::{ChallengeAction, ChallengeRequest};
use crate::core::registry::SolverRegistry;
use crate::core::solver::Solver;
use crate::error::Error;
use crate::providers::hetzner::{HetznerClient, HetznerSolver, map_error};

const DEFAULT_SOLVER: &str = "hetzner";

fn start(config: &Config) -> Result<SolverRegistry, Error> {
    let client = HetznerClient::new(&config.api_url, config.http_timeout).map_err(map_error)?;
    let secrets = Arc::new(KubeSecretResolver::new());

    let mut registry = SolverRegistry::new();
    registry.register(Arc::new(HetznerSolver::new(
        client,
        secrets,
        &config.namespace,
    )));
    Ok(registry)
}

async fn read_challenge() -> Result<ChallengeRequest, Error> {
    let mut raw = String::new();
    tokio::io::stdin()
        .read_to_string(&mut raw)
        .await
        .map_err(|e| Error::Other(format!("unable to read challenge from stdin: {e}")))?;
    ChallengeRequest::from_json(&raw)
}

async fn dispatch(solver: &dyn Solver, ch: &ChallengeRequest) -> Result<(), Error> {
    match ch.action {
        ChallengeAction::Present => solver.present(ch).await,
        ChallengeAction::CleanUp => solver.clean_up(ch).await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let registry = start(&config)?;

    let solver_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SOLVER.to_string());
    let Some(solver) = registry.get(&solver_name) else {
        return Err(Error::NotFound(format!(
            "solver {solver_name} (available: {})",
            registry.list().join(", ")
        ))
        .into());
    };

    let (stop_tx, stop_rx) = watch::channel(false);
    solver.initialize(&config, stop_rx).await?;

    let ch = read_challenge().await?;
    info!(
        group = %config.group_name,
        solver = solver.name(),
        uid = %ch.uid,
        action = ?ch.action,
        challenge_type = %ch.challenge_type,
        ambient_credentials = ch.allow_ambient_credentials,
        "Handling challenge"
    );

    let result = tokio::select! {
        res = dispatch(solver.as_ref(), &ch) => res,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
            stop_tx.send(true).ok();
            Err(Error::Other("interrupted before the challenge was handled".into()))
        }
    };

    if let Err(e) = result {
        error!(error = %e, uid = %ch.uid, "Challenge failed");
        return Err(e.into());
    }
    Ok(())
}
