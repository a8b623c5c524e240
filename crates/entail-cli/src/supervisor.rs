//! Spawns input, output, DS, and EGG as cooperative peer tasks over
//! one shared store handle. If any task ends — including by external
//! cancellation — the rest are cancelled and the run tears down.

use std::sync::Arc;

use entail_store::Store;
use log::{error, info};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::config::{Component, Config};
use crate::error::{CliError, CliResult};
use crate::{input, output};

pub async fn run(config: Config) -> CliResult<()> {
    let store = Arc::new(Store::initialize(&config.address).await?);
    let cancel = CancellationToken::new();
    let mut tasks = JoinSet::new();

    if config.components.contains(&Component::Ds) {
        let store = store.clone();
        let cancel = cancel.clone();
        tasks.spawn(async move { entail_ds::run(store, cancel).await.map_err(CliError::from) });
    }
    if config.components.contains(&Component::Egg) {
        let store = store.clone();
        let cancel = cancel.clone();
        tasks.spawn(async move { entail_egg::run(store, cancel).await.map_err(CliError::from) });
    }
    if config.components.contains(&Component::Input) {
        let store = store.clone();
        let cancel = cancel.clone();
        tasks.spawn(async move { input::run(store, cancel).await });
    }
    if config.components.contains(&Component::Output) {
        let store = store.clone();
        let cancel = cancel.clone();
        tasks.spawn(async move { output::run(store, cancel).await });
    }

    let shutdown = tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
    });

    let first_result = tokio::select! {
        res = tasks.join_next() => res,
        _ = shutdown => None,
    };

    info!("shutting down, cancelling remaining tasks");
    cancel.cancel();
    while let Some(res) = tasks.join_next().await {
        if let Err(join_err) = res {
            error!("task panicked: {}", join_err);
        }
    }

    match first_result {
        Some(Ok(Err(e))) => {
            error!("task exited with a fatal error: {}", e);
            Err(e)
        }
        Some(Err(join_err)) => {
            error!("task panicked: {}", join_err);
            Ok(())
        }
        _ => Ok(()),
    }
}
