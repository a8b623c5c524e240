//! Interactive input task: reads surface-syntax rules from the
//! terminal and inserts the parsed fact (plus its derived idea, if
//! any) into the store. `reedline`'s line editor is synchronous, so
//! it runs on its own OS thread and forwards completed lines to the
//! async task over a channel.

use std::sync::Arc;

use entail_store::{Store, Table};
use entail_term::Rule;
use log::warn;
use reedline::{DefaultPrompt, Reedline, Signal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::CliResult;
use crate::pretty::parse_surface;

enum Line {
    Text(String),
    Eof,
}

pub async fn run(store: Arc<Store>, cancel: CancellationToken) -> CliResult<()> {
    let (tx, mut rx) = mpsc::channel::<Line>(8);

    std::thread::spawn(move || {
        let mut editor = Reedline::create();
        let prompt = DefaultPrompt::default();
        loop {
            match editor.read_line(&prompt) {
                Ok(Signal::Success(buffer)) => {
                    if tx.blocking_send(Line::Text(buffer)).is_err() {
                        break;
                    }
                }
                Ok(Signal::CtrlC) | Ok(Signal::CtrlD) | Err(_) => {
                    let _ = tx.blocking_send(Line::Eof);
                    break;
                }
            }
        }
    });

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            line = rx.recv() => {
                match line {
                    None | Some(Line::Eof) => return Ok(()),
                    Some(Line::Text(text)) => handle_line(&store, &text).await?,
                }
            }
        }
    }
}

async fn handle_line(store: &Store, text: &str) -> CliResult<()> {
    if text.trim().is_empty() {
        return Ok(());
    }

    let rule = match parse_surface(text) {
        Ok(rule) => rule,
        Err(e) => {
            println!("error: {}", e);
            warn!("input parse error: {}", e);
            return Ok(());
        }
    };

    insert_rule(store, &rule).await
}

async fn insert_rule(store: &Store, rule: &Rule) -> CliResult<()> {
    store
        .insert_or_ignore(Table::Facts, &rule.to_canonical())
        .await?;
    if let Some(idea) = rule.idea() {
        store
            .insert_or_ignore(Table::Ideas, &idea.to_canonical())
            .await?;
    }
    Ok(())
}
