//! Output task: tails new idea and fact rows and prints them in
//! surface syntax, prefixed `idea:`/`fact:`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use entail_store::Store;
use entail_term::Rule;
use tokio_util::sync::CancellationToken;

use crate::error::CliResult;
use crate::pretty::to_surface;

const TICK: Duration = Duration::from_millis(100);

pub async fn run(store: Arc<Store>, cancel: CancellationToken) -> CliResult<()> {
    let mut max_fact = 0i64;
    let mut max_idea = 0i64;

    loop {
        if cancel.is_cancelled() {
            return Ok(());
        }

        let tick_start = Instant::now();
        let mut printed = 0usize;

        let new_ideas = store.ideas_since(max_idea).await?;
        for row in &new_ideas {
            max_idea = row.id;
            if let Ok(rule) = Rule::parse_canonical(&row.data) {
                println!("idea: {}", to_surface(&rule));
                printed += 1;
            }
        }

        let new_facts = store.facts_since(max_fact).await?;
        for row in &new_facts {
            max_fact = row.id;
            if let Ok(rule) = Rule::parse_canonical(&row.data) {
                println!("fact: {}", to_surface(&rule));
                printed += 1;
            }
        }

        if printed == 0 {
            let elapsed = tick_start.elapsed();
            let remaining = TICK.saturating_sub(elapsed);
            tokio::select! {
                _ = tokio::time::sleep(remaining) => {}
                _ = cancel.cancelled() => return Ok(()),
            }
        }
    }
}
