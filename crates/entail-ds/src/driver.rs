//! The DS driver loop: tails new facts, runs resolution, stages the
//! results back into the store, and paces itself to a ~100ms tick.

use std::sync::Arc;
use std::time::{Duration, Instant};

use entail_store::{Store, Table};
use entail_term::Rule;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::error::{DsError, DsResult};
use crate::search::Search;

const TICK: Duration = Duration::from_millis(100);

/// Run the DS core until `cancel` fires.
pub async fn run(store: Arc<Store>, cancel: CancellationToken) -> DsResult<()> {
    let mut search = Search::new();
    let mut max_fact = 0i64;

    loop {
        if cancel.is_cancelled() {
            return Ok(());
        }

        let tick_start = Instant::now();

        let new_facts = store.facts_since(max_fact).await?;
        for row in &new_facts {
            search.add(&row.data)?;
            max_fact = row.id;
        }

        let mut derived = Vec::new();
        search.execute(|rule| {
            derived.push(rule.clone());
            false
        });

        for rule in &derived {
            let canonical = rule.to_canonical();
            if Rule::parse_canonical(&canonical).as_ref() != Ok(rule) {
                return Err(DsError::Invariant(format!(
                    "derived rule does not round-trip through canonical form: {:?}",
                    canonical
                )));
            }
            store.insert_or_ignore(Table::Facts, &canonical).await?;
            if let Some(idea) = rule.idea() {
                store
                    .insert_or_ignore(Table::Ideas, &idea.to_canonical())
                    .await?;
            }
        }

        debug!("ds tick: {} new facts read, {} rules derived", new_facts.len(), derived.len());

        if derived.is_empty() {
            let elapsed = tick_start.elapsed();
            let remaining = TICK.saturating_sub(elapsed);
            tokio::select! {
                _ = tokio::time::sleep(remaining) => {}
                _ = cancel.cancelled() => return Ok(()),
            }
        }
    }
}
