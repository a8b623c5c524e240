//! The EGG driver loop: tails new ideas and facts, rebuilds the
//! e-graph, and discharges every outstanding goal each tick.

use std::sync::Arc;
use std::time::{Duration, Instant};

use entail_store::{Store, Table};
use entail_term::Rule;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::engine::Egg;
use crate::error::{EggError, EggResult};

const TICK: Duration = Duration::from_millis(100);

/// Run the EGG core until `cancel` fires.
pub async fn run(store: Arc<Store>, cancel: CancellationToken) -> EggResult<()> {
    let mut egg = Egg::new();
    let mut pool: Vec<Rule> = Vec::new();
    let mut max_fact = 0i64;
    let mut max_idea = 0i64;

    loop {
        if cancel.is_cancelled() {
            return Ok(());
        }

        let tick_start = Instant::now();

        let new_ideas = store.ideas_since(max_idea).await?;
        for row in &new_ideas {
            pool.push(Rule::parse_canonical(&row.data)?);
            max_idea = row.id;
        }

        let new_facts = store.facts_since(max_fact).await?;
        for row in &new_facts {
            let rule = Rule::parse_canonical(&row.data)?;
            egg.add(&rule);
            max_fact = row.id;
        }

        egg.rebuild();

        let mut produced = 0usize;
        let mut still_open = Vec::with_capacity(pool.len());
        for goal in pool.drain(..) {
            let goal_canonical = goal.to_canonical();
            let yielded = egg.execute(&goal);
            let mut discharged = false;
            for rule in &yielded {
                let canonical = rule.to_canonical();
                if Rule::parse_canonical(&canonical).as_ref() != Ok(rule) {
                    return Err(EggError::Invariant(format!(
                        "yielded rule does not round-trip through canonical form: {:?}",
                        canonical
                    )));
                }
                store.insert_or_ignore(Table::Facts, &canonical).await?;
                produced += 1;
                if canonical == goal_canonical {
                    discharged = true;
                }
            }
            if !discharged {
                still_open.push(goal);
            }
        }
        pool = still_open;

        debug!(
            "egg tick: {} new ideas, {} new facts, {} rules produced, {} goals still open",
            new_ideas.len(),
            new_facts.len(),
            produced,
            pool.len()
        );

        if new_ideas.is_empty() && new_facts.is_empty() && produced == 0 {
            let elapsed = tick_start.elapsed();
            let remaining = TICK.saturating_sub(elapsed);
            tokio::select! {
                _ = tokio::time::sleep(remaining) => {}
                _ = cancel.cancelled() => return Ok(()),
            }
        }
    }
}
