//! End-to-end scenarios driving the DS engine against a live store,
//! rather than spawning the full CLI process.

use std::sync::Arc;
use std::time::Duration;

use entail_store::{Store, Table};
use tokio_util::sync::CancellationToken;

/// A fresh sqlite-backed store for one test. The returned temp file
/// must stay alive as long as the store is in use.
async fn new_store() -> (Arc<Store>, tempfile::NamedTempFile) {
    let file = tempfile::NamedTempFile::new().unwrap();
    let addr = format!("sqlite://{}", file.path().display());
    (Arc::new(Store::initialize(&addr).await.unwrap()), file)
}

async fn insert(store: &Store, table: Table, data: &str) {
    store.insert_or_ignore(table, data).await.unwrap();
}

async fn run_for(store: Arc<Store>, millis: u64) {
    let cancel = CancellationToken::new();
    let handle = {
        let cancel = cancel.clone();
        let store = store.clone();
        tokio::spawn(async move { entail_ds::run(store, cancel).await })
    };
    tokio::time::sleep(Duration::from_millis(millis)).await;
    cancel.cancel();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn modus_ponens() {
    let (store, _file) = new_store().await;
    insert(&store, Table::Facts, "a\n----\nb\n").await;
    insert(&store, Table::Facts, "----\na\n").await;

    run_for(store.clone(), 50).await;

    let facts: Vec<String> = store
        .facts_since(0)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.data)
        .collect();
    assert!(facts.contains(&"----\nb\n".to_string()));
}

#[tokio::test]
async fn multi_premise_derives_remainder_and_idea() {
    let (store, _file) = new_store().await;
    insert(&store, Table::Facts, "a\nb\n----\nc\n").await;
    insert(&store, Table::Facts, "----\na\n").await;

    run_for(store.clone(), 50).await;

    let facts: Vec<String> = store
        .facts_since(0)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.data)
        .collect();
    assert!(facts.contains(&"b\n----\nc\n".to_string()));

    let ideas: Vec<String> = store
        .ideas_since(0)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.data)
        .collect();
    assert!(ideas.contains(&"----\na\n".to_string()));
}

#[tokio::test]
async fn chained_inference_across_ticks() {
    let (store, _file) = new_store().await;
    insert(&store, Table::Facts, "a\n----\nb\n").await;
    insert(&store, Table::Facts, "b\n----\nc\n").await;
    insert(&store, Table::Facts, "----\na\n").await;

    run_for(store.clone(), 400).await;

    let facts: Vec<String> = store
        .facts_since(0)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.data)
        .collect();
    assert!(facts.contains(&"----\nb\n".to_string()));
    assert!(facts.contains(&"----\nc\n".to_string()));
}

#[tokio::test]
async fn rerunning_ds_on_stable_input_adds_nothing() {
    let (store, _file) = new_store().await;
    insert(&store, Table::Facts, "a\n----\nb\n").await;
    insert(&store, Table::Facts, "----\na\n").await;

    run_for(store.clone(), 50).await;
    let first_count = store.facts_since(0).await.unwrap().len();

    run_for(store.clone(), 50).await;
    let second_count = store.facts_since(0).await.unwrap().len();

    assert_eq!(first_count, second_count);
}
