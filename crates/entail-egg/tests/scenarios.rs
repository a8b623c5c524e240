//! End-to-end scenarios driving the EGG engine against a live store.

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
        tokio::spawn(async move { entail_egg::run(store, cancel).await })
    };
    tokio::time::sleep(Duration::from_millis(millis)).await;
    cancel.cancel();
    handle.await.unwrap().unwrap();
}

async fn facts(store: &Store) -> Vec<String> {
    store
        .facts_since(0)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.data)
        .collect()
}

#[tokio::test]
async fn equality_symmetry() {
    let (store, _file) = new_store().await;
    insert(&store, Table::Facts, "----\n(binary == a b)\n").await;
    insert(&store, Table::Ideas, "----\n(binary == b a)\n").await;

    run_for(store.clone(), 50).await;

    assert!(facts(&store).await.contains(&"----\n(binary == b a)\n".to_string()));
}

#[tokio::test]
async fn transitivity() {
    let (store, _file) = new_store().await;
    insert(&store, Table::Facts, "----\n(binary == a b)\n").await;
    insert(&store, Table::Facts, "----\n(binary == b c)\n").await;
    insert(&store, Table::Ideas, "----\n(binary == a c)\n").await;

    run_for(store.clone(), 50).await;

    assert!(facts(&store).await.contains(&"----\n(binary == a c)\n".to_string()));
}

#[tokio::test]
async fn congruence() {
    let (store, _file) = new_store().await;
    insert(&store, Table::Facts, "----\n(binary == x y)\n").await;
    insert(
        &store,
        Table::Ideas,
        "----\n(binary == (unary f x) (unary f y))\n",
    )
    .await;

    run_for(store.clone(), 50).await;

    assert!(facts(&store)
        .await
        .contains(&"----\n(binary == (unary f x) (unary f y))\n".to_string()));
}

#[tokio::test]
async fn pattern_variable_equality() {
    let (store, _file) = new_store().await;
    insert(
        &store,
        Table::Facts,
        "----\n(binary == (unary a `x) (unary b `x))\n",
    )
    .await;
    insert(
        &store,
        Table::Ideas,
        "----\n(binary == (unary b t) (unary a t))\n",
    )
    .await;

    run_for(store.clone(), 50).await;

    assert!(facts(&store)
        .await
        .contains(&"----\n(binary == (unary b t) (unary a t))\n".to_string()));
}

#[tokio::test]
async fn substitution_via_congruence() {
    let (store, _file) = new_store().await;
    insert(&store, Table::Facts, "----\n(unary f x)\n").await;
    insert(&store, Table::Facts, "----\n(binary == x y)\n").await;
    insert(&store, Table::Ideas, "----\n(unary f y)\n").await;

    run_for(store.clone(), 50).await;

    assert!(facts(&store).await.contains(&"----\n(unary f y)\n".to_string()));
}
