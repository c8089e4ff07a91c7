// tests/collection_flow.rs
//
// Fetch → query → save → load through the public API, against a local
// HTTP server standing in for the catalog.

use pokecatalog::{AppError, AppState, FetcherConfig, Record, RecordType, Stats};
use serde_json::json;
use tempfile::TempDir;

fn payload(id: u32, name: &str, types: &[&str], stats: [u32; 6]) -> String {
    let keys = ["hp", "attack", "defense", "special-attack", "special-defense", "speed"];
    json!({
        "id": id,
        "name": name,
        "sprites": { "front_default": format!("https://sprites.example/{}.png", id) },
        "types": types.iter().map(|t| json!({ "type": { "name": t } })).collect::<Vec<_>>(),
        "stats": keys.iter().zip(stats).map(|(k, v)| json!({
            "base_stat": v,
            "stat": { "name": k }
        })).collect::<Vec<_>>(),
    })
    .to_string()
}

async fn catalog_server() -> mockito::ServerGuard {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/v2/pokemon/1")
        .with_status(200)
        .with_body(payload(1, "bulbasaur", &["grass", "poison"], [45, 49, 49, 65, 65, 45]))
        .create_async()
        .await;
    server
        .mock("GET", "/api/v2/pokemon/2")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;
    server
        .mock("GET", "/api/v2/pokemon/3")
        .with_status(200)
        .with_body(payload(3, "shadowmon", &["shadow"], [1, 1, 1, 1, 1, 1]))
        .create_async()
        .await;
    server
        .mock("GET", "/api/v2/pokemon/4")
        .with_status(200)
        .with_body(payload(4, "charmander", &["fire"], [39, 52, 43, 60, 50, 65]))
        .create_async()
        .await;
    server
}

#[tokio::test]
async fn fetch_query_save_and_reload() {
    let server = catalog_server().await;
    let dir = TempDir::new().unwrap();
    let config = FetcherConfig::new(format!("{}/api/v2/pokemon", server.url()));

    let state = AppState::new(config.clone(), Some(dir.path().to_path_buf())).unwrap();
    state.controller.fetch_initial(4).await;

    // 2 is missing upstream and 3 has an unknown type; both are skipped
    let current = state.controller.current();
    let ids: Vec<u32> = current.iter().map(Record::id).collect();
    assert_eq!(ids, vec![1, 4]);
    assert_eq!(state.fetcher.cache_len(), 2);

    let fire = state.controller.filter_by_type(Some(RecordType::Fire));
    assert_eq!(fire.len(), 1);
    assert_eq!(fire[0].name(), "charmander");

    let found = state.controller.search(Some("bulba"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].stats(), Stats::new(45, 49, 49, 65, 65, 45));

    assert_eq!(state.controller.find_by_id(4).unwrap().name(), "charmander");
    assert!(state.controller.find_by_id(999).is_none());

    let path = state.controller.save("starters").unwrap();
    assert_eq!(path, dir.path().join("starters.json"));

    // A fresh state that never touched the network sees the same records
    let reloaded = AppState::new(config, Some(dir.path().to_path_buf())).unwrap();
    assert_eq!(reloaded.controller.load("starters.json").unwrap(), 2);
    assert_eq!(reloaded.fetcher.cache_len(), 2);

    let restored = reloaded.controller.current();
    assert_eq!(restored.len(), current.len());
    for (a, b) in restored.iter().zip(&current) {
        assert!(a.same_content(b));
    }
}

#[tokio::test]
async fn empty_fetch_cannot_be_saved() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", mockito::Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let state = AppState::new(
        FetcherConfig::new(server.url()),
        Some(dir.path().to_path_buf()),
    )
    .unwrap();

    state.controller.fetch_initial(3).await;
    assert!(state.controller.is_empty());

    let err = state.controller.save("nothing").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(!dir.path().join("nothing.json").exists());
}
