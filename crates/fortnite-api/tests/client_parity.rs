//! The async and blocking clients must agree on results and failures.

use fortnite_api::{
    blocking, Error, FortniteClient, GameLanguage, LazyList, Reconstruct, ResponseFlags,
    RetryPolicy,
};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture(name: &str) -> Vec<u8> {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read(&fixture_path)
        .unwrap_or_else(|e| panic!("Failed to read fixture at {}: {}", fixture_path.display(), e))
}

fn async_client(server: &MockServer) -> FortniteClient {
    FortniteClient::builder()
        .with_base_url(server.uri())
        .with_language(GameLanguage::Japanese)
        .with_response_flags(ResponseFlags::INCLUDE_GAMEPLAY_TAGS)
        .with_retry_policy(RetryPolicy::no_retry())
        .build()
        .unwrap()
}

fn blocking_client(uri: String) -> blocking::FortniteClient {
    blocking::FortniteClient::builder()
        .with_base_url(uri)
        .with_language(GameLanguage::Japanese)
        .with_response_flags(ResponseFlags::INCLUDE_GAMEPLAY_TAGS)
        .with_retry_policy(RetryPolicy::no_retry())
        .build()
        .unwrap()
}

/// Every element agrees: equal payloads when built, equal errors when not.
fn assert_same_elements<T: Reconstruct>(left: &LazyList<T>, right: &LazyList<T>) {
    assert_eq!(left.len(), right.len());
    for (index, (a, b)) in left.iter().zip(right.iter()).enumerate() {
        match (a, b) {
            (Ok(a), Ok(b)) => assert_eq!(
                a.to_payload().unwrap(),
                b.to_payload().unwrap(),
                "element {index} differs"
            ),
            (Err(a), Err(b)) => assert_eq!(a, b, "element {index} fails differently"),
            (a, b) => panic!("element {index}: async {:?}, blocking {:?}", a.is_ok(), b.is_ok()),
        }
    }
}

#[tokio::test]
async fn test_cosmetics_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/cosmetics/br"))
        .and(query_param("language", "ja"))
        .and(query_param("responseFlags", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(fixture("cosmetics_br.json"), "application/json"))
        .expect(2)
        .mount(&server)
        .await;

    let from_async = async_client(&server).fetch_cosmetics_br(None).await.unwrap();

    let uri = server.uri();
    let from_blocking = tokio::task::spawn_blocking(move || {
        blocking_client(uri).fetch_cosmetics_br(None)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(from_async.len(), from_blocking.len());
    assert_eq!(from_async.raw(), from_blocking.raw());

    assert_same_elements(&from_async, &from_blocking);

    let a = from_async.first().unwrap().unwrap();
    assert!(!a.gameplay_tags.is_empty());
    assert!(a.path.is_none());
    assert!(from_async.get(2).unwrap().is_err());
}

#[tokio::test]
async fn test_shop_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/shop"))
        .and(query_param("language", "ja"))
        .and(query_param("responseFlags", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(fixture("shop.json"), "application/json"))
        .expect(2)
        .mount(&server)
        .await;

    let from_async = async_client(&server).fetch_shop(None).await.unwrap();

    let uri = server.uri();
    let from_blocking = tokio::task::spawn_blocking(move || blocking_client(uri).fetch_shop(None))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(from_async.to_payload().unwrap(), from_blocking.to_payload().unwrap());
    assert_same_elements(&from_async.entries, &from_blocking.entries);

    for (a, b) in from_async.entries.iter().zip(from_blocking.entries.iter()) {
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_same_elements(&a.br_items, &b.br_items);
        assert_same_elements(&a.tracks, &b.tracks);
        assert!(a.display_asset_path.is_none());
    }
}

#[tokio::test]
async fn test_errors_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/playlists/Playlist_Missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "error": "the requested playlist was not found"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let async_err = async_client(&server)
        .fetch_playlist("Playlist_Missing", None)
        .await
        .unwrap_err();

    let uri = server.uri();
    let blocking_err = tokio::task::spawn_blocking(move || {
        blocking_client(uri).fetch_playlist("Playlist_Missing", None)
    })
    .await
    .unwrap()
    .unwrap_err();

    assert!(matches!(async_err, Error::NotFound(_)));
    assert_eq!(async_err, blocking_err);
}
