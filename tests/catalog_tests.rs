// Catalog provider tests against a mock PostgREST server

use aisle_route::services::{CatalogClient, CatalogError};
use mockito::Matcher;

fn create_client(url: String) -> CatalogClient {
    CatalogClient::new(url, "test_key".to_string(), "produto".to_string(), 5)
        .expect("Failed to create catalog client")
}

#[tokio::test]
async fn test_fetch_catalog() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/produto")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("loja".into(), "eq.Dal Pozzo Vila Bela".into()),
            Matcher::UrlEncoded("order".into(), "corredor.asc".into()),
        ]))
        .match_header("apikey", "test_key")
        .match_header("authorization", "Bearer test_key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"corredor": 25, "produto": "Doces, chocolates", "loja": "Dal Pozzo Vila Bela"},
                {"corredor": 26, "produto": null, "loja": "Dal Pozzo Vila Bela"},
                {"corredor": 0, "produto": "lixo", "loja": "Dal Pozzo Vila Bela"}
            ]"#,
        )
        .create_async()
        .await;

    let client = create_client(server.url());
    let catalog = client
        .fetch_catalog("Dal Pozzo Vila Bela")
        .await
        .expect("catalog");

    mock.assert_async().await;

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].aisle_id, 25);
    assert_eq!(catalog[0].product_text, "Doces, chocolates");
    assert_eq!(catalog[1].product_text, "");
    assert_eq!(catalog[1].store_id, "Dal Pozzo Vila Bela");
}

#[tokio::test]
async fn test_fetch_catalog_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/v1/produto")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("invalid api key")
        .create_async()
        .await;

    let client = create_client(server.url());
    let result = client.fetch_catalog("Dal Pozzo Vila Bela").await;

    match result {
        Err(CatalogError::ApiError { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_catalog_invalid_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/v1/produto")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"message": "not a list"}"#)
        .create_async()
        .await;

    let client = create_client(server.url());
    let result = client.fetch_catalog("Dal Pozzo Vila Bela").await;

    assert!(matches!(result, Err(CatalogError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_health_check() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/v1/produto")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = create_client(server.url());

    assert!(client.health_check().await.expect("health"));
}

#[tokio::test]
async fn test_unconfigured_provider() {
    let client = create_client(String::new());

    assert!(matches!(
        client.fetch_catalog("any").await,
        Err(CatalogError::NotConfigured)
    ));
}
