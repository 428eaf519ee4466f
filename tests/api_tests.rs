// HTTP API tests

use actix_web::{test, web, App};
use aisle_route::config::StoreSettings;
use aisle_route::core::Router;
use aisle_route::models::{
    BuildRouteResponse, ErrorResponse, ExtractReceiptResponse, MatchItemResponse, StoresResponse,
};
use aisle_route::routes::{self, shopping::AppState};
use aisle_route::services::CatalogClient;
use serde_json::json;
use std::sync::Arc;

fn create_state() -> AppState {
    let catalog = CatalogClient::new(String::new(), String::new(), "produto".to_string(), 5)
        .expect("Failed to create catalog client");

    AppState {
        catalog: Arc::new(catalog),
        router: Router::default(),
        stores: StoreSettings::default(),
        max_items: 10,
    }
}

fn inline_catalog() -> serde_json::Value {
    json!([
        { "aisleId": 30, "productText": "vassoura", "storeId": "loja" },
        { "aisleId": 35, "productText": "fralda", "storeId": "loja" },
        { "aisleId": 80, "productText": "cerveja", "storeId": "loja" }
    ])
}

#[actix_web::test]
async fn test_build_route_with_inline_catalog() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/route")
        .set_json(json!({
            "storeId": "loja",
            "items": ["vassoura", "fralda", "cerveja", "leite", " "],
            "catalog": inline_catalog()
        }))
        .to_request();

    let resp: BuildRouteResponse = test::call_and_read_body_json(&app, req).await;

    let order: Vec<u32> = resp.route.iter().map(|e| e.aisle_id).collect();
    assert_eq!(order, vec![30, 80, 35]);
    assert_eq!(resp.unmatched, vec!["leite"]);
    assert_eq!(resp.total_items, 4);
    assert_eq!(resp.store_id.as_deref(), Some("loja"));
    assert!(!resp.request_id.is_empty());
}

#[actix_web::test]
async fn test_build_route_empty_list() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(routes::configure_routes),
    )
    .await;

    // no catalog given and the provider is unconfigured: must not be consulted
    let req = test::TestRequest::post()
        .uri("/api/v1/route")
        .set_json(json!({ "items": [] }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: BuildRouteResponse = test::read_body_json(resp).await;
    assert!(body.route.is_empty());
    assert!(body.unmatched.is_empty());
    assert_eq!(body.total_items, 0);
}

#[actix_web::test]
async fn test_build_route_drops_non_string_items() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/route")
        .set_json(json!({
            "items": ["cerveja", null, 5, { "name": "fralda" }, "vassoura"],
            "catalog": inline_catalog()
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: BuildRouteResponse = test::read_body_json(resp).await;
    let order: Vec<u32> = body.route.iter().map(|e| e.aisle_id).collect();
    assert_eq!(order, vec![80, 30]);
    assert!(body.unmatched.is_empty());
    assert_eq!(body.total_items, 2);
}

#[actix_web::test]
async fn test_build_route_rejects_oversized_list() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let items: Vec<String> = (0..11).map(|i| format!("item{}", i)).collect();
    let req = test::TestRequest::post()
        .uri("/api/v1/route")
        .set_json(json!({ "items": items, "catalog": inline_catalog() }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_build_route_provider_unavailable() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/route")
        .set_json(json!({ "storeId": "Dal Pozzo Vila Bela", "items": ["arroz"] }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 502);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.status_code, 502);
}

#[actix_web::test]
async fn test_match_item() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({ "item": " Cerveja ", "catalog": inline_catalog() }))
        .to_request();

    let resp: MatchItemResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.result.aisle_id(), Some(80));
    assert_eq!(resp.result.item(), "Cerveja");
}

#[actix_web::test]
async fn test_extract_receipt_without_refinement() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/receipt/items")
        .set_json(json!({
            "text": "CNPJ 123\n001 7891000100103 CERVEJA LATA 2 UN 7,98\nTOTAL 7,98",
            "refine": false
        }))
        .to_request();

    let resp: ExtractReceiptResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.items, vec!["cerveja", "lata"]);
    assert!(!resp.refined);
}

#[actix_web::test]
async fn test_list_stores() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/stores").to_request();
    let resp: StoresResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.stores.len(), 3);
    assert_eq!(resp.default_store.as_deref(), Some("Dal Pozzo Vila Bela"));
}
