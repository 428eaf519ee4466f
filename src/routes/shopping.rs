use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::StoreSettings;
use crate::core::{extract_receipt_items, refine_receipt_words, search_aisles, Router};
use crate::models::{
    BuildRouteRequest, BuildRouteResponse, CatalogEntry, ErrorResponse, ExtractReceiptRequest,
    ExtractReceiptResponse, HealthResponse, MatchItemRequest, MatchItemResponse,
    SearchAislesQuery, SearchAislesResponse, StoresResponse,
};
use crate::services::CatalogClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub router: Router,
    pub stores: StoreSettings,
    pub max_items: usize,
}

/// Configure all shopping-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/stores", web::get().to(list_stores))
        .route("/route", web::post().to(build_route))
        .route("/match", web::post().to(match_item))
        .route("/receipt/items", web::post().to(extract_receipt))
        .route("/aisles", web::get().to(search_catalog));
}

fn error_response(status: u16, error: &str, message: String) -> HttpResponse {
    let body = ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status,
    };

    match status {
        400 => HttpResponse::BadRequest().json(body),
        502 => HttpResponse::BadGateway().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

/// Resolve the catalog snapshot for a request
///
/// An inline catalog wins. Otherwise the named store, or the first configured
/// store, is fetched from the catalog provider.
async fn resolve_catalog(
    state: &AppState,
    store_id: Option<&str>,
    inline: Option<Vec<CatalogEntry>>,
) -> Result<(Option<String>, Vec<CatalogEntry>), HttpResponse> {
    if let Some(catalog) = inline {
        return Ok((store_id.map(str::to_string), catalog));
    }

    let store = match store_id
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| state.stores.default_store())
    {
        Some(store) => store.to_string(),
        None => {
            return Err(error_response(
                400,
                "Missing store",
                "storeId is required when no store is configured".to_string(),
            ));
        }
    };

    match state.catalog.fetch_catalog(&store).await {
        Ok(catalog) => Ok((Some(store), catalog)),
        Err(e) => {
            tracing::error!("Failed to fetch catalog for {}: {}", store, e);
            Err(error_response(502, "Failed to fetch catalog", e.to_string()))
        }
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog_healthy = match state.catalog.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Catalog health check failed: {}", e);
            false
        }
    };

    let status = if catalog_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List configured stores
///
/// GET /api/v1/stores
async fn list_stores(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(StoresResponse {
        stores: state.stores.names.clone(),
        default_store: state.stores.default_store().map(str::to_string),
    })
}

/// Build shopping route endpoint
///
/// POST /api/v1/route
///
/// Non-string and blank items are dropped; an empty list yields an empty
/// route.
///
/// Request body:
/// ```json
/// {
///   "storeId": "string",
///   "items": ["string"],
///   "catalog": [{ "aisleId": 25, "productText": "arroz, feijao", "storeId": "string" }]
/// }
/// ```
async fn build_route(
    state: web::Data<AppState>,
    req: web::Json<BuildRouteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(400, "Validation failed", errors.to_string());
    }

    if req.items.len() > state.max_items {
        return error_response(
            400,
            "Validation failed",
            format!("at most {} items per request", state.max_items),
        );
    }

    let BuildRouteRequest { store_id, items, catalog } = req.into_inner();

    // Nothing to place: skip the catalog provider
    if items.iter().all(|item| item.trim().is_empty()) {
        return HttpResponse::Ok().json(BuildRouteResponse {
            request_id: uuid::Uuid::new_v4().to_string(),
            store_id,
            route: Vec::new(),
            unmatched: Vec::new(),
            total_items: 0,
        });
    }

    let (store_id, catalog) = match resolve_catalog(&state, store_id.as_deref(), catalog).await {
        Ok(resolved) => resolved,
        Err(response) => return response,
    };

    let route = state.router.build_route(&items, &catalog);
    let total_items = route.matched_count() + route.unmatched.len();

    tracing::info!(
        "Route for {:?}: {} aisles, {} matched, {} unmatched (catalog of {})",
        store_id,
        route.entries.len(),
        route.matched_count(),
        route.unmatched.len(),
        catalog.len()
    );

    HttpResponse::Ok().json(BuildRouteResponse {
        request_id: uuid::Uuid::new_v4().to_string(),
        store_id,
        route: route.entries,
        unmatched: route.unmatched,
        total_items,
    })
}

/// Locate a single item
///
/// POST /api/v1/match
async fn match_item(
    state: web::Data<AppState>,
    req: web::Json<MatchItemRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(400, "Validation failed", errors.to_string());
    }

    let MatchItemRequest { store_id, item, catalog } = req.into_inner();

    if item.trim().is_empty() {
        return error_response(400, "Validation failed", "item must not be blank".to_string());
    }

    let (store_id, catalog) = match resolve_catalog(&state, store_id.as_deref(), catalog).await {
        Ok(resolved) => resolved,
        Err(response) => return response,
    };

    let result = state.router.matcher().match_item(item.trim(), &catalog);

    HttpResponse::Ok().json(MatchItemResponse { store_id, result })
}

/// Extract item names from receipt OCR text
///
/// POST /api/v1/receipt/items
async fn extract_receipt(
    state: web::Data<AppState>,
    req: web::Json<ExtractReceiptRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(400, "Validation failed", errors.to_string());
    }

    let ExtractReceiptRequest { text, store_id, catalog, refine } = req.into_inner();

    let words = extract_receipt_items(&text);
    tracing::debug!("Extracted {} words from receipt", words.len());

    if !refine || words.is_empty() {
        return HttpResponse::Ok().json(ExtractReceiptResponse {
            items: words,
            refined: false,
        });
    }

    let (_, catalog) = match resolve_catalog(&state, store_id.as_deref(), catalog).await {
        Ok(resolved) => resolved,
        Err(response) => return response,
    };

    let items = refine_receipt_words(&words, &catalog, state.router.matcher());

    HttpResponse::Ok().json(ExtractReceiptResponse {
        items,
        refined: true,
    })
}

/// Search aisles by product
///
/// GET /api/v1/aisles?storeId={storeId}&q={query}
async fn search_catalog(
    state: web::Data<AppState>,
    query: web::Query<SearchAislesQuery>,
) -> impl Responder {
    let SearchAislesQuery { store_id, q } = query.into_inner();

    let (store_id, catalog) = match resolve_catalog(&state, store_id.as_deref(), None).await {
        Ok(resolved) => resolved,
        Err(response) => return response,
    };

    let aisles = search_aisles(&catalog, &q).into_iter().cloned().collect();

    HttpResponse::Ok().json(SearchAislesResponse { store_id, aisles })
}
