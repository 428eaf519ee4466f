// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CatalogEntry, MatchKind, MatchPolicy, MatchResult, MatchingConfig, MirrorBlock, Route, RouteEntry, StoreLayout};
pub use requests::{BuildRouteRequest, MatchItemRequest, ExtractReceiptRequest, SearchAislesQuery};
pub use responses::{BuildRouteResponse, MatchItemResponse, ExtractReceiptResponse, SearchAislesResponse, StoresResponse, HealthResponse, ErrorResponse};
