// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod normalizer;
pub mod router;
pub mod similarity;

pub use distance::{aisle_distance, nearest_aisle};
pub use filters::{extract_receipt_items, refine_receipt_words, sanitize_items, search_aisles};
pub use matcher::Matcher;
pub use normalizer::{normalize, normalize_keyword, MIN_KEYWORD_LEN};
pub use router::{build_route, Router};
pub use similarity::similarity;
