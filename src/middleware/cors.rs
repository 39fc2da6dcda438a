// CORS for browser clients of the posts API
//
// Every origin is allowed; there is no authentication to protect.

use tower_http::cors::CorsLayer;

/// Layer answering preflights and tagging responses for any origin, method and header
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
