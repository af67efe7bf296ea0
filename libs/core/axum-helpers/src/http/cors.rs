use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin, method, and header. Suitable for services that run
/// an open CORS policy.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
