//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type IpRateLimit = GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates the rate limiter for the contact form.
///
/// # Limits
///
/// - **Replenish**: one request every 30 seconds
/// - **Burst**: 5 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with connect info.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/contact", post(contact_handler))
///     .layer(rate_limit::contact_layer());
/// ```
pub fn contact_layer() -> IpRateLimit {
    build(30, 5)
}

/// Creates the rate limiter for admin login attempts.
///
/// # Limits
///
/// - **Replenish**: one request every 10 seconds
/// - **Burst**: 5 requests
pub fn login_layer() -> IpRateLimit {
    build(10, 5)
}

fn build(replenish_seconds: u64, burst: u32) -> IpRateLimit {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(replenish_seconds)
            .burst_size(burst)
            .finish()
            .expect("rate limit quota must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
