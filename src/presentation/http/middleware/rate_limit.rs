use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type AuthRateLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limit for the auth endpoints: a burst of 20, refilled at 10
/// requests per second. Clients are keyed by forwarding headers, falling
/// back to the peer address, so the server must be run with connect info.
pub fn rate_limit_layer() -> Option<AuthRateLimit> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(10);
    builder.burst_size(20);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;
    Some(GovernorLayer::new(config))
}
