// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

type AuthRateLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

const REPLENISH_EVERY_SECS: u64 = 2;
const BURST_SIZE: u32 = 10;

/// Per-client limiter for the credential endpoints, shared by every router
/// built in this process. `None` if the limiter could not be configured.
pub fn auth_rate_limit_layer() -> Option<AuthRateLimit> {
    static RATE_LIMITER: OnceLock<Option<AuthRateLimit>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REPLENISH_EVERY_SECS);
            builder.burst_size(BURST_SIZE);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish();
            if config.is_none() {
                tracing::error!("invalid rate limit configuration, limiter disabled");
            }
            config.map(|config| GovernorLayer::new(config))
        })
        .clone()
}
