use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

#[cfg(not(test))]
use {
    crate::error::Error,
    axum::extract::ConnectInfo,
    std::net::IpAddr,
    std::sync::Arc,
    tower_governor::{governor::GovernorConfigBuilder, key_extractor::KeyExtractor, GovernorLayer},
};

use crate::api::handlers::{self, AppState};
use crate::api::mcp;
use crate::config::Settings;
use crate::Result;

/// Create the router with all endpoints
pub fn create_router(state: AppState, settings: &Settings) -> Result<Router> {
    // Tool endpoints - REST and JSON-RPC share the same tool service
    #[cfg_attr(test, allow(unused_mut))]
    let mut api_routes = Router::new()
        .route("/recipes", get(handlers::get_recipe))
        .route("/suggest/ingredients", post(handlers::suggest_by_ingredients))
        .route("/suggest/preferences", post(handlers::suggest_by_preference))
        .route("/tools", get(handlers::list_tools))
        .route("/stats", get(handlers::get_stats))
        .with_state(state.clone());

    #[cfg_attr(test, allow(unused_mut))]
    let mut mcp_routes = Router::new()
        .route("/mcp", post(mcp::handle_mcp))
        .with_state(state.clone());

    // Rate limiting only in non-test builds.
    // The key extractor falls back to 127.0.0.1 when no peer address is
    // available; behind a reverse proxy use a header-based extractor instead.
    #[cfg(not(test))]
    {
        #[derive(Clone, Copy, Debug)]
        struct FallbackIpKeyExtractor;

        impl KeyExtractor for FallbackIpKeyExtractor {
            type Key = IpAddr;

            fn extract<B>(
                &self,
                req: &axum::http::Request<B>,
            ) -> std::result::Result<Self::Key, tower_governor::GovernorError> {
                if let Some(ConnectInfo(addr)) =
                    req.extensions().get::<ConnectInfo<std::net::SocketAddr>>()
                {
                    return Ok(addr.ip());
                }

                Ok(IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)))
            }
        }

        // api_rate_limit is requests per second; governor takes the interval
        // between single-token refills.
        let rate = settings.server.api_rate_limit;
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(FallbackIpKeyExtractor)
                .per_millisecond((1000 / rate).max(1))
                .burst_size(u32::try_from(rate).unwrap_or(u32::MAX).saturating_mul(2))
                .finish()
                .ok_or_else(|| Error::Config("Invalid rate limit configuration".to_string()))?,
        );
        api_routes = api_routes.layer(GovernorLayer {
            config: governor_conf.clone(),
        });
        mcp_routes = mcp_routes.layer(GovernorLayer {
            config: governor_conf,
        });
    }

    let api_routes = api_routes;
    let mcp_routes = mcp_routes;

    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .with_state(state);

    Ok(Router::new()
        .merge(health_routes)
        .merge(mcp_routes)
        .nest("/api", api_routes)
        .layer(
            // Request body size limit - tool arguments are small
            RequestBodyLimitLayer::new(settings.limits.max_request_body_size),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
