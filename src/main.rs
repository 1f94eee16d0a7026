use axum::{http::Method, routing::get, Router};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use qms_backend::{
    config::Config,
    db::{connection::create_pool, schema},
    docs, handlers,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qms_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        database_url = %config.database_url,
        port = config.port,
        time_zone = %config.time_zone,
        "Loaded configuration from environment/.env"
    );

    // Initialize database
    let pool = create_pool(&config.database_url).await?;
    schema::init_schema(&pool).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(pool, config);

    let api_routes = Router::new()
        .route(
            "/api/entities/{kind}",
            get(handlers::entities::list_entities).post(handlers::entities::create_entity),
        )
        .route(
            "/api/entities/{kind}/{id}",
            get(handlers::entities::get_entity)
                .put(handlers::entities::update_entity)
                .delete(handlers::entities::delete_entity),
        )
        .route(
            "/api/entities/{kind}/export/{format}",
            get(handlers::export::export_entities),
        )
        .route(
            "/api/dashboard",
            get(handlers::dashboard::dashboard_summary),
        )
        .route(
            "/api/audit-logs",
            get(handlers::audit_logs::list_audit_logs),
        );

    // Compose app with shared layers (CORS/Trace) and shared state
    let app = Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", docs::ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state);

    // Start server
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
