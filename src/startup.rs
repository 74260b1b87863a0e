//! Application startup and lifecycle management.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use secrecy::ExposeSecret;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::AppError;
use crate::handlers;
use crate::services::{ProductDb, ProductRepository};

/// Shared application state, injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: ProductDb,
    pub repository: ProductRepository,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    db: ProductDb,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Fails when the store is unreachable so the process never starts
    /// serving without a database connection.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let db = ProductDb::connect(
            config.database.url.expose_secret(),
            &config.database.db_name,
        )
        .await?;

        let repository = ProductRepository::new(db.database());

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
            repository,
        };

        let router = Router::new()
            .route("/", get(handlers::products::welcome))
            .route("/health", get(handlers::health::health_check))
            .route("/products", post(handlers::products::create_product))
            .route("/products", get(handlers::products::list_products))
            .route("/products/:id", get(handlers::products::get_product))
            .route("/products/:id", put(handlers::products::update_product))
            .route("/products/:id", delete(handlers::products::delete_product))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                }),
            )
            .with_state(state);

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
            db,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a handle to the database connector.
    pub fn db(&self) -> &ProductDb {
        &self.db
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        tracing::info!("Listening on port {}", self.port);
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}
