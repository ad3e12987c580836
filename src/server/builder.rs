//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::{EntityDescriptor, EntityRegistry};
use super::fallback::path_not_found;
use crate::core::module::Module;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for creating HTTP servers with auto-registered routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_service_name("dinein")
///     .register_module(RestaurantModule::in_memory())
///     .build();
/// ```
pub struct ServerBuilder {
    entity_registry: EntityRegistry,
    modules: Vec<Arc<dyn Module>>,
    custom_routes: Vec<Router>,
    service_name: String,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            entity_registry: EntityRegistry::new(),
            modules: Vec::new(),
            custom_routes: Vec::new(),
            service_name: "dinein".to_string(),
        }
    }

    /// Name reported by the health endpoints
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Register a single entity descriptor
    pub fn register_entity(mut self, descriptor: impl EntityDescriptor + 'static) -> Self {
        self.entity_registry.register(Box::new(descriptor));
        self
    }

    /// Register a module and all of its entities
    pub fn register_module(mut self, module: impl Module + 'static) -> Self {
        let module = Arc::new(module);
        module.register_entities(&mut self.entity_registry);
        tracing::debug!(
            module = module.name(),
            version = module.version(),
            entities = ?module.entity_types(),
            "module registered"
        );
        self.modules.push(module);
        self
    }

    /// Entity types registered so far
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }

    /// Build the final router
    ///
    /// This generates:
    /// - health routes
    /// - routes for all registered entities (405 on unmapped verbs)
    /// - custom routes
    /// - a 404 fallback for every other path
    /// - request tracing
    pub fn build(self) -> Router {
        for module in &self.modules {
            tracing::info!(
                module = module.name(),
                routes = ?self.entity_registry.collection_paths(),
                "mounting module"
            );
        }

        let mut app = Self::health_routes(self.service_name).merge(self.entity_registry.build_routes());

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        app.fallback(path_not_found)
            .layer(TraceLayer::new_for_http())
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        let app = self.build();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    fn health_routes(service_name: String) -> Router {
        let health = get(move || {
            let service = service_name.clone();
            async move { Json(json!({ "status": "ok", "service": service })) }
        });

        Router::new()
            .route("/health", health.clone())
            .route("/healthz", health)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
