use crate::{
    abstract_trait::producto::{DynProductoCommandHandler, DynProductoQueryHandler},
    di::DependenciesInject,
    service::UnboundProductoHandler,
};
use prometheus_client::registry::Registry;
use shared::utils::Metrics;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    /// State for the standalone binary, where no producto backend is linked.
    pub async fn new() -> Self {
        info!("No producto handler configured, binding the unbound handler");
        let handler = Arc::new(UnboundProductoHandler);
        Self::with_handlers(handler.clone(), handler).await
    }

    pub async fn with_handlers(
        query_handler: DynProductoQueryHandler,
        command_handler: DynProductoCommandHandler,
    ) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::new()));

        let di_container = DependenciesInject::new(
            query_handler,
            command_handler,
            metrics,
            registry.clone(),
        )
        .await;

        Self {
            di_container,
            registry,
        }
    }
}
