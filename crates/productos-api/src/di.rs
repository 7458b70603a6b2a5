use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    abstract_trait::producto::{DynProductoCommandHandler, DynProductoQueryHandler},
    service::ProductoDispatcherService,
};
use shared::utils::Metrics;

#[derive(Clone)]
pub struct DependenciesInject {
    pub producto_query: DynProductoQueryHandler,
    pub producto_command: DynProductoCommandHandler,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("producto_query", &"DynProductoQueryHandler")
            .field("producto_command", &"DynProductoCommandHandler")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(
        query_handler: DynProductoQueryHandler,
        command_handler: DynProductoCommandHandler,
        metrics: Arc<Mutex<Metrics>>,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let dispatcher = Arc::new(
            ProductoDispatcherService::new(query_handler, command_handler, metrics, registry)
                .await,
        );

        Self {
            producto_query: dispatcher.clone(),
            producto_command: dispatcher,
        }
    }
}
