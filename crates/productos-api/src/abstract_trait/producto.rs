use crate::domain::{
    messages::producto::{CreateProductoCommand, GetProductoByIdQuery},
    response::producto::ProductoResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductoQueryHandler = Arc<dyn ProductoQueryHandlerTrait + Send + Sync>;
pub type DynProductoCommandHandler = Arc<dyn ProductoCommandHandlerTrait + Send + Sync>;

/// Read side of the producto dispatcher. `Ok(None)` means no producto has
/// the requested id.
#[async_trait]
pub trait ProductoQueryHandlerTrait {
    async fn get_producto_by_id(
        &self,
        query: GetProductoByIdQuery,
    ) -> Result<Option<ProductoResponse>, ServiceError>;
}

#[async_trait]
pub trait ProductoCommandHandlerTrait {
    async fn create_producto(
        &self,
        command: CreateProductoCommand,
    ) -> Result<ProductoResponse, ServiceError>;
}
