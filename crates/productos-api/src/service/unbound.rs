use crate::{
    abstract_trait::producto::{ProductoCommandHandlerTrait, ProductoQueryHandlerTrait},
    domain::{
        messages::producto::{CreateProductoCommand, GetProductoByIdQuery},
        response::producto::ProductoResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::warn;

/// Placeholder bound when no producto backend has been wired in. Every
/// dispatch fails as unavailable.
#[derive(Debug, Clone, Default)]
pub struct UnboundProductoHandler;

const UNBOUND_MESSAGE: &str = "No producto handler is bound to this gateway";

#[async_trait]
impl ProductoQueryHandlerTrait for UnboundProductoHandler {
    async fn get_producto_by_id(
        &self,
        query: GetProductoByIdQuery,
    ) -> Result<Option<ProductoResponse>, ServiceError> {
        warn!(producto_id = query.id, "{UNBOUND_MESSAGE}");
        Err(ServiceError::Unavailable(UNBOUND_MESSAGE.to_string()))
    }
}

#[async_trait]
impl ProductoCommandHandlerTrait for UnboundProductoHandler {
    async fn create_producto(
        &self,
        command: CreateProductoCommand,
    ) -> Result<ProductoResponse, ServiceError> {
        warn!(codigo = %command.codigo, "{UNBOUND_MESSAGE}");
        Err(ServiceError::Unavailable(UNBOUND_MESSAGE.to_string()))
    }
}
