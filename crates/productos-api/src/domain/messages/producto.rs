//! Typed messages sent to the producto command and query handlers.

use crate::domain::requests::producto::CreateProductoRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProductoByIdQuery {
    pub id: i32,
}

impl GetProductoByIdQuery {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductoCommand {
    pub codigo: String,
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub activo: bool,
    pub categoria_id: i32,
}

impl From<CreateProductoRequest> for CreateProductoCommand {
    fn from(value: CreateProductoRequest) -> Self {
        Self {
            codigo: value.codigo,
            nombre: value.nombre,
            descripcion: value.descripcion,
            precio: value.precio,
            activo: value.activo,
            categoria_id: value.categoria_id,
        }
    }
}
