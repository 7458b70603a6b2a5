use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductoResponse {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub activo: bool,
    pub categoria_id: i32,
}
