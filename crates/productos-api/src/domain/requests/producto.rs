use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Keys bind in camelCase or PascalCase, so `codigo` and `Codigo` are both accepted.

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductoRequest {
    #[serde(alias = "Codigo")]
    #[schema(example = "P1")]
    pub codigo: String,

    #[serde(alias = "Nombre")]
    #[schema(example = "Widget")]
    pub nombre: String,

    #[serde(alias = "Descripcion")]
    #[schema(example = "Widget de prueba")]
    pub descripcion: String,

    #[serde(alias = "Precio")]
    #[schema(example = 9.99)]
    pub precio: f64,

    #[serde(alias = "Activo")]
    #[schema(example = true)]
    pub activo: bool,

    #[serde(alias = "CategoriaId")]
    #[schema(example = 3)]
    pub categoria_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductoRequest {
    #[serde(alias = "Codigo")]
    pub codigo: String,

    #[serde(alias = "Nombre")]
    pub nombre: String,

    #[serde(alias = "Descripcion")]
    pub descripcion: String,

    #[serde(alias = "Precio")]
    pub precio: f64,

    #[serde(alias = "Activo")]
    pub activo: bool,

    #[serde(alias = "CategoriaId")]
    pub categoria_id: i32,
}

/// Partial update: only the fields present in the body are meant to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchProductoRequest {
    #[serde(default, alias = "Codigo")]
    pub codigo: Option<String>,

    #[serde(default, alias = "Nombre")]
    pub nombre: Option<String>,

    #[serde(default, alias = "Descripcion")]
    pub descripcion: Option<String>,

    #[serde(default, alias = "Precio")]
    pub precio: Option<f64>,

    #[serde(default, alias = "Activo")]
    pub activo: Option<bool>,

    #[serde(default, alias = "CategoriaId")]
    pub categoria_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_binds_pascal_case_keys() {
        let body = r#"{"Codigo":"P1","Nombre":"Widget","Descripcion":"d","Precio":9.99,"Activo":true,"CategoriaId":3}"#;
        let req: CreateProductoRequest = serde_json::from_str(body).unwrap();

        assert_eq!(req.codigo, "P1");
        assert_eq!(req.nombre, "Widget");
        assert_eq!(req.descripcion, "d");
        assert_eq!(req.precio, 9.99);
        assert!(req.activo);
        assert_eq!(req.categoria_id, 3);
    }

    #[test]
    fn create_request_binds_camel_case_keys() {
        let body = r#"{"codigo":"P2","nombre":"Gadget","descripcion":"","precio":1.5,"activo":false,"categoriaId":7}"#;
        let req: CreateProductoRequest = serde_json::from_str(body).unwrap();

        assert_eq!(req.codigo, "P2");
        assert!(!req.activo);
        assert_eq!(req.categoria_id, 7);
    }

    #[test]
    fn patch_request_leaves_missing_fields_empty() {
        let req: PatchProductoRequest = serde_json::from_str(r#"{"Precio":12.5}"#).unwrap();

        assert_eq!(req.precio, Some(12.5));
        assert!(req.codigo.is_none());
        assert!(req.categoria_id.is_none());
    }
}
