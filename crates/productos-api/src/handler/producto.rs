use crate::{
    abstract_trait::producto::{DynProductoCommandHandler, DynProductoQueryHandler},
    domain::{
        messages::producto::GetProductoByIdQuery,
        requests::producto::{CreateProductoRequest, PatchProductoRequest, UpdateProductoRequest},
        response::producto::ProductoResponse,
    },
    middleware::{json::JsonBody, route_id::RouteId},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/v1/api/productos",
    tag = "Producto",
    responses(
        (status = 200, description = "List of productos", body = Vec<ProductoResponse>),
        (status = 204, description = "No productos"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_productos() -> StatusCode {
    StatusCode::OK
}

#[utoipa::path(
    get,
    path = "/v1/api/productos/{id}",
    tag = "Producto",
    params(("id" = i32, Path, description = "Producto ID")),
    responses(
        (status = 200, description = "Producto details", body = ProductoResponse),
        (status = 404, description = "Producto not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_producto_by_id(
    Extension(query_handler): Extension<DynProductoQueryHandler>,
    RouteId(id): RouteId,
) -> Result<Response, HttpError> {
    info!(producto_id = id, "Fetching producto by id");

    let result = query_handler
        .get_producto_by_id(GetProductoByIdQuery::new(id))
        .await?;

    match result {
        Some(producto) => Ok((StatusCode::OK, Json(producto)).into_response()),
        None => {
            warn!(producto_id = id, "Producto not found");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

#[utoipa::path(
    post,
    path = "/v1/api/productos",
    tag = "Producto",
    request_body = CreateProductoRequest,
    responses(
        (status = 201, description = "Producto created", body = ProductoResponse),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_producto(
    Extension(command_handler): Extension<DynProductoCommandHandler>,
    JsonBody(body): JsonBody<CreateProductoRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let created = command_handler.create_producto(body.into()).await?;
    Ok((StatusCode::CREATED, [(LOCATION, "")], Json(created)))
}

#[utoipa::path(
    put,
    path = "/v1/api/productos/{id}",
    tag = "Producto",
    params(("id" = i32, Path, description = "Producto ID")),
    request_body = UpdateProductoRequest,
    responses(
        (status = 200, description = "Producto updated", body = ProductoResponse),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Producto not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_producto(
    RouteId(_id): RouteId,
    JsonBody(_body): JsonBody<UpdateProductoRequest>,
) -> StatusCode {
    StatusCode::OK
}

#[utoipa::path(
    patch,
    path = "/v1/api/productos/{id}",
    tag = "Producto",
    params(("id" = i32, Path, description = "Producto ID")),
    request_body = PatchProductoRequest,
    responses(
        (status = 200, description = "Producto partially updated", body = ProductoResponse),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Producto not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn patch_producto(
    RouteId(_id): RouteId,
    JsonBody(_body): JsonBody<PatchProductoRequest>,
) -> StatusCode {
    StatusCode::OK
}

#[utoipa::path(
    delete,
    path = "/v1/api/productos/{id}",
    tag = "Producto",
    params(("id" = i32, Path, description = "Producto ID")),
    responses(
        (status = 204, description = "Producto deleted"),
        (status = 404, description = "Producto not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_producto(RouteId(_id): RouteId) -> StatusCode {
    StatusCode::NO_CONTENT
}

pub fn producto_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/v1/api/productos",
            get(get_productos).post(create_producto),
        )
        .route(
            "/v1/api/productos/{id}",
            get(get_producto_by_id)
                .put(update_producto)
                .patch(patch_producto)
                .delete(delete_producto),
        )
        .layer(Extension(app_state.di_container.producto_query.clone()))
        .layer(Extension(app_state.di_container.producto_command.clone()))
}
