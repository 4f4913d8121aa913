use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use service::product::domain::ProductDto;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize)]
pub struct StockDelta {
    pub delta: i32,
}

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    responses(
        (status = 200, description = "All products by ascending id", body = [crate::openapi::ProductDoc]),
        (status = 404, description = "No products")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ProductDto>>, JsonApiError> {
    Ok(Json(state.products.list_all().await?))
}

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses((status = 200, description = "OK", body = crate::openapi::ProductDoc), (status = 404, description = "Not Found"))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<ProductDto>, JsonApiError> {
    Ok(Json(state.products.get_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductDoc,
    responses(
        (status = 201, description = "Created; unknown bakery ids are dropped", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ProductDto>,
) -> Result<(StatusCode, Json<ProductDto>), JsonApiError> {
    let created = state.products.save(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete, path = "/api/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch, path = "/api/products/{id}/stock", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = crate::openapi::StockDeltaDoc,
    responses(
        (status = 200, description = "Stock updated", body = crate::openapi::ProductDoc),
        (status = 400, description = "Stock overflow"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_stock(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<StockDelta>,
) -> Result<Json<ProductDto>, JsonApiError> {
    Ok(Json(state.products.update_stock(id, input.delta).await?))
}
