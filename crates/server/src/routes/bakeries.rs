use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::bakery::domain::{Bakery, NewBakery};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(get, path = "/api/bakeries", tag = "bakeries", responses((status = 200, description = "OK", body = [crate::openapi::BakeryDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Bakery>>, JsonApiError> {
    Ok(Json(state.bakeries.list().await?))
}

#[utoipa::path(
    get, path = "/api/bakeries/{id}", tag = "bakeries",
    params(("id" = i32, Path, description = "Bakery ID")),
    responses((status = 200, description = "OK", body = crate::openapi::BakeryDoc), (status = 404, description = "Not Found"))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Bakery>, JsonApiError> {
    Ok(Json(state.bakeries.get(id).await?))
}

#[utoipa::path(
    post, path = "/api/bakeries", tag = "bakeries",
    request_body = crate::openapi::NewBakeryDoc,
    responses((status = 201, description = "Created", body = crate::openapi::BakeryDoc), (status = 400, description = "Validation Error"))
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewBakery>,
) -> Result<(StatusCode, Json<Bakery>), JsonApiError> {
    let created = state.bakeries.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
