use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service::client::domain::ClientDto;
use service::directory::DirectorySync;

use super::DIRECTORY_SYNC_HEADER;
use crate::{errors::JsonApiError, state::ServerState};

fn sync_header(sync: &DirectorySync) -> [(&'static str, &'static str); 1] {
    [(DIRECTORY_SYNC_HEADER, sync.as_str())]
}

#[utoipa::path(
    get, path = "/api/clients", tag = "clients",
    responses((status = 200, description = "Local clients followed by directory clients", body = [crate::openapi::ClientDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ClientDto>>, JsonApiError> {
    Ok(Json(state.clients.list_all().await?))
}

#[utoipa::path(
    get, path = "/api/clients/{id}", tag = "clients",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ClientDoc),
        (status = 404, description = "Not found locally or in directory")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<ClientDto>, JsonApiError> {
    Ok(Json(state.clients.get_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/api/clients", tag = "clients",
    request_body = crate::openapi::ClientDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ClientDoc),
        (status = 422, description = "Unknown bakery")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ClientDto>,
) -> Result<(StatusCode, Json<ClientDto>), JsonApiError> {
    let created = state.clients.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    post, path = "/api/clients/import/{id}", tag = "clients",
    params(("id" = i32, Path, description = "Directory user ID")),
    responses(
        (status = 201, description = "Imported", body = crate::openapi::ClientDoc),
        (status = 404, description = "Not in directory"),
        (status = 422, description = "Unknown bakery"),
        (status = 502, description = "Directory unavailable")
    )
)]
pub async fn import(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<(StatusCode, Json<ClientDto>), JsonApiError> {
    let imported = state.clients.import_from_directory(id).await?;
    Ok((StatusCode::CREATED, Json(imported)))
}

#[utoipa::path(
    put, path = "/api/clients/{id}", tag = "clients",
    params(("id" = i32, Path, description = "Client ID")),
    request_body = crate::openapi::ClientDoc,
    responses(
        (status = 200, description = "Updated; x-directory-sync reports the directory push", body = crate::openapi::ClientDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Unknown bakery")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<ClientDto>,
) -> Result<impl IntoResponse, JsonApiError> {
    let out = state.clients.update(id, input).await?;
    Ok((sync_header(&out.directory), Json(out.local)))
}

#[utoipa::path(
    delete, path = "/api/clients/{id}", tag = "clients",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Deleted; x-directory-sync reports the directory push"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<impl IntoResponse, JsonApiError> {
    let out = state.clients.delete(id).await?;
    Ok((StatusCode::NO_CONTENT, sync_header(&out.directory)))
}
