use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientDoc {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bakery_id: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDoc {
    pub id: Option<i32>,
    pub name: String,
    pub stock: i32,
    pub bakery_ids: Vec<i32>,
}

#[derive(ToSchema)]
pub struct StockDeltaDoc { pub delta: i32 }

#[derive(ToSchema)]
pub struct BakeryDoc { pub id: i32, pub name: String, pub address: String }

#[derive(ToSchema)]
pub struct NewBakeryDoc { pub name: String, pub address: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clients::list,
        crate::routes::clients::get,
        crate::routes::clients::create,
        crate::routes::clients::import,
        crate::routes::clients::update,
        crate::routes::clients::delete,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::products::delete,
        crate::routes::products::update_stock,
        crate::routes::bakeries::list,
        crate::routes::bakeries::get,
        crate::routes::bakeries::create,
    ),
    components(
        schemas(
            HealthResponse,
            ClientDoc,
            ProductDoc,
            StockDeltaDoc,
            BakeryDoc,
            NewBakeryDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "clients"),
        (name = "products"),
        (name = "bakeries")
    )
)]
pub struct ApiDoc;
