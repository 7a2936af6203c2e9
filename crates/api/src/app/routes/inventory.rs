use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use stockroom_inventory::{InventoryItem, NewItem};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/:id", get(get_item).put(update_item).delete(delete_item))
        .route("/items/:id/quantity", post(adjust_quantity))
        .route("/out-of-stock", get(out_of_stock))
        .route("/low-stock", get(low_stock))
        .route("/stats", get(stats))
        .route("/categories", get(categories))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListItemsQuery>,
) -> axum::response::Response {
    let filter = match query.into_filter() {
        Ok(f) => f,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let items = services.repository().filter(&filter);
    (StatusCode::OK, Json(dto::items_to_json(items))).into_response()
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewItem>,
) -> axum::response::Response {
    match services.repository().add(body) {
        Ok(item) => {
            tracing::info!(item_id = %item.id, "item created");
            (StatusCode::CREATED, Json(dto::ItemResponse::from(item))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.repository().get(id) {
        Some(item) => (StatusCode::OK, Json(dto::ItemResponse::from(item))).into_response(),
        None => errors::not_found(id),
    }
}

/// Full replacement; the path id wins over anything in the body.
pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<NewItem>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let item = InventoryItem::from_new(id, body, Utc::now());
    match services.repository().update(item) {
        Ok(Some(item)) => (StatusCode::OK, Json(dto::ItemResponse::from(item))).into_response(),
        Ok(None) => errors::not_found(id),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    if services.repository().delete(id) {
        tracing::info!(item_id = %id, "item deleted");
        StatusCode::NO_CONTENT.into_response()
    } else {
        errors::not_found(id)
    }
}

pub async fn adjust_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AdjustQuantityRequest>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.repository().adjust_quantity(id, body.quantity) {
        Ok(Some(item)) => (StatusCode::OK, Json(dto::ItemResponse::from(item))).into_response(),
        Ok(None) => errors::not_found(id),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn out_of_stock(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(dto::items_to_json(services.repository().out_of_stock()))
}

pub async fn low_stock(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(dto::items_to_json(services.repository().low_stock()))
}

pub async fn stats(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(services.repository().stats())
}

pub async fn categories(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(services.repository().categories())
}
