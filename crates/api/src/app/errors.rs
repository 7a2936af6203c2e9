use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;
use stockroom_inventory::ItemId;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let (status, code) = match &err {
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        DomainError::InvariantViolation(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation")
        }
    };
    json_error(status, code, err.detail())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn not_found(id: ItemId) -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", format!("item {id} not found"))
}

pub fn parse_item_id(s: &str) -> Result<ItemId, axum::response::Response> {
    s.parse::<u64>().map(ItemId::new).map_err(|_| {
        json_error(StatusCode::BAD_REQUEST, "invalid_id", "item id must be a positive integer")
    })
}
