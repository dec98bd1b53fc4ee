use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bson::{oid::ObjectId, Document};
use tracing::instrument;

use crate::auth::dto::MsgResponse;
use crate::auth::jwt::AuthUser;
use crate::error::ApiError;
use crate::guard::Writable;
use crate::receipts::cuisine::Cuisine;
use crate::receipts::dto::{
    split_ingredients, CreateReceiptRequest, ReceiptOut, UpdateReceiptRequest,
};
use crate::receipts::repo::Receipt;
use crate::state::AppState;

const DASHBOARD_LIMIT: i64 = 10;

#[instrument(skip(state, payload))]
pub async fn create_receipt(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    _: Writable,
    Json(payload): Json<CreateReceiptRequest>,
) -> Result<(StatusCode, Json<MsgResponse>), ApiError> {
    let (name, cuisine, ingredients, youtube_link) = match (
        payload.name,
        payload.cuisine,
        payload.ingredients,
        payload.youtube_link,
    ) {
        (Some(n), Some(c), Some(i), Some(y)) => (n, c, i, y),
        _ => return Err(ApiError::InvalidInput("Missing fields".into())),
    };

    let cuisine: Cuisine = cuisine
        .parse()
        .map_err(|_| ApiError::InvalidInput("Invalid cuisine".into()))?;

    Receipt::create(
        &state.db,
        user_id,
        name,
        cuisine,
        split_ingredients(&ingredients),
        youtube_link,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(MsgResponse {
            msg: "Receipt created",
        }),
    ))
}

/// Last 10 receipts for the acting user, newest first.
#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ReceiptOut>>, ApiError> {
    let receipts = Receipt::list_recent(&state.db, user_id, DASHBOARD_LIMIT).await?;
    let items = receipts
        .into_iter()
        .map(|r| ReceiptOut {
            id: r.id.to_hex(),
            name: r.name,
            cuisine: r.cuisine,
            ingredients: r.ingredients,
            youtube_link: r.youtube_link,
            created_at: r.created_at.to_time_0_3(),
        })
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
pub async fn update_receipt(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    _: Writable,
    Path(receipt_id): Path<String>,
    Json(payload): Json<UpdateReceiptRequest>,
) -> Result<Json<MsgResponse>, ApiError> {
    let receipt_id = parse_receipt_id(&receipt_id)?;

    let mut updates = Document::new();
    if let Some(name) = payload.name {
        updates.insert("name", name);
    }
    if let Some(cuisine) = payload.cuisine {
        let cuisine: Cuisine = cuisine
            .parse()
            .map_err(|_| ApiError::InvalidInput("Invalid cuisine".into()))?;
        updates.insert("cuisine", cuisine.to_string());
    }
    if let Some(ingredients) = payload.ingredients {
        updates.insert("ingredients", split_ingredients(&ingredients));
    }
    if let Some(youtube_link) = payload.youtube_link {
        updates.insert("youtube_link", youtube_link);
    }

    Receipt::update(&state.db, user_id, receipt_id, updates).await?;

    Ok(Json(MsgResponse {
        msg: "Receipt updated",
    }))
}

#[instrument(skip(state))]
pub async fn delete_receipt(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    _: Writable,
    Path(receipt_id): Path<String>,
) -> Result<Json<MsgResponse>, ApiError> {
    let receipt_id = parse_receipt_id(&receipt_id)?;
    Receipt::delete(&state.db, user_id, receipt_id).await?;
    Ok(Json(MsgResponse {
        msg: "Receipt deleted",
    }))
}

// An id that cannot exist is indistinguishable from one that does not.
fn parse_receipt_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::NotFound("Receipt not found".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn malformed_id_is_not_found() {
        let err = parse_receipt_id("not-an-object-id").unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(parse_receipt_id(&ObjectId::new().to_hex()).is_ok());
    }

    #[test]
    fn receipt_out_serializes_expected_shape() {
        let out = ReceiptOut {
            id: "0123456789abcdef01234567".into(),
            name: "Margherita Pizza".into(),
            cuisine: "Italian".into(),
            ingredients: vec!["cheese".into(), "tomato".into(), "basil".into()],
            youtube_link: "https://youtube.com/watch?v=pizza".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["id"], "0123456789abcdef01234567");
        assert_eq!(json["cuisine"], "Italian");
        assert_eq!(json["ingredients"][1], "tomato");
        assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
    }
}
