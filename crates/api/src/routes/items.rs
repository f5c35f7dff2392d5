//! Catalog item routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::AppState;
use crate::routes::{internal_error, invalid_action};
use podryad_db::ItemRepository;
use podryad_db::entities::{items, sea_orm_active_enums::ItemType};
use podryad_shared::format_amount_or_zero;

/// Creates the items routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/items", get(get_items))
}

/// Query parameters for the items endpoint.
#[derive(Debug, Deserialize)]
pub struct ItemsQuery {
    /// Which read to perform.
    pub action: Option<String>,
}

/// Catalog item row. The default price is serialized as a string so the
/// decimal survives JSON exactly.
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    /// Item id.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Material or service.
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Unit of measure.
    pub unit: String,
    /// Default price per unit; "0.00" when unset.
    pub default_price: String,
}

impl From<items::Model> for ItemResponse {
    fn from(item: items::Model) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            item_type: item.item_type,
            unit: item.unit,
            default_price: format_amount_or_zero(item.default_price),
        }
    }
}

/// GET /items?action=items - catalog ordered by type, then name.
async fn get_items(
    State(state): State<AppState>,
    Query(query): Query<ItemsQuery>,
) -> impl IntoResponse {
    if query.action.as_deref() != Some("items") {
        return invalid_action();
    }

    let repo = ItemRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(rows) => {
            let body: Vec<ItemResponse> = rows.into_iter().map(ItemResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to query items");
            internal_error()
        }
    }
}
