use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, models::NewOrder};

// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> Response {
    // Undecodable body never reaches the store.
    let Json(input) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response();
        }
    };

    let order = state.store.create(input);
    tracing::debug!(id = order.id, product = %order.product, "order created");

    (StatusCode::CREATED, Json(order)).into_response()
}

// GET /orders
pub async fn get_orders(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.store.list())).into_response()
}
