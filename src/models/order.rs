use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub product: String,
    pub quantity: i64,
    pub price: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Creation payload. The id and timestamp are assigned by the store, so a
/// client-supplied `id` in the request body is ignored on decode.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    pub product: String,
    pub quantity: i64,
    pub price: f64,
}
