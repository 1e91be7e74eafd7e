use serde::{Deserialize, Serialize};

/// Item payload for `POST /items`. Type checks happen during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCreateRequest {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}
