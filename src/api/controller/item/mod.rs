//! Item controller: decodes and echoes `POST /items` payloads

use axum::Json;

use crate::api::util::extract::AppJson;
use crate::domain::item::dto::item_create_request::ItemCreateRequest;
use crate::domain::item::service::{self, ItemCreatedResponse};

pub struct ItemController;

impl ItemController {
    pub async fn create_item(
        AppJson(payload): AppJson<ItemCreateRequest>,
    ) -> Json<ItemCreatedResponse> {
        Json(service::create_item(payload))
    }
}
