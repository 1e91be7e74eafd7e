//! Search controller: connects `/search` to the query echo service

use axum::Json;

use crate::api::dto::search_dto::SearchQuery;
use crate::api::util::extract::AppQuery;
use crate::domain::search::service::{self, SearchResponse};

pub struct SearchController;

impl SearchController {
    pub async fn search(AppQuery(query): AppQuery<SearchQuery>) -> Json<SearchResponse> {
        Json(service::search(query.q.as_deref()))
    }
}
