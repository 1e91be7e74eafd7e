//! User controller: connects `/users/{user_id}/posts` to the post listing

use axum::Json;

use crate::api::dto::user_dto::{UserPath, UserPostsQuery};
use crate::api::util::extract::{AppPath, ValidatedQuery};
use crate::domain::user::service::{self, UserPostsResponse};

pub struct UserController;

impl UserController {
    pub async fn list_user_posts(
        AppPath(path): AppPath<UserPath>,
        ValidatedQuery(query): ValidatedQuery<UserPostsQuery>,
    ) -> Json<UserPostsResponse> {
        Json(service::list_user_posts(path.user_id, query.limit))
    }
}
