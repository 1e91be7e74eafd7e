use serde::Deserialize;
use validator::Validate;

/// Largest `limit` accepted by `/users/{user_id}/posts`; the post list is built
/// in memory, so larger values are rejected with a 422.
pub const MAX_POSTS_LIMIT: i64 = 1000;

#[derive(Deserialize, Debug)]
pub struct UserPath {
    pub user_id: i64,
}

#[derive(Deserialize, Debug, Validate)]
pub struct UserPostsQuery {
    #[serde(default = "default_limit")]
    #[validate(range(max = MAX_POSTS_LIMIT))]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}
