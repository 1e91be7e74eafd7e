use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPostsResponse {
    pub user_id: i64,
    pub posts: Vec<String>,
}

/// Titles run over `1..limit`, exclusive of `limit`: `limit = 10` gives nine
/// posts and any `limit <= 1` gives none.
pub fn list_user_posts(user_id: i64, limit: i64) -> UserPostsResponse {
    let posts = (1..limit).map(|i| format!("Post {i}")).collect();
    UserPostsResponse { user_id, posts }
}
