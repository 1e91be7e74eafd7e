use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    pub results: String,
}

/// An empty query string is treated the same as no query at all.
pub fn search(q: Option<&str>) -> SearchResponse {
    let results = match q {
        Some(q) if !q.is_empty() => format!("Results for query: {q}"),
        _ => "No query provided".to_string(),
    };
    SearchResponse { results }
}
