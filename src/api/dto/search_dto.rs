use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    pub q: Option<String>,
}
