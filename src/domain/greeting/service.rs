use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn hello() -> MessageResponse {
    MessageResponse {
        message: "Hello, World!".to_string(),
    }
}

pub fn health() -> HealthResponse {
    HealthResponse { status: "healthy" }
}

pub fn greet(name: &str) -> MessageResponse {
    MessageResponse {
        message: format!("Hello, {name}!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_interpolates_name_verbatim() {
        for name in ["Ada", "", "O'Brien", "名前", "a b c"] {
            assert_eq!(greet(name).message, format!("Hello, {name}!"));
        }
    }

    #[test]
    fn static_bodies() {
        assert_eq!(hello().message, "Hello, World!");
        assert_eq!(health().status, "healthy");
    }
}
