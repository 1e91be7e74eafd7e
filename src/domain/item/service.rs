use serde::Serialize;

use crate::domain::item::dto::item_create_request::ItemCreateRequest;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemCreatedResponse {
    pub message: &'static str,
    pub item: ItemCreateRequest,
}

/// Nothing is stored; the validated item is echoed back.
pub fn create_item(item: ItemCreateRequest) -> ItemCreatedResponse {
    tracing::debug!(name = %item.name, price = item.price, "item accepted");
    ItemCreatedResponse {
        message: "Item created successfully",
        item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn echoes_item_with_null_description() {
        let payload: ItemCreateRequest =
            serde_json::from_value(json!({ "name": "Widget", "price": 9.99 })).unwrap();

        let body = serde_json::to_value(create_item(payload)).unwrap();

        assert_eq!(
            body,
            json!({
                "message": "Item created successfully",
                "item": { "name": "Widget", "price": 9.99, "description": null }
            })
        );
    }

    #[test]
    fn integer_price_is_accepted() {
        let payload: ItemCreateRequest =
            serde_json::from_value(json!({ "name": "Bolt", "price": 3, "description": "steel" }))
                .unwrap();

        assert_eq!(payload.price, 3.0);
        assert_eq!(payload.description.as_deref(), Some("steel"));
    }

    #[test]
    fn missing_or_mistyped_fields_fail_to_parse() {
        assert!(serde_json::from_value::<ItemCreateRequest>(json!({ "price": 1.0 })).is_err());
        assert!(serde_json::from_value::<ItemCreateRequest>(json!({ "name": "x" })).is_err());
        assert!(
            serde_json::from_value::<ItemCreateRequest>(json!({ "name": "x", "price": "cheap" }))
                .is_err()
        );
    }
}
