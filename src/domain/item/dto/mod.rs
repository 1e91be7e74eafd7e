pub mod item_create_request;
