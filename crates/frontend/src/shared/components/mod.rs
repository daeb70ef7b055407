pub mod pagination_controls;
pub mod search_input;
