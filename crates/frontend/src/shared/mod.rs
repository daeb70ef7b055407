pub mod api;
pub mod components;
pub mod date_utils;
pub mod dialog;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod notify;
pub mod page;
pub mod render;
pub mod storage;
pub mod widgets;
