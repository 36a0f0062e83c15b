pub mod api;
pub mod config;
pub mod db_error;
pub mod patch;
pub mod slug;
pub mod soft_delete;
pub mod unique_code;
