pub mod client_storage;
pub mod validate_utils;
