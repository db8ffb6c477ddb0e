pub mod cookie_client_storage;
pub mod file_client_storage;
pub mod memory_client_storage;
