pub mod client_storage;
pub mod repositories;
