pub mod client_like_state;
pub mod like_service;
