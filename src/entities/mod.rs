pub mod client_like_record;
pub mod like_counter;
