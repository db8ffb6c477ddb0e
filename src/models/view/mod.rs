pub mod like_button;
pub mod likes;
