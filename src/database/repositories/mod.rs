pub mod like_counter;
