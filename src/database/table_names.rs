pub const LIKE_COUNTER_TABLE_NAME: &'static str = "project_like";
