use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

pub const MAX_PROJECT_ID_LEN: usize = 128;

static PROJECT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("project id regex"));

pub fn validate_project_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() || id.len() > MAX_PROJECT_ID_LEN || !PROJECT_ID_RE.is_match(id) {
        return Err(ValidationError::new("project_id").with_message(
            format!("Letters, numbers, '-' and '_'. 1 to {MAX_PROJECT_ID_LEN} characters").into(),
        ));
    }
    Ok(())
}
