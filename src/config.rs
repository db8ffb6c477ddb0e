use dotenvy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_namespace: String,
    pub db_database: String,
    pub db_password: Option<String>,
    pub db_username: Option<String>,
    pub db_url: String,
    pub port: u16,
    pub like_tx_retries: u8,
    pub liked_cookie_max_age_days: i64,
    pub allowed_origin: Option<String>,
    pub sentry_project_link: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let db_namespace = std::env::var("DB_NAMESPACE").unwrap_or("portfolio".to_string());
        let db_database = std::env::var("DB_DATABASE").unwrap_or("likes".to_string());
        let db_password = std::env::var("DB_PASSWORD").ok();
        let db_username = std::env::var("DB_USERNAME").ok();
        let db_url = std::env::var("DB_URL").unwrap_or("mem://".to_string());

        let port = std::env::var("PORT").map_or(8080, |p| {
            p.parse::<u16>().expect("PORT must be a port number")
        });

        let like_tx_retries = std::env::var("LIKE_TX_RETRIES").map_or(5, |t| {
            t.parse::<u8>().expect("LIKE_TX_RETRIES must be number")
        });

        let liked_cookie_max_age_days = std::env::var("LIKED_COOKIE_MAX_AGE_DAYS")
            .map_or(365, |t| {
                t.parse::<i64>()
                    .expect("LIKED_COOKIE_MAX_AGE_DAYS must be number")
            });

        let allowed_origin = std::env::var("ALLOWED_ORIGIN")
            .ok()
            .filter(|v| !v.is_empty());

        let sentry_project_link = std::env::var("SENTRY_PROJECT_LINK").ok();

        Self {
            db_namespace,
            db_database,
            db_password,
            db_username,
            db_url,
            port,
            like_tx_retries,
            liked_cookie_max_age_days,
            allowed_origin,
            sentry_project_link,
        }
    }
}
