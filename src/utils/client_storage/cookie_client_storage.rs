use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use tower_cookies::cookie::{time::Duration, SameSite};
use tower_cookies::{Cookie, Cookies};
use tracing::warn;

use crate::interfaces::client_storage::ClientStorageInterface;
use crate::middleware::error::AppResult;

/// Keeps the visitor's values in long lived cookies. Values are base64 so
/// any JSON survives the cookie value grammar.
pub struct CookieClientStorage {
    cookies: Cookies,
    max_age_days: i64,
}

impl CookieClientStorage {
    pub fn new(cookies: Cookies, max_age_days: i64) -> Self {
        Self {
            cookies,
            max_age_days,
        }
    }
}

impl ClientStorageInterface for CookieClientStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let Some(cookie) = self.cookies.get(key) else {
            return Ok(None);
        };
        match URL_SAFE_NO_PAD
            .decode(cookie.value())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
        {
            Some(value) => Ok(Some(value)),
            None => {
                // tampered or foreign cookie, start over
                warn!("->> ignoring undecodable cookie {key}");
                Ok(None)
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let cookie = Cookie::build((key.to_string(), URL_SAFE_NO_PAD.encode(value)))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::days(self.max_age_days))
            .build();
        self.cookies.add(cookie);
        Ok(())
    }
}
