//! Application Configuration
//!
//! Configuration for the Auth application layer.

use platform::client::UpstreamConfig;
use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

const IDENTITY_BASE: &str = "https://gw.jabama.com/api/v4/account";
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Identity provider endpoint and the static headers it expects
    pub identity: UpstreamConfig,
    /// Cookie carrying the access token
    pub token_cookie: CookieConfig,
    /// Cookie carrying the signed-in mobile number
    pub user_cookie: CookieConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        let identity = UpstreamConfig::new(IDENTITY_BASE)
            .with_header("Accept", "*/*")
            .with_header("Accept-Language", "en-US,en;q=0.9,fa-IR;q=0.8,fa;q=0.7")
            .with_header("Content-Type", "application/json")
            .with_header("Origin", "https://www.jabama.com")
            .with_header("Referer", "https://www.jabama.com/")
            .with_header("User-Agent", USER_AGENT)
            .with_header("X-Server-Side", "false")
            .with_header("X-Web", "true");

        Self {
            identity,
            token_cookie: CookieConfig {
                same_site: SameSite::Strict,
                ..CookieConfig::named("auth_token")
            },
            // Readable by the front end to show who is signed in
            user_cookie: CookieConfig {
                same_site: SameSite::Strict,
                http_only: false,
                ..CookieConfig::named("auth_user")
            },
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        let mut config = Self::default();
        config.token_cookie.secure = false;
        config.user_cookie.secure = false;
        config
    }

    pub fn with_identity_base(mut self, base_url: &str) -> Self {
        self.identity = self.identity.with_base_url(base_url);
        self
    }
}
