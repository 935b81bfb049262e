//! Cookie Management Infrastructure
//!
//! `Set-Cookie` builders for the cookies this application writes.
//! Reading cookies is done with `axum_extra::extract::CookieJar`.

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }
}

impl CookieConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build a `Set-Cookie` value. `max_age_secs: None` makes a browser-session cookie.
    pub fn build_set_cookie(&self, value: &str, max_age_secs: Option<i64>) -> String {
        let mut parts = vec![format!("{}={}", self.name, value)];
        parts.extend(self.attributes());

        if let Some(max_age) = max_age_secs {
            parts.push(format!("Max-Age={}", max_age.max(0)));
        }

        parts.join("; ")
    }

    /// Build a `Set-Cookie` value that expires the cookie immediately
    ///
    /// Carries the same attributes as [`Self::build_set_cookie`] so the
    /// browser replaces the stored cookie.
    pub fn build_delete_cookie(&self) -> String {
        let mut parts = vec![format!("{}=", self.name)];
        parts.extend(self.attributes());
        parts.push("Max-Age=0".to_string());
        parts.push("Expires=Thu, 01 Jan 1970 00:00:00 GMT".to_string());
        parts.join("; ")
    }

    fn attributes(&self) -> Vec<String> {
        let mut attrs = Vec::with_capacity(4);
        if self.http_only {
            attrs.push("HttpOnly".to_string());
        }
        if self.secure {
            attrs.push("Secure".to_string());
        }
        attrs.push(format!("SameSite={}", self.same_site.as_str()));
        attrs.push(format!("Path={}", self.path));
        attrs
    }
}
