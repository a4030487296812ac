// src/config/target.rs
use std::fmt;
use url::Url;

use super::ConfigError;

/// Prepend `http://` unless the site already starts with `http://` or `https://`.
pub fn normalize_scheme(site: &str) -> String {
    if site.starts_with("http://") || site.starts_with("https://") {
        site.to_string()
    } else {
        format!("http://{}", site)
    }
}

/// The site being checked. Displays as the normalized string the user gave,
/// without the trailing slash `Url` would add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    site: String,
    url: Url,
}

impl Target {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let site = normalize_scheme(raw);
        let url = Url::parse(&site).map_err(|source| ConfigError::InvalidSite {
            site: site.clone(),
            source,
        })?;
        Ok(Self { site, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        &self.site
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.site)
    }
}
