//! Injected document API configuration.

use thiserror::Error;
use url::Url;

/// Base URL used when no `DOCUMENT_API_BASE_URL` was provided at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";
/// Rows requested per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Invalid API configuration.
pub enum ConfigError {
    /// The base URL did not parse as an absolute URL.
    #[error("invalid api base url `{raw}`: {reason}")]
    InvalidBaseUrl {
        /// Raw input.
        raw: String,
        /// Parser error text.
        reason: String,
    },
    /// Page size must be positive.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request configuration injected into the HTTP client at startup.
pub struct ApiConfig {
    base_url: Url,
    page_size: u32,
}

impl ApiConfig {
    /// Validates `base_url` and builds a config with the default page size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };
        let base_url = Url::parse(&normalized).map_err(|err| ConfigError::InvalidBaseUrl {
            raw: base_url.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Builds the config from the compile-time `DOCUMENT_API_BASE_URL`, falling back to
    /// [`DEFAULT_API_BASE_URL`] when unset or invalid.
    pub fn from_build_env() -> Self {
        option_env!("DOCUMENT_API_BASE_URL")
            .and_then(|raw| Self::new(raw).ok())
            .unwrap_or_default()
    }

    /// Overrides the page size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPageSize`] for `0`.
    pub fn with_page_size(mut self, page_size: u32) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// Normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Rows per listing page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Resolves an API path such as `/document/list` against the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        let relative = path.trim_start_matches('/');
        match self.base_url.join(relative) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{relative}", self.base_url),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(&format!("{DEFAULT_API_BASE_URL}/"))
                .unwrap_or_else(|_| unreachable!("default api base url is valid")),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
