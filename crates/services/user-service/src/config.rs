//! User service configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

/// How list requests apply `page`/`limit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListMode {
    /// Return every record; pagination metadata is informational only
    #[default]
    Literal,
    /// Return only the records on the requested page
    Sliced,
}

impl FromStr for ListMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(ListMode::Literal),
            "sliced" => Ok(ListMode::Sliced),
            other => Err(format!("unknown list mode '{other}' (expected 'literal' or 'sliced')")),
        }
    }
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListMode::Literal => write!(f, "literal"),
            ListMode::Sliced => write!(f, "sliced"),
        }
    }
}

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Pagination behaviour for list requests
    pub list_mode: ListMode,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            list_mode: list_mode_or_default(env::var("USER_LIST_MODE").ok().as_deref()),
        }
    }
}

/// Parse a configured list mode, warning and falling back to literal on
/// anything unrecognized.
pub fn list_mode_or_default(raw: Option<&str>) -> ListMode {
    match raw.map(str::parse::<ListMode>) {
        Some(Ok(mode)) => mode,
        Some(Err(e)) => {
            tracing::warn!("{}; falling back to literal", e);
            ListMode::Literal
        }
        None => ListMode::Literal,
    }
}
