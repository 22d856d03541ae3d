//! Application Configuration
//!
//! Defaults target the same origin that served the page. Build-time
//! overrides: `TODO_API_BASE` and `TODO_RECONCILIATION`.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Collection path on the task service
pub const TODOS_PATH: &str = "/todos";

/// Matches the overlay animation length in styles.css
pub const CELEBRATION_DURATION: Duration = Duration::from_millis(2000);

/// How local state follows a successful mutation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reconciliation {
    /// Append on create, filter on delete
    #[default]
    Optimistic,
    /// Apply the local change, then replace the list with a fresh GET
    RefetchAfterMutation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reconciliation policy `{0}` (expected `optimistic` or `refetch`)")]
pub struct ParseReconciliationError(String);

impl FromStr for Reconciliation {
    type Err = ParseReconciliationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Ok(Reconciliation::Optimistic),
            "refetch" | "refetch-after-mutation" => Ok(Reconciliation::RefetchAfterMutation),
            _ => Err(ParseReconciliationError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("could not read page origin: {0}")]
    Origin(String),
    #[error(transparent)]
    Reconciliation(#[from] ParseReconciliationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Scheme + host (+ optional prefix) of the task service
    pub api_base: String,
    pub celebration_duration: Duration,
    pub reconciliation: Reconciliation,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            celebration_duration: CELEBRATION_DURATION,
            reconciliation: Reconciliation::default(),
        }
    }

    pub fn with_reconciliation(mut self, reconciliation: Reconciliation) -> Self {
        self.reconciliation = reconciliation;
        self
    }

    /// Build from the page origin plus any build-time overrides.
    ///
    /// Each setting falls back on its own: a bad policy keeps the origin, an
    /// unreadable origin keeps the policy. Problems are returned for logging.
    pub fn from_browser() -> (Self, Vec<ConfigError>) {
        let api_base = match option_env!("TODO_API_BASE") {
            Some(base) => Ok(base.to_string()),
            None => page_origin(),
        };
        Self::resolve(api_base, option_env!("TODO_RECONCILIATION"))
    }

    fn resolve(api_base: Result<String, ConfigError>, policy: Option<&str>) -> (Self, Vec<ConfigError>) {
        let mut problems = Vec::new();
        let api_base = api_base.unwrap_or_else(|err| {
            problems.push(err);
            String::new()
        });
        let reconciliation = match policy.map(str::parse::<Reconciliation>) {
            Some(Ok(reconciliation)) => reconciliation,
            Some(Err(err)) => {
                problems.push(err.into());
                Reconciliation::default()
            }
            None => Reconciliation::default(),
        };
        (Self::new(api_base).with_reconciliation(reconciliation), problems)
    }

    /// Absolute URL of the task collection
    pub fn todos_endpoint(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), TODOS_PATH)
    }
}

fn page_origin() -> Result<String, ConfigError> {
    let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
    window
        .location()
        .origin()
        .map_err(|e| ConfigError::Origin(format!("{:?}", e)))
}
