//! Error types for configuration loading and region layout.

/// Errors produced while loading or validating a [`DrawerConfig`](crate::config::DrawerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse drawer config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors produced while computing drawer regions.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("region layout failed: {0}")]
    Taffy(String),
}
