//! Drawer configuration: builder methods, TOML loading, validation.

use serde::Deserialize;

use crate::error::ConfigError;

/// Width at or below which the layout collapses into a modal drawer.
pub const DEFAULT_COLLAPSE_THRESHOLD: u32 = 600;
pub const DEFAULT_SIDEBAR_WIDTH: u32 = 360;
pub const DEFAULT_TOP_BAR_HEIGHT: u32 = 64;
pub const DEFAULT_SCROLL_DURATION_MS: u32 = 300;

// ---------------------------------------------------------------------------
// InertWritePolicy
// ---------------------------------------------------------------------------

/// When derived inert flags are written into the shared signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InertWritePolicy {
    /// Write only when the value differs from what the signal holds.
    #[default]
    OnChange,
    /// Write on every derivation, even if unchanged.
    Always,
}

// ---------------------------------------------------------------------------
// DrawerConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`DrawerLayout`](crate::drawer::DrawerLayout).
///
/// All lengths share the unit of the viewport width source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrawerConfig {
    /// Widths `<=` this value classify as collapsible.
    pub collapse_threshold: u32,
    pub sidebar_width: u32,
    pub top_bar_height: u32,
    pub inert_writes: InertWritePolicy,
    /// Treat Escape like a scrim click while the drawer is modal.
    pub dismiss_on_escape: bool,
    /// Length of a scroll-director animation.
    pub scroll_duration_ms: u32,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            collapse_threshold: DEFAULT_COLLAPSE_THRESHOLD,
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            top_bar_height: DEFAULT_TOP_BAR_HEIGHT,
            inert_writes: InertWritePolicy::OnChange,
            dismiss_on_escape: true,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
        }
    }
}

impl DrawerConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it.
    ///
    /// Missing keys take their default values; unknown keys are rejected.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: DrawerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collapse_threshold == 0 {
            return Err(ConfigError::Invalid {
                field: "collapse_threshold",
                reason: "must be greater than zero".into(),
            });
        }
        if self.sidebar_width == 0 {
            return Err(ConfigError::Invalid {
                field: "sidebar_width",
                reason: "must be greater than zero".into(),
            });
        }
        if self.scroll_duration_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "scroll_duration_ms",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Set the collapse threshold (builder).
    pub fn with_collapse_threshold(mut self, threshold: u32) -> Self {
        self.collapse_threshold = threshold;
        self
    }

    /// Set the sidebar width (builder).
    pub fn with_sidebar_width(mut self, width: u32) -> Self {
        self.sidebar_width = width;
        self
    }

    /// Set the top bar height (builder).
    pub fn with_top_bar_height(mut self, height: u32) -> Self {
        self.top_bar_height = height;
        self
    }

    /// Set the inert write policy (builder).
    pub fn with_inert_writes(mut self, policy: InertWritePolicy) -> Self {
        self.inert_writes = policy;
        self
    }

    /// Enable or disable Escape dismissal (builder).
    pub fn with_dismiss_on_escape(mut self, enabled: bool) -> Self {
        self.dismiss_on_escape = enabled;
        self
    }

    /// Set the scroll animation length (builder).
    pub fn with_scroll_duration_ms(mut self, ms: u32) -> Self {
        self.scroll_duration_ms = ms;
        self
    }
}
