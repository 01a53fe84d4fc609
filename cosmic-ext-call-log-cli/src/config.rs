//! Inspector Configuration
//!
//! Display settings used when rendering call log rows.

use anyhow::{Context, Result};
use chrono::FixedOffset;
use cosmic_ext_call_log::resources::{DEFAULT_CALL_ARROW_GREEN, DEFAULT_CALL_ARROW_RED};
use cosmic_ext_call_log::{
    BidiFormatter, Color, DefaultResources, DisplayContext, InstalledPluginIcons,
    LocalDateFormatter, ResourceId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Inspector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub colors: ColorConfig,

    /// Known in-call plugins, keyed by flattened component
    #[serde(default)]
    pub plugins: BTreeMap<String, PluginConfig>,
}

/// Display configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Render as inside a right-to-left UI
    #[serde(default)]
    pub rtl_context: bool,

    #[serde(default)]
    pub use_24_hour_clock: bool,

    /// Fixed UTC offset for dates (system offset if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
}

/// Call arrow colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Incoming and outgoing arrows
    #[serde(default = "default_call_arrow_green")]
    pub call_arrow_green: Color,

    /// Missed call arrows
    #[serde(default = "default_call_arrow_red")]
    pub call_arrow_red: Color,
}

/// An installed in-call plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Name shown in the call log
    pub name: String,

    /// Icon resource inside the plugin package
    #[serde(default)]
    pub icon_resource_id: i32,
}

fn default_call_arrow_green() -> Color {
    DEFAULT_CALL_ARROW_GREEN
}

fn default_call_arrow_red() -> Color {
    DEFAULT_CALL_ARROW_RED
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            call_arrow_green: default_call_arrow_green(),
            call_arrow_red: default_call_arrow_red(),
        }
    }
}

impl Config {
    /// Default configuration file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("cosmic")
            .join("cosmic-ext-call-log")
            .join("config.toml")
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Look up a plugin by the flattened component stored in a row
    pub fn plugin(&self, component: &str) -> Option<&PluginConfig> {
        self.plugins.get(component)
    }

    /// Build the display context described by this configuration
    pub fn display_context(&self) -> Result<DisplayContext> {
        let bidi = if self.display.rtl_context {
            BidiFormatter::rtl()
        } else {
            BidiFormatter::ltr()
        };

        let dates = match self.display.utc_offset_minutes {
            Some(minutes) => {
                let offset = minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .with_context(|| {
                        format!("UTC offset of {} minutes is out of range", minutes)
                    })?;
                LocalDateFormatter::with_offset(offset)
            }
            None => LocalDateFormatter::local(),
        }
        .use_24_hour_clock(self.display.use_24_hour_clock);

        let mut plugin_icons = InstalledPluginIcons::new();
        for component in self.plugins.keys() {
            let package = component.split('/').next().unwrap_or(component);
            plugin_icons.install(package);
        }

        Ok(DisplayContext::default()
            .with_bidi(bidi)
            .with_date_formatter(dates)
            .with_plugin_icons(plugin_icons)
            .with_resources(DefaultResources::with_colors(
                self.colors.call_arrow_green,
                self.colors.call_arrow_red,
            )))
    }
}

impl PluginConfig {
    pub fn icon_resource(&self) -> ResourceId {
        ResourceId(self.icon_resource_id)
    }
}
