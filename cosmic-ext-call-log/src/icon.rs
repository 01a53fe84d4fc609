//! Icons handed to the rendering layer
//!
//! Icons are descriptions, not pixels: a resource to draw, a rotation and
//! an optional color filter. The view layer decides how to rasterize them.

use crate::component::ComponentName;
use crate::{CallLogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a drawable resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub i32);

impl ResourceId {
    /// Generic phone handset icon
    pub const PHONE: ResourceId = ResourceId(0x7f02_0087);

    /// Call direction arrow, pointing towards the user
    pub const CALL_ARROW: ResourceId = ResourceId(0x7f02_0052);
}

/// ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Parse `#RRGGBB` or `#AARRGGBB`
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CallLogError::configuration(format!(
                "invalid color '{}': expected hex digits",
                s
            )));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|e| CallLogError::configuration(format!("invalid color '{}': {}", s, e)))?;
        match hex.len() {
            6 => Ok(Color(0xff00_0000 | value)),
            8 => Ok(Color(value)),
            _ => Err(CallLogError::configuration(format!(
                "invalid color '{}': expected #RRGGBB or #AARRGGBB",
                s
            ))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// How a color filter combines with the icon pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    Multiply,
}

/// Color filter applied on top of an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFilter {
    pub color: Color,
    pub mode: BlendMode,
}

/// Where the icon artwork comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum IconSource {
    /// Drawable bundled with the application
    Resource { id: ResourceId },
    /// Drawable loaded from an in-call plugin package
    Plugin {
        component: ComponentName,
        id: ResourceId,
    },
}

/// A drawable description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub source: IconSource,
    /// Clockwise rotation in degrees
    pub rotation_degrees: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_filter: Option<ColorFilter>,
}

impl Icon {
    /// Icon for a bundled resource, unrotated and untinted
    pub fn from_resource(id: ResourceId) -> Self {
        Self {
            source: IconSource::Resource { id },
            rotation_degrees: 0.0,
            color_filter: None,
        }
    }

    /// Icon for a resource inside a plugin package
    pub fn from_plugin(component: ComponentName, id: ResourceId) -> Self {
        Self {
            source: IconSource::Plugin { component, id },
            rotation_degrees: 0.0,
            color_filter: None,
        }
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation_degrees = (self.rotation_degrees + degrees) % 360.0;
        self
    }

    /// Apply a multiply color filter
    pub fn tinted(mut self, color: Color) -> Self {
        self.color_filter = Some(ColorFilter {
            color,
            mode: BlendMode::Multiply,
        });
        self
    }

    pub fn resource_id(&self) -> ResourceId {
        match &self.source {
            IconSource::Resource { id } | IconSource::Plugin { id, .. } => *id,
        }
    }
}
