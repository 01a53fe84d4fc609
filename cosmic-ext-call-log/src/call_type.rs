//! Call types
//!
//! The call log stores the call direction as an integer code. Only the
//! three directional types get an arrow and a spoken label; every other
//! code (voicemail, rejected, blocked, vendor extensions) renders nothing.

use crate::icon::{Icon, ResourceId};
use crate::resources::{ColorKey, DisplayResources, StringKey};
use serde::{Deserialize, Serialize};

/// Call log type code for incoming calls
pub const INCOMING_TYPE: i32 = 1;
/// Call log type code for outgoing calls
pub const OUTGOING_TYPE: i32 = 2;
/// Call log type code for missed calls
pub const MISSED_TYPE: i32 = 3;

/// Direction of a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallType {
    Incoming,
    Outgoing,
    Missed,
}

/// Presentation of the footer arrow for a call type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallArrow {
    pub color: ColorKey,
    pub rotation_degrees: f32,
}

impl CallType {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            INCOMING_TYPE => Some(Self::Incoming),
            OUTGOING_TYPE => Some(Self::Outgoing),
            MISSED_TYPE => Some(Self::Missed),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Incoming => INCOMING_TYPE,
            Self::Outgoing => OUTGOING_TYPE,
            Self::Missed => MISSED_TYPE,
        }
    }

    /// Arrow presentation. Outgoing flips the incoming arrow.
    pub fn arrow(self) -> CallArrow {
        match self {
            Self::Incoming => CallArrow {
                color: ColorKey::CallArrowGreen,
                rotation_degrees: 0.0,
            },
            Self::Missed => CallArrow {
                color: ColorKey::CallArrowRed,
                rotation_degrees: 0.0,
            },
            Self::Outgoing => CallArrow {
                color: ColorKey::CallArrowGreen,
                rotation_degrees: 180.0,
            },
        }
    }

    /// String used for this type in content descriptions
    pub fn description_key(self) -> StringKey {
        match self {
            Self::Incoming => StringKey::RecentCallTypeIncoming,
            Self::Outgoing => StringKey::RecentCallTypeOutgoing,
            Self::Missed => StringKey::RecentCallTypeMissed,
        }
    }

    /// Tinted, possibly rotated arrow icon
    pub fn arrow_icon(self, resources: &dyn DisplayResources) -> Icon {
        let arrow = self.arrow();
        resources
            .icon(ResourceId::CALL_ARROW)
            .rotated(arrow.rotation_degrees)
            .tinted(resources.color(arrow.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::DefaultResources;

    #[test]
    fn test_code_round_trip() {
        for code in [INCOMING_TYPE, OUTGOING_TYPE, MISSED_TYPE] {
            assert_eq!(CallType::from_code(code).map(CallType::code), Some(code));
        }
    }

    #[test]
    fn test_unknown_codes() {
        // voicemail, rejected, blocked
        for code in [0, 4, 5, 6, -1] {
            assert_eq!(CallType::from_code(code), None);
        }
    }

    #[test]
    fn test_arrow_table() {
        let incoming = CallType::Incoming.arrow();
        assert_eq!(incoming.color, ColorKey::CallArrowGreen);
        assert_eq!(incoming.rotation_degrees, 0.0);

        let missed = CallType::Missed.arrow();
        assert_eq!(missed.color, ColorKey::CallArrowRed);
        assert_eq!(missed.rotation_degrees, 0.0);

        let outgoing = CallType::Outgoing.arrow();
        assert_eq!(outgoing.color, ColorKey::CallArrowGreen);
        assert_eq!(outgoing.rotation_degrees, 180.0);
    }

    #[test]
    fn test_arrow_icon_uses_resources() {
        let resources = DefaultResources::default();
        let icon = CallType::Missed.arrow_icon(&resources);

        assert_eq!(icon.resource_id(), ResourceId::CALL_ARROW);
        assert_eq!(
            icon.color_filter.map(|f| f.color),
            Some(resources.color(ColorKey::CallArrowRed))
        );
    }
}
