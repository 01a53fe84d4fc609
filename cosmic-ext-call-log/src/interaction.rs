//! Contact interactions
//!
//! The contact card shows a timeline of recent interactions with a contact
//! (calls, messages, events). Each kind of interaction renders into the
//! same three-line card entry through this trait.

use crate::context::DisplayContext;
use crate::icon::{Icon, ResourceId};
use crate::intent::Intent;
use crate::tts::AccessibleText;

/// One entry of a contact's interaction timeline
pub trait ContactInteraction {
    /// Action launched when the entry is tapped
    fn intent(&self, ctx: &DisplayContext) -> Intent;

    /// Milliseconds since epoch, or `-1` when unknown
    fn interaction_date(&self) -> i64;

    fn view_header(&self, ctx: &DisplayContext) -> Option<String>;

    fn view_body(&self, ctx: &DisplayContext) -> Option<String>;

    fn view_footer(&self, ctx: &DisplayContext) -> Option<String>;

    fn icon(&self, ctx: &DisplayContext) -> Option<Icon>;

    fn body_icon(&self, ctx: &DisplayContext) -> Option<Icon>;

    fn footer_icon(&self, ctx: &DisplayContext) -> Option<Icon>;

    /// Text read by screen readers for the whole entry
    fn content_description(&self, ctx: &DisplayContext) -> AccessibleText;

    fn icon_resource_id(&self) -> ResourceId;
}
