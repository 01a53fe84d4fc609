//! COSMIC Connect Call Log Interactions
//!
//! Renders rows of a paired phone's call log as contact card entries:
//! header, body and footer text, icons, an accessible description and the
//! action that calls the number back.
//!
//! Formatting and resource lookups are injected through a
//! [`DisplayContext`], so the row to display mapping runs without a UI
//! toolkit.

pub mod bidi;
pub mod call_log;
pub mod call_type;
pub mod component;
pub mod context;
pub mod dates;
pub mod icon;
pub mod intent;
pub mod interaction;
pub mod labels;
pub mod phone;
pub mod plugin;
pub mod resources;
pub mod row;
pub mod tts;

mod error;

pub use bidi::BidiFormatter;
pub use call_log::{CallLogInteraction, CALL_LOG_ICON};
pub use call_type::{CallArrow, CallType};
pub use component::ComponentName;
pub use context::DisplayContext;
pub use dates::{DateFormatter, LocalDateFormatter};
pub use error::{CallLogError, Result};
pub use icon::{BlendMode, Color, ColorFilter, Icon, IconSource, ResourceId};
pub use intent::Intent;
pub use interaction::ContactInteraction;
pub use labels::{ContactsLabelResolver, NumberLabelResolver};
pub use phone::{GlobalNumberClassifier, PhoneNumberClassifier};
pub use plugin::{InstalledPluginIcons, NoPluginIcons, PluginIconResolver};
pub use resources::{ColorKey, DefaultResources, DisplayResources, StringKey};
pub use row::CallLogRow;
pub use tts::{AccessibleText, TtsSpan};
