//! Display resources
//!
//! Strings, colors and icons for the current display context. Templates use
//! positional `%1$s` placeholders so translations can reorder arguments.

use crate::icon::{Color, Icon, ResourceId};
use serde::{Deserialize, Serialize};

/// Colors looked up by the call log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorKey {
    CallArrowGreen,
    CallArrowRed,
}

/// Strings looked up by the call log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringKey {
    /// Template: call type, phone number, date
    RecentCallDescription,
    RecentCallTypeIncoming,
    RecentCallTypeMissed,
    RecentCallTypeOutgoing,
}

/// Resource lookup for the current display context
pub trait DisplayResources: Send + Sync {
    fn string(&self, key: StringKey) -> String;

    fn color(&self, key: ColorKey) -> Color;

    fn icon(&self, id: ResourceId) -> Icon {
        Icon::from_resource(id)
    }

    /// Look up a template and substitute positional arguments
    fn format_string(&self, key: StringKey, args: &[&str]) -> String {
        format_template(&self.string(key), args)
    }
}

/// Default green for incoming and outgoing arrows
pub const DEFAULT_CALL_ARROW_GREEN: Color = Color(0xff0f_9d58);
/// Default red for missed call arrows
pub const DEFAULT_CALL_ARROW_RED: Color = Color(0xffdb_4437);

/// English strings and the stock arrow colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultResources {
    call_arrow_green: Color,
    call_arrow_red: Color,
}

impl Default for DefaultResources {
    fn default() -> Self {
        Self {
            call_arrow_green: DEFAULT_CALL_ARROW_GREEN,
            call_arrow_red: DEFAULT_CALL_ARROW_RED,
        }
    }
}

impl DefaultResources {
    pub fn with_colors(call_arrow_green: Color, call_arrow_red: Color) -> Self {
        Self {
            call_arrow_green,
            call_arrow_red,
        }
    }
}

impl DisplayResources for DefaultResources {
    fn string(&self, key: StringKey) -> String {
        match key {
            StringKey::RecentCallDescription => {
                "Recent call. %1$s. Phone number: %2$s. Called %3$s."
            }
            StringKey::RecentCallTypeIncoming => "Incoming",
            StringKey::RecentCallTypeMissed => "Missed",
            StringKey::RecentCallTypeOutgoing => "Outgoing",
        }
        .to_string()
    }

    fn color(&self, key: ColorKey) -> Color {
        match key {
            ColorKey::CallArrowGreen => self.call_arrow_green,
            ColorKey::CallArrowRed => self.call_arrow_red,
        }
    }
}

/// Substitute `%N$s` placeholders (1-based) and `%%`
///
/// Placeholders without a matching argument are left as they are.
///
/// # Examples
///
/// ```
/// use cosmic_ext_call_log::resources::format_template;
///
/// assert_eq!(format_template("%2$s, %1$s", &["world", "hello"]), "hello, world");
/// ```
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix('%') {
            out.push('%');
            rest = after;
            continue;
        }

        let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
        let arg = tail[..digits]
            .parse::<usize>()
            .ok()
            .filter(|_| tail[digits..].starts_with("$s"))
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| args.get(i));

        match arg {
            Some(arg) => {
                out.push_str(arg);
                rest = &tail[digits + 2..];
            }
            None => {
                out.push('%');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
