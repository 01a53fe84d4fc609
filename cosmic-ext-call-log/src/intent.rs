//! Action descriptors
//!
//! An [`Intent`] tells the action dispatcher what to do when the user taps
//! a call log entry: place a regular call, or hand the number to the
//! in-call plugin that handled the original call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Action for placing a phone call
pub const ACTION_CALL: &str = "android.intent.action.CALL";

/// URI scheme for telephone numbers
pub const SCHEME_TEL: &str = "tel";

/// URI scheme for SIP addresses
pub const SCHEME_SIP: &str = "sip";

/// MIME type of a phone number data row
pub const PHONE_CONTENT_ITEM_TYPE: &str = "vnd.android.cursor.item/phone_v2";

/// Extra keys understood by the in-call plugin dispatcher
pub mod plugin_extras {
    /// Card entry id; always [`INCALL_PLUGIN_CALL_ENTRY_ID`] for plugin calls
    pub const KEY_DATA_ID: &str = "data_id";
    /// Flattened plugin component
    pub const KEY_COMPONENT: &str = "component";
    /// Human readable plugin name
    pub const KEY_NAME: &str = "name";
    /// Number to call
    pub const KEY_NUMBER: &str = "number";
    /// MIME type hint for the number
    pub const KEY_MIMETYPE: &str = "mimetype";

    /// Marker identifying an entry as an in-call plugin call
    pub const INCALL_PLUGIN_CALL_ENTRY_ID: i64 = -3;
}

/// Action descriptor consumed by the dispatcher
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Target URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, Value>,
}

impl Intent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_data(mut self, uri: impl Into<String>) -> Self {
        self.data = Some(uri.into());
        self
    }

    pub fn put_extra(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extras.get(key).and_then(Value::as_str)
    }

    pub fn extra_i64(&self, key: &str) -> Option<i64> {
        self.extras.get(key).and_then(Value::as_i64)
    }

    /// Whether this intent delegates the call to an in-call plugin
    pub fn is_plugin_call(&self) -> bool {
        self.extra_i64(plugin_extras::KEY_DATA_ID)
            == Some(plugin_extras::INCALL_PLUGIN_CALL_ENTRY_ID)
    }
}

/// Whether `number` is a SIP address rather than a dialable number
pub fn is_uri_number(number: &str) -> bool {
    number.contains('@') || number.contains("%40")
}

/// Build the call URI for a number
///
/// SIP addresses get the `sip:` scheme, everything else `tel:`. The scheme
/// specific part is percent-encoded so `#` and `+` survive.
///
/// # Examples
///
/// ```
/// use cosmic_ext_call_log::intent::call_uri;
///
/// assert_eq!(call_uri("5550100"), "tel:5550100");
/// assert_eq!(call_uri("+15550100"), "tel:%2B15550100");
/// assert_eq!(call_uri("alice@example.org"), "sip:alice%40example.org");
/// ```
pub fn call_uri(number: &str) -> String {
    let scheme = if is_uri_number(number) {
        SCHEME_SIP
    } else {
        SCHEME_TEL
    };
    format!("{}:{}", scheme, urlencoding::encode(number))
}

/// Intent that places a regular call to `number`
pub fn call_intent(number: &str) -> Intent {
    Intent::new()
        .with_action(ACTION_CALL)
        .with_data(call_uri(number))
}
