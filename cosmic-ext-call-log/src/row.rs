//! Call Log Rows
//!
//! A [`CallLogRow`] is one record of the phone's call log, keyed by the
//! standard call log column names. Values are stored as JSON values, the
//! same loose typing the phone side uses when it ships rows across.
//!
//! Typed reads coerce the way a content-values store does: integers are
//! also accepted in string form, booleans accept `0`/`1`, and anything that
//! cannot be coerced reads as absent.

use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;

/// Standard call log column names
pub mod columns {
    /// Cached contact name for the number
    pub const CACHED_NAME: &str = "name";
    /// Cached custom label for the number type
    pub const CACHED_NUMBER_LABEL: &str = "numberlabel";
    /// Cached number type code (home, mobile, work, ...)
    pub const CACHED_NUMBER_TYPE: &str = "numbertype";
    /// Call start, milliseconds since epoch
    pub const DATE: &str = "date";
    /// Call duration in seconds
    pub const DURATION: &str = "duration";
    /// Whether the entry has been acknowledged by the user
    pub const IS_READ: &str = "is_read";
    /// Whether the entry is new since the log was last viewed
    pub const NEW: &str = "new";
    /// Phone number as dialed or received
    pub const NUMBER: &str = "number";
    /// Number presentation code (allowed, restricted, unknown, payphone)
    pub const NUMBER_PRESENTATION: &str = "presentation";
    /// Call type code
    pub const TYPE: &str = "type";
    /// Query parameter key limiting the number of rows returned
    pub const LIMIT_PARAM_KEY: &str = "limit";
    /// Query parameter key offsetting the first row returned
    pub const OFFSET_PARAM_KEY: &str = "offset";
    /// Flattened component of the in-call plugin that handled the call
    pub const PLUGIN_PACKAGE_NAME: &str = "plugin_package_name";
    /// User handle of the in-call plugin account
    pub const PLUGIN_USER_HANDLE: &str = "plugin_user_handle";
}

/// One call log record
///
/// # Examples
///
/// ```
/// use cosmic_ext_call_log::row::{columns, CallLogRow};
///
/// let row = CallLogRow::new()
///     .with(columns::NUMBER, "+15551234567")
///     .with(columns::TYPE, 1)
///     .with(columns::DATE, 1_700_000_000_000_i64);
///
/// assert_eq!(row.get_as_i32(columns::TYPE), Some(1));
/// assert_eq!(row.get_as_string(columns::NUMBER).as_deref(), Some("+15551234567"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallLogRow {
    values: Map<String, Value>,
}

impl CallLogRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a row from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a row from a JSON source
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.put(key, value);
        self
    }

    /// Insert or replace a column value
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Whether the column is present (a JSON `null` counts as present)
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of columns in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no columns
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| !v.is_null())
    }

    /// Read a column as a string
    ///
    /// Numbers and booleans are rendered in their textual form.
    pub fn get_as_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Read a column as a 64-bit integer
    pub fn get_as_i64(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Read a column as a 32-bit integer
    ///
    /// Wider values are truncated to their low 32 bits.
    pub fn get_as_i32(&self, key: &str) -> Option<i32> {
        match self.get(key)? {
            Value::String(s) => s.trim().parse().ok(),
            _ => self.get_as_i64(key).map(|v| v as i32),
        }
    }

    /// Read a column as a boolean
    ///
    /// Accepts JSON booleans, numbers (non-zero is `true`) and the strings
    /// `"true"`, `"false"` and `"1"`.
    pub fn get_as_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n
                .as_i64()
                .map(|v| v != 0)
                .or_else(|| n.as_f64().map(|f| f as i64 != 0)),
            Value::String(s) => Some(s.eq_ignore_ascii_case("true") || s == "1"),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for CallLogRow {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_coercion() {
        let row = CallLogRow::new()
            .with(columns::NUMBER, "5551234")
            .with(columns::DURATION, 42)
            .with(columns::NEW, true);

        assert_eq!(row.get_as_string(columns::NUMBER).as_deref(), Some("5551234"));
        assert_eq!(row.get_as_string(columns::DURATION).as_deref(), Some("42"));
        assert_eq!(row.get_as_string(columns::NEW).as_deref(), Some("true"));
    }

    #[test]
    fn test_integer_coercion() {
        let row = CallLogRow::new()
            .with(columns::TYPE, "3")
            .with(columns::DATE, 1_700_000_000_123_i64)
            .with(columns::CACHED_NUMBER_TYPE, "mobile");

        assert_eq!(row.get_as_i32(columns::TYPE), Some(3));
        assert_eq!(row.get_as_i64(columns::DATE), Some(1_700_000_000_123));
        assert_eq!(row.get_as_i32(columns::CACHED_NUMBER_TYPE), None);
    }

    #[test]
    fn test_boolean_coercion() {
        let row = CallLogRow::new()
            .with(columns::IS_READ, 1)
            .with(columns::NEW, "0")
            .with("flag", "TRUE");

        assert_eq!(row.get_as_bool(columns::IS_READ), Some(true));
        assert_eq!(row.get_as_bool(columns::NEW), Some(false));
        assert_eq!(row.get_as_bool("flag"), Some(true));
    }

    #[test]
    fn test_null_reads_as_absent() {
        let row = CallLogRow::new().with(columns::NUMBER, Value::Null);

        assert!(row.contains_key(columns::NUMBER));
        assert_eq!(row.get_as_string(columns::NUMBER), None);
        assert_eq!(row.get_as_i64(columns::NUMBER), None);
    }

    #[test]
    fn test_from_json() {
        let row = CallLogRow::from_json(r#"{"number": "+4930123456", "type": 2}"#).unwrap();
        assert_eq!(row.len(), 2);
        assert_eq!(row.get_as_i32(columns::TYPE), Some(2));

        assert!(CallLogRow::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_from_reader_errors() {
        use crate::CallLogError;

        let row = CallLogRow::from_reader(&br#"{"type": 3}"#[..]).unwrap();
        assert_eq!(row.get_as_i32(columns::TYPE), Some(3));

        let err = CallLogRow::from_reader(&b"not json"[..]).unwrap_err();
        assert!(matches!(err, CallLogError::Json(_)));

        // Not UTF-8
        let err = CallLogRow::from_reader(&[0xff, 0xfe][..]).unwrap_err();
        assert!(matches!(err, CallLogError::Io(_)));
        assert!(err.user_message().starts_with("I/O error"));
    }

    #[test]
    fn test_serialize_is_flat_object() {
        let row = CallLogRow::new().with(columns::TYPE, 1);
        assert_eq!(serde_json::to_value(&row).unwrap(), json!({"type": 1}));
    }
}
