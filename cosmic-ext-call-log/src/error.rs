//! Error handling for call log interactions
//!
//! Rendering a call log row never fails: every accessor degrades a missing
//! column to `None` or an empty string. Errors only surface at the edges,
//! when a row is parsed from JSON or when a plugin component identifier
//! has to be decoded.
//!
//! ## Error Propagation
//!
//! ```rust
//! use cosmic_ext_call_log::{CallLogRow, Result};
//!
//! fn load_row(json: &str) -> Result<CallLogRow> {
//!     // serde_json errors are converted automatically
//!     let row = CallLogRow::from_json(json)?;
//!     Ok(row)
//! }
//! ```

use thiserror::Error;

/// Result type for call log operations
pub type Result<T> = std::result::Result<T, CallLogError>;

/// Errors that can occur while building or classifying call log interactions
///
/// # Examples
///
/// ```rust
/// use cosmic_ext_call_log::CallLogError;
///
/// let error = CallLogError::InvalidComponentName("com.example".to_string());
/// assert_eq!(error.to_string(), "Invalid component name: com.example");
/// ```
#[derive(Error, Debug)]
pub enum CallLogError {
    /// I/O error while reading a row source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Flattened component identifier could not be decoded
    ///
    /// Component identifiers have the form `package/class`.
    #[error("Invalid component name: {0}")]
    InvalidComponentName(String),

    /// Plugin classification was requested for a row with no plugin package
    #[error("Row has no plugin component")]
    MissingPluginComponent,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CallLogError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        CallLogError::Configuration(msg.into())
    }

    /// Get a user-friendly error message suitable for display in UI
    pub fn user_message(&self) -> String {
        match self {
            CallLogError::Io(e) => format!("I/O error: {}.", e),
            CallLogError::Json(e) => format!("Call log data format error: {}.", e),
            CallLogError::InvalidComponentName(name) => {
                format!(
                    "Calling plugin '{}' is not recognised. Check the plugin installation.",
                    name
                )
            }
            CallLogError::MissingPluginComponent => {
                "This call was not placed through a calling plugin.".to_string()
            }
            CallLogError::Configuration(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CallLogError::InvalidComponentName("no-separator".to_string());
        assert_eq!(error.to_string(), "Invalid component name: no-separator");

        let error = CallLogError::MissingPluginComponent;
        assert_eq!(error.to_string(), "Row has no plugin component");

        let error = CallLogError::configuration("bad color");
        assert_eq!(error.to_string(), "Configuration error: bad color");
    }

    #[test]
    fn test_json_error_conversion() {
        let json = r#"{"invalid json"#;
        let json_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
        let error: CallLogError = json_error.into();

        assert!(matches!(error, CallLogError::Json(_)));
        assert!(error.user_message().starts_with("Call log data format error"));
    }
}
