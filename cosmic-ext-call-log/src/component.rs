//! Flattened component identifiers
//!
//! In-call plugins are identified by a `package/class` string. A class
//! starting with `.` is relative to the package.

use crate::{CallLogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A package plus a fully qualified class inside it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentName {
    package: String,
    class: String,
}

impl ComponentName {
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }

    /// Decode a flattened `package/class` identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use cosmic_ext_call_log::ComponentName;
    ///
    /// let name = ComponentName::unflatten("com.example.voip/.CallService").unwrap();
    /// assert_eq!(name.package(), "com.example.voip");
    /// assert_eq!(name.class(), "com.example.voip.CallService");
    /// ```
    pub fn unflatten(flat: &str) -> Result<Self> {
        let (package, class) = flat
            .split_once('/')
            .ok_or_else(|| CallLogError::InvalidComponentName(flat.to_string()))?;

        if class.is_empty() {
            return Err(CallLogError::InvalidComponentName(flat.to_string()));
        }

        let class = if class.starts_with('.') {
            format!("{}{}", package, class)
        } else {
            class.to_string()
        };

        Ok(Self::new(package, class))
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Flatten, abbreviating the class when it lives inside the package
    pub fn flatten_short(&self) -> String {
        match self.class.strip_prefix(self.package.as_str()) {
            Some(rest) if rest.starts_with('.') => format!("{}/{}", self.package, rest),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}

impl FromStr for ComponentName {
    type Err = CallLogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::unflatten(s)
    }
}
