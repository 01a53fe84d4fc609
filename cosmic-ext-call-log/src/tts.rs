//! Accessible text with text-to-speech hints
//!
//! Screen readers read `5550100` as "five million...". Telephone spans tell
//! them to read the covered range digit by digit instead.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A byte range of text that should be spoken as a telephone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtsSpan {
    pub range: Range<usize>,
    /// Digits to announce
    pub telephone: String,
}

/// Text plus its text-to-speech annotations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibleText {
    pub text: String,
    pub spans: Vec<TtsSpan>,
}

impl AccessibleText {
    /// Annotate every occurrence of `phone_number` in `message`
    ///
    /// # Examples
    ///
    /// ```
    /// use cosmic_ext_call_log::AccessibleText;
    ///
    /// let text = AccessibleText::telephone("Call 555-0100 now", "555-0100");
    /// assert_eq!(text.spans.len(), 1);
    /// assert_eq!(&text.text[text.spans[0].range.clone()], "555-0100");
    /// assert_eq!(text.spans[0].telephone, "5550100");
    /// ```
    pub fn telephone(message: impl Into<String>, phone_number: &str) -> Self {
        let text = message.into();
        let mut spans = Vec::new();

        if !phone_number.is_empty() {
            let telephone = network_portion(phone_number);
            spans.extend(text.match_indices(phone_number).map(|(start, _)| TtsSpan {
                range: start..start + phone_number.len(),
                telephone: telephone.clone(),
            }));
        }

        Self { text, spans }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Dialable characters of a number: digits, `+`, `*` and `#`
fn network_portion(number: &str) -> String {
    number
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '*' | '#'))
        .collect()
}
