//! Phone number classification

use regex::Regex;
use std::sync::OnceLock;

/// Decides whether a number is routable on the global telephone network
pub trait PhoneNumberClassifier: Send + Sync {
    fn is_global_phone_number(&self, number: &str) -> bool;
}

static GLOBAL_PHONE_NUMBER: OnceLock<Regex> = OnceLock::new();

fn global_phone_number_pattern() -> &'static Regex {
    GLOBAL_PHONE_NUMBER
        .get_or_init(|| Regex::new(r"^\+?[0-9.-]+$").expect("global phone number pattern"))
}

/// Accepts an optional leading `+` followed by digits, dots and dashes
///
/// Anything with spaces, letters, SIP syntax or bidi control characters is
/// not a global number.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalNumberClassifier;

impl PhoneNumberClassifier for GlobalNumberClassifier {
    fn is_global_phone_number(&self, number: &str) -> bool {
        !number.is_empty() && global_phone_number_pattern().is_match(number)
    }
}
