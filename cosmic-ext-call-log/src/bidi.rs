//! Bidirectional text wrapping
//!
//! Phone numbers are left-to-right even inside right-to-left UI. Without
//! explicit embedding, an RTL paragraph reorders the digit groups of
//! `+1 555 0100` and the number reads wrong. [`BidiFormatter::unicode_wrap_ltr`]
//! isolates a string as LTR relative to the surrounding context.

/// Left-to-right embedding
pub const LRE: char = '\u{202A}';
/// Right-to-left embedding
pub const RLE: char = '\u{202B}';
/// Pop directional formatting
pub const PDF: char = '\u{202C}';
/// Left-to-right mark
pub const LRM: char = '\u{200E}';
/// Right-to-left mark
pub const RLM: char = '\u{200F}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Ltr,
    Rtl,
}

fn strong_direction(c: char) -> Option<Direction> {
    match c {
        LRM => Some(Direction::Ltr),
        RLM => Some(Direction::Rtl),
        '\u{0590}'..='\u{08FF}'
        | '\u{FB1D}'..='\u{FDFF}'
        | '\u{FE70}'..='\u{FEFF}'
        | '\u{10800}'..='\u{10FFF}'
        | '\u{1E800}'..='\u{1EFFF}' => Some(Direction::Rtl),
        c if c.is_alphabetic() => Some(Direction::Ltr),
        _ => None,
    }
}

fn entry_direction(text: &str) -> Option<Direction> {
    text.chars().find_map(strong_direction)
}

fn exit_direction(text: &str) -> Option<Direction> {
    text.chars().rev().find_map(strong_direction)
}

/// Wraps strings so they keep their direction inside a given context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BidiFormatter {
    rtl_context: bool,
}

impl BidiFormatter {
    /// Formatter for a left-to-right UI
    pub fn ltr() -> Self {
        Self { rtl_context: false }
    }

    /// Formatter for a right-to-left UI
    pub fn rtl() -> Self {
        Self { rtl_context: true }
    }

    pub fn is_rtl_context(&self) -> bool {
        self.rtl_context
    }

    /// Wrap `text`, treating it as left-to-right
    ///
    /// In an LTR context, plain numbers come back unchanged; marks are only
    /// added when the text starts or ends with strong RTL characters. In an
    /// RTL context the text is embedded with LRE/PDF and fenced with RLM.
    ///
    /// # Examples
    ///
    /// ```
    /// use cosmic_ext_call_log::bidi::{BidiFormatter, LRE, PDF, RLM};
    ///
    /// assert_eq!(BidiFormatter::ltr().unicode_wrap_ltr("+1 555 0100"), "+1 555 0100");
    ///
    /// let wrapped = BidiFormatter::rtl().unicode_wrap_ltr("+1 555 0100");
    /// assert_eq!(wrapped, format!("{RLM}{LRE}+1 555 0100{PDF}{RLM}"));
    /// ```
    pub fn unicode_wrap_ltr(&self, text: &str) -> String {
        let mut wrapped = String::with_capacity(text.len() + 4 * LRE.len_utf8());

        if self.rtl_context {
            // The text is LTR while the context is RTL: always fence and embed.
            wrapped.push(RLM);
            wrapped.push(LRE);
            wrapped.push_str(text);
            wrapped.push(PDF);
            wrapped.push(RLM);
        } else {
            if entry_direction(text) == Some(Direction::Rtl) {
                wrapped.push(LRM);
            }
            wrapped.push_str(text);
            if exit_direction(text) == Some(Direction::Rtl) {
                wrapped.push(LRM);
            }
        }

        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ltr_context_leaves_numbers_alone() {
        let bidi = BidiFormatter::ltr();
        assert_eq!(bidi.unicode_wrap_ltr("555-0100"), "555-0100");
        assert_eq!(bidi.unicode_wrap_ltr(""), "");
    }

    #[test]
    fn test_ltr_context_marks_rtl_edges() {
        let bidi = BidiFormatter::ltr();
        let hebrew = "\u{05E9}\u{05DC}\u{05D5}\u{05DD}";
        assert_eq!(
            bidi.unicode_wrap_ltr(hebrew),
            format!("{LRM}{hebrew}{LRM}")
        );

        let mixed = format!("555 {hebrew}");
        assert_eq!(bidi.unicode_wrap_ltr(&mixed), format!("{mixed}{LRM}"));
    }

    #[test]
    fn test_rtl_context_embeds() {
        let bidi = BidiFormatter::rtl();
        let wrapped = bidi.unicode_wrap_ltr("+44 20 7946 0000");

        assert!(wrapped.starts_with(&format!("{RLM}{LRE}")));
        assert!(wrapped.ends_with(&format!("{PDF}{RLM}")));
        assert!(wrapped.contains("+44 20 7946 0000"));
    }

    #[test]
    fn test_strong_direction() {
        assert_eq!(strong_direction('a'), Some(Direction::Ltr));
        assert_eq!(strong_direction('\u{0627}'), Some(Direction::Rtl));
        assert_eq!(strong_direction('7'), None);
        assert_eq!(strong_direction('+'), None);
    }
}
