//! Editable numeric text bindings for the axis bounds.
//!
//! Each axis bound is an editable string plus a cached numeric value. The
//! string is what a text-input widget mutates; the number is re-derived at
//! the start of every render. While the user is mid-edit the text is often
//! not a valid number — that is normal, not an error, so a failed parse
//! keeps the previous number and leaves the text alone.

/// Parse a float only if the entire trimmed string is consumed.
///
/// `"1.5"`, `" -2 "` and `"1e3"` parse; `"1.5x"`, `"--1"` and `""` do not.
pub fn parse_f64(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// A text value bound to a cached `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericBinding {
    text: String,
    value: f64,
}

impl NumericBinding {
    /// Create a binding holding `value`, with matching text.
    pub fn new(value: f64) -> Self {
        Self {
            text: value.to_string(),
            value,
        }
    }

    /// Create a binding from initial text.
    ///
    /// The cached value starts at the parsed text, or `0.0` if the text is
    /// not (yet) a number.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let value = parse_f64(&text).unwrap_or(0.0);
        Self { text, value }
    }

    /// The current text, as the editing UI sees it.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access to the text, for the host to wire to an input widget.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// The cached numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Re-derive the cached value from the text.
    ///
    /// On parse failure the previous value is retained, silently.
    pub fn resolve(&mut self) {
        if let Some(value) = parse_f64(&self.text) {
            self.value = value;
        }
    }

    /// Overwrite both value and text (used by auto-scale write-back).
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.text = value.to_string();
    }
}

impl Default for NumericBinding {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requires_full_consumption() {
        assert_eq!(parse_f64("2.5"), Some(2.5));
        assert_eq!(parse_f64("  -1.25 "), Some(-1.25));
        assert_eq!(parse_f64("1e3"), Some(1000.0));
        assert_eq!(parse_f64("2.5x"), None);
        assert_eq!(parse_f64("1.2.3"), None);
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("-"), None);
    }

    #[test]
    fn test_resolve_retains_previous_on_bad_text() {
        let mut binding = NumericBinding::new(4.0);
        *binding.text_mut() = "7.5".to_string();
        binding.resolve();
        assert_eq!(binding.value(), 7.5);

        // Mid-edit garbage: value stays, text stays.
        *binding.text_mut() = "7.5e".to_string();
        binding.resolve();
        assert_eq!(binding.value(), 7.5);
        assert_eq!(binding.text(), "7.5e");
    }

    #[test]
    fn test_set_value_writes_text_back() {
        let mut binding = NumericBinding::from_text("nonsense");
        binding.set_value(2.0);
        assert_eq!(binding.text(), "2");
        assert_eq!(binding.value(), 2.0);
    }

    #[test]
    fn test_format_parse_roundtrip() {
        for v in [0.0, -1.25, 2.5, 1.0 / 3.0, 1e-12, 6.02e23] {
            let text = v.to_string();
            let parsed = parse_f64(&text).unwrap();
            assert_eq!(parsed.to_string(), text);
        }
    }
}
