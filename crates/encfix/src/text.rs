//! Fixture text: the template and its derived variant

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// Template written to the GBK fixture
pub const TEMPLATE: &str = "\n你好，世界！\n这是一个测试文件。\nEncoding: GBK\n";

/// Label token embedded in [`TEMPLATE`]
pub const LABEL_TOKEN: &str = "GBK";

/// Replacement for [`LABEL_TOKEN`] in the variant
pub const VARIANT_LABEL: &str = "UTF-8";

/// Immutable fixture text
///
/// Borrows the static template and owns derived variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixtureText(Cow<'static, str>);

impl FixtureText {
    /// The template text
    #[inline]
    #[must_use]
    pub const fn template() -> Self {
        Self(Cow::Borrowed(TEMPLATE))
    }

    /// The template with its label swapped for [`VARIANT_LABEL`]
    #[must_use]
    pub fn variant() -> Self {
        Self::template().substitute(LABEL_TOKEN, VARIANT_LABEL)
    }

    /// Wrap arbitrary text
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }

    /// New text with every occurrence of `from` replaced by `to`
    #[must_use]
    pub fn substitute(&self, from: &str, to: &str) -> Self {
        Self(Cow::Owned(self.0.replace(from, to)))
    }

    /// Borrow as `&str`
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FixtureText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FixtureText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_shape() {
        let lines: Vec<&str> = TEMPLATE.split('\n').collect();
        assert_eq!(lines, ["", "你好，世界！", "这是一个测试文件。", "Encoding: GBK", ""]);
        assert_eq!(TEMPLATE.matches(LABEL_TOKEN).count(), 1);
    }

    #[test]
    fn variant_replaces_label_only() {
        let variant = FixtureText::variant();
        assert_eq!(
            variant.as_str(),
            "\n你好，世界！\n这是一个测试文件。\nEncoding: UTF-8\n"
        );
        assert_eq!(FixtureText::template().as_str(), TEMPLATE);
    }

    #[test]
    fn substitute_without_match_is_unchanged() {
        let text = FixtureText::template().substitute("Shift_JIS", "EUC-KR");
        assert_eq!(text, FixtureText::template());
    }

    #[test]
    fn substitute_replaces_all() {
        let text = FixtureText::new("GBK GBK").substitute("GBK", "UTF-8");
        assert_eq!(text.to_string(), "UTF-8 UTF-8");
    }
}
