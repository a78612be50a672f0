//! Cleanup applied to EFetch XML before deserialization

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Remove inline formatting tags (`<i>`, `<sup>`, `<sub>`, `<b>`, ...) from EFetch XML
///
/// PubMed emits these inside `ArticleTitle` and `Affiliation`; left in place
/// they turn a text field into mixed content, which the serde deserializer
/// cannot map onto a `String`. The text between the tags is kept.
pub(crate) fn strip_inline_html_tags(xml: &str) -> Cow<'_, str> {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("inline tag regex is valid")
    });

    let cleaned = re.replace_all(xml, "");
    if let Cow::Owned(ref owned) = cleaned {
        debug!(
            original_bytes = xml.len(),
            cleaned_bytes = owned.len(),
            "Stripped inline formatting tags"
        );
    }
    cleaned
}
