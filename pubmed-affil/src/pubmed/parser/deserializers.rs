//! Custom serde deserializers for mixed-content PubMed XML fields

use std::fmt;
use std::result;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Text of an element with any nested markup flattened away
///
/// Child elements (MathML in titles, for instance) contribute their own text
/// in document order; attributes are dropped.
struct FlattenedText(String);

impl<'de> Deserialize<'de> for FlattenedText {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlattenedTextVisitor;

        impl<'de> Visitor<'de> for FlattenedTextVisitor {
            type Value = FlattenedText;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("element text content")
            }

            fn visit_str<E>(self, value: &str) -> result::Result<FlattenedText, E>
            where
                E: de::Error,
            {
                Ok(FlattenedText(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> result::Result<FlattenedText, E>
            where
                E: de::Error,
            {
                Ok(FlattenedText(value))
            }

            fn visit_unit<E>(self) -> result::Result<FlattenedText, E>
            where
                E: de::Error,
            {
                Ok(FlattenedText(String::new()))
            }

            fn visit_map<M>(self, mut map: M) -> result::Result<FlattenedText, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut text_parts = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key.starts_with('@') {
                        let _: IgnoredAny = map.next_value()?;
                    } else {
                        // `$text`, `$value` or a nested element
                        let FlattenedText(part) = map.next_value()?;
                        text_parts.push(part);
                    }
                }
                // Text next to a child element may arrive trimmed, so parts
                // are joined with a space and runs of whitespace collapsed
                let joined = text_parts.join(" ");
                Ok(FlattenedText(
                    joined.split_whitespace().collect::<Vec<_>>().join(" "),
                ))
            }
        }

        deserializer.deserialize_any(FlattenedTextVisitor)
    }
}

/// Deserialize an element's text, tolerating nested markup
///
/// Used for `ArticleTitle`: a title is still required, but markup the
/// preprocessing step does not know about must not fail the document.
pub(super) fn deserialize_flattened_text<'de, D>(
    deserializer: D,
) -> result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    FlattenedText::deserialize(deserializer).map(|FlattenedText(text)| text)
}
