//! Converts between an ordered tag sequence and the single text value stored
//! in the `tags` column.
//!
//! Tags are joined with `|`. The mapping is exact, order- and
//! duplicate-preserving, for any tag that does not itself contain the
//! separator. A tag containing `|` is the caller's responsibility: it is
//! stored as-is and will split apart on decode. No normalization (casing,
//! trimming, de-duplication) happens here.

pub const SEPARATOR: &str = "|";

pub fn encode(tags: &[String]) -> String {
    tags.join(SEPARATOR)
}

/// Splits a stored value back into its tag sequence. An empty value decodes
/// to an empty sequence, not to one empty tag.
pub fn decode(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(SEPARATOR).map(str::to_string).collect()
}
