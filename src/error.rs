use core::fmt;

/// Errors surfaced by fallible `KwList` operations.
///
/// Lookups come in two tiers: `fetch` reports a miss as the lightweight
/// [`Error::NotFound`] variant, while the strict operations (`try_update`,
/// indexing) report [`Error::MissingKey`] carrying the keys that were
/// present at the time of the failure, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested key has no pair in the list.
    #[error("key {0:?} not found")]
    NotFound(String),

    /// A strict operation required a key that has no pair in the list.
    #[error("key {key:?} not found, present keys: {}", FmtKeys(.present))]
    MissingKey {
        key: String,
        /// Snapshot of the keys present when the lookup failed.
        present: Vec<String>,
    },

    /// An input element could not be turned into a `(String, V)` pair.
    #[error("element at index {index} did not yield a key-value pair")]
    InvalidPair { index: usize },
}

struct FmtKeys<'a>(&'a [String]);

impl fmt::Display for FmtKeys<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn not_found_display() {
        let sut = Error::NotFound("shape".into());
        assert_eq!(sut.to_string(), r#"key "shape" not found"#);
    }

    #[test]
    fn missing_key_display_lists_present_keys() {
        let sut = Error::MissingKey {
            key: "shape".into(),
            present: vec!["size".into(), "color".into()],
        };
        assert_eq!(
            sut.to_string(),
            r#"key "shape" not found, present keys: ["size", "color"]"#
        );
    }

    #[test]
    fn invalid_pair_display() {
        let sut = Error::InvalidPair { index: 3 };
        assert_eq!(
            sut.to_string(),
            "element at index 3 did not yield a key-value pair"
        );
    }
}
