use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use crate::{Error, KwList};

/// Structural check over untyped data: `true` iff `value` is an array
/// whose every element is a two-element array with a string first
/// element. The empty array is trivially a keyword list.
///
/// A `KwList` is correct by construction, so the shape check only makes
/// sense against dynamic values coming from the outside.
///
/// ### Example
/// ```rust
/// use kwlist::is_keyword;
/// use serde_json::json;
///
/// assert!(is_keyword(&json!([["a", 1], ["b", 2], ["a", 3]])));
/// assert!(is_keyword(&json!([])));
///
/// assert!(!is_keyword(&json!({ "a": 1 })));
/// assert!(!is_keyword(&json!([["a", 1], [2, 3]])));
/// assert!(!is_keyword(&json!([["a", 1], ["b"]])));
/// ```
pub fn is_keyword(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().all(|item| match item.as_array() {
            Some(pair) => pair.len() == 2 && pair[0].is_string(),
            None => false,
        }),
        _ => false,
    }
}

impl TryFrom<&Value> for KwList<Value> {
    type Error = Error;

    /// Checked conversion from a dynamic value, duplicates and order
    /// preserved. A non-array input or a malformed element fails with
    /// [`Error::InvalidPair`] carrying the offending index (0 for a
    /// non-array input).
    ///
    /// ### Example
    /// ```rust
    /// use kwlist::KwList;
    /// use serde_json::{json, Value};
    ///
    /// let list = KwList::try_from(&json!([["a", 1], ["a", 2]])).unwrap();
    /// assert_eq!(list.get("a"), Some(&json!(1)));
    /// assert_eq!(list.len(), 2);
    ///
    /// assert!(KwList::try_from(&json!({ "a": 1 })).is_err());
    /// ```
    fn try_from(value: &Value) -> Result<Self, Error> {
        let items = value.as_array().ok_or(Error::InvalidPair { index: 0 })?;

        let mut pairs = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let pair = item
                .as_array()
                .filter(|pair| pair.len() == 2)
                .ok_or(Error::InvalidPair { index })?;
            let key = pair[0].as_str().ok_or(Error::InvalidPair { index })?;
            pairs.push((key.to_string(), pair[1].clone()));
        }

        Ok(Self::from(pairs))
    }
}

impl<V: Serialize> Serialize for KwList<V> {
    /// Serializes as a sequence of `[key, value]` pairs, duplicates and
    /// order preserved.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for KwList<V> {
    /// Deserializes from a sequence of pairs, adopting them as-is: no
    /// deduplication happens on the way in.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<(String, V)>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::{is_keyword, kwlist, Error, KwList};

    #[test]
    fn is_keyword_accepts_pair_sequences() {
        assert!(is_keyword(&json!([["a", 1], ["b", 2], ["a", 3]])));
        assert!(is_keyword(&json!([])), "Expected the empty sequence to pass");
    }

    #[test]
    fn is_keyword_rejects_malformed_shapes() {
        assert!(!is_keyword(&json!({ "a": 1 })), "Expected objects to fail");
        assert!(!is_keyword(&json!("a")), "Expected scalars to fail");
        assert!(
            !is_keyword(&json!([["a", 1], [2, 3]])),
            "Expected non-string keys to fail"
        );
        assert!(
            !is_keyword(&json!([["a", 1], ["b", 2, 3]])),
            "Expected non-pair elements to fail"
        );
    }

    #[test]
    fn try_from_preserves_duplicates() {
        let sut = KwList::try_from(&json!([["a", 1], ["a", 2]])).unwrap();

        assert_eq!(sut.keys().collect::<Vec<_>>(), ["a", "a"]);
        assert_eq!(sut.get("a"), Some(&json!(1)));
    }

    #[test]
    fn try_from_reports_the_offending_index() {
        let result = KwList::try_from(&json!([["a", 1], ["b"], ["c", 3]]));

        assert_eq!(result, Err(Error::InvalidPair { index: 1 }));
    }

    #[test]
    fn try_from_rejects_non_sequences() {
        let result = KwList::try_from(&json!(42));

        assert_eq!(result, Err(Error::InvalidPair { index: 0 }));
    }

    #[test]
    fn serde_round_trips_duplicate_keys() {
        let sut = kwlist!["a" => 1, "b" => 2, "a" => 3];

        let encoded = serde_json::to_string(&sut).unwrap();
        assert_eq!(encoded, r#"[["a",1],["b",2],["a",3]]"#);

        let decoded: KwList<i32> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, sut);
    }

    #[test]
    fn serialized_lists_satisfy_the_shape_check() {
        let sut = kwlist!["a" => 1, "a" => 2];
        let value: Value = serde_json::to_value(&sut).unwrap();

        assert!(is_keyword(&value));
        assert_eq!(KwList::try_from(&value).unwrap().len(), sut.len());
    }
}
