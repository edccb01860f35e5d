//! # nested-map
//!
//! Walks a nested mapping one key at a time. [`access_nested_map`] returns a borrow of the value
//! at the end of the path, or [`NestedMapError::KeyNotFound`] carrying the first key that did
//! not resolve.
//!
//! ```
//! use nested_map::{access_nested_map, NestedMapError};
//! use serde_json::json;
//!
//! let map = json!({"a": {"b": 2}});
//! assert_eq!(access_nested_map(&map, &["a", "b"]).unwrap(), &json!(2));
//!
//! let err = access_nested_map(&json!({"a": 1}), &["a", "b"]).unwrap_err();
//! assert_eq!(err, NestedMapError::KeyNotFound("b".to_string()));
//! ```

mod error;

pub use error::{NestedMapError, Result};

use serde_json::Value;

/// A container that can be indexed by a string key to reach a child of the same type.
///
/// `child` returns `None` both when `self` is not a mapping and when the key is absent;
/// [`access_nested_map`] reports either case the same way.
pub trait NestedMapping {
    fn child(&self, key: &str) -> Option<&Self>;
}

impl NestedMapping for Value {
    fn child(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }
}

/// Returns the value reached by indexing `map` with each key of `path` in order.
///
/// Fails with `KeyNotFound(key)` on the first key whose parent is not a mapping or does not
/// contain it. An empty path yields `map` itself.
pub fn access_nested_map<'a, M, K>(map: &'a M, path: &[K]) -> Result<&'a M>
where
    M: NestedMapping + ?Sized,
    K: AsRef<str>,
{
    let mut current = map;
    for key in path {
        let key = key.as_ref();
        current = current
            .child(key)
            .ok_or_else(|| NestedMapError::KeyNotFound(key.to_string()))?;
    }
    Ok(current)
}

/// Splits a dotted path (`"license.key"`) into its keys. Empty segments are dropped.
pub fn parse_dotted_path(path: &str) -> Vec<&str> {
    path.split('.').filter(|s| !s.is_empty()).collect()
}
