//! Fixed-capacity strings for the address and port fields.

use serde::{Serialize, Serializer};

/// A string that never holds more than `N` bytes.
///
/// Longer input is truncated to at most `N` bytes, backing off to the
/// last complete UTF-8 character so the stored text stays valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundedString<const N: usize> {
    inner: String,
}

impl<const N: usize> BoundedString<N> {
    /// Maximum length in bytes.
    pub const CAPACITY: usize = N;

    /// Create an empty string.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Create from `s`, truncating to the capacity.
    #[must_use]
    pub fn from_truncated(s: &str) -> Self {
        let mut bounded = Self::new();
        bounded.set(s);
        bounded
    }

    /// Replace the contents with `s`, truncating to the capacity.
    ///
    /// Returns `true` if `s` had to be truncated.
    pub fn set(&mut self, s: &str) -> bool {
        let end = truncation_point(s, N);
        self.inner.clear();
        self.inner.push_str(&s[..end]);
        end < s.len()
    }

    /// The stored text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Largest char boundary in `s` that is `<= max`.
fn truncation_point(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

impl<const N: usize> AsRef<str> for BoundedString<N> {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl<const N: usize> std::fmt::Display for BoundedString<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

impl<const N: usize> PartialEq<str> for BoundedString<N> {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl<const N: usize> Serialize for BoundedString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}
