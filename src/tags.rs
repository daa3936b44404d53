//! Construction helpers that build an [`Optional`] without naming its type.
//!
//! ```
//! use small_option::{some, Optional, NONE};
//!
//! fn lookup(key: &str) -> Optional<u32> {
//!     match key {
//!         "answer" => some(42).into(),
//!         _ => NONE.into(),
//!     }
//! }
//!
//! assert_eq!(lookup("answer"), some(42));
//! assert_eq!(lookup("question"), NONE);
//! ```

use core::cmp::Ordering;

use crate::option::Optional;
use crate::storage::Storable;

/// Marker for "definitely empty". Converts into any `Optional<T>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NoneTag;

/// The empty marker.
pub const NONE: NoneTag = NoneTag;

/// Marker for "definitely holds `T`", with `T` inferred from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SomeTag<T>(pub T);

/// Wraps `value` in a [`SomeTag`].
#[inline]
pub fn some<T>(value: T) -> SomeTag<T> {
    SomeTag(value)
}

impl NoneTag {
    /// Returns `true` if `opt` is empty.
    pub fn matches<T: Storable>(&self, opt: &Optional<T>) -> bool {
        opt.is_none()
    }
}

impl<T> SomeTag<T> {
    /// Returns `true` if `opt` holds a value equal to the payload.
    pub fn matches<U: Storable>(&self, opt: &Optional<U>) -> bool
    where
        T: PartialEq<U>,
    {
        opt.as_option().is_some_and(|held| self.0 == *held)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Storable> From<NoneTag> for Optional<T> {
    #[inline]
    fn from(_: NoneTag) -> Self {
        Optional::NONE
    }
}

impl<T: Storable> From<SomeTag<T>> for Optional<T> {
    #[inline]
    fn from(tag: SomeTag<T>) -> Self {
        Optional::some(tag.0)
    }
}

// --- Comparisons against Optional ---

impl<T: Storable> PartialEq<NoneTag> for Optional<T> {
    fn eq(&self, _: &NoneTag) -> bool {
        self.is_none()
    }
}

impl<T: Storable> PartialEq<Optional<T>> for NoneTag {
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_none()
    }
}

impl<T: Storable> PartialOrd<NoneTag> for Optional<T> {
    fn partial_cmp(&self, _: &NoneTag) -> Option<Ordering> {
        Some(if self.is_some() {
            Ordering::Greater
        } else {
            Ordering::Equal
        })
    }
}

impl<T: Storable> PartialOrd<Optional<T>> for NoneTag {
    fn partial_cmp(&self, other: &Optional<T>) -> Option<Ordering> {
        Some(if other.is_some() {
            Ordering::Less
        } else {
            Ordering::Equal
        })
    }
}

impl<T: Storable + PartialEq<U>, U> PartialEq<SomeTag<U>> for Optional<T> {
    fn eq(&self, other: &SomeTag<U>) -> bool {
        self.as_option().is_some_and(|held| *held == other.0)
    }
}

impl<T: PartialEq<U>, U: Storable> PartialEq<Optional<U>> for SomeTag<T> {
    fn eq(&self, other: &Optional<U>) -> bool {
        self.matches(other)
    }
}

impl<T: Storable + PartialOrd<U>, U> PartialOrd<SomeTag<U>> for Optional<T> {
    fn partial_cmp(&self, other: &SomeTag<U>) -> Option<Ordering> {
        match self.as_option() {
            Some(held) => held.partial_cmp(&other.0),
            None => Some(Ordering::Less),
        }
    }
}

impl<T: PartialOrd<U>, U: Storable> PartialOrd<Optional<U>> for SomeTag<T> {
    fn partial_cmp(&self, other: &Optional<U>) -> Option<Ordering> {
        match other.as_option() {
            Some(held) => self.0.partial_cmp(held),
            None => Some(Ordering::Greater),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_convert() {
        let empty: Optional<String> = NONE.into();
        assert!(empty.is_none());

        let held: Optional<String> = some(String::from("x")).into();
        assert_eq!(held.as_option().map(String::as_str), Some("x"));

        let flag: Optional<bool> = some(true).into();
        assert_eq!(flag, some(true));
    }

    #[test]
    fn test_tags_matches() {
        let held = Optional::some(3u8);
        let empty = Optional::<u8>::none();
        assert!(NONE.matches(&empty));
        assert!(!NONE.matches(&held));
        assert!(some(3u8).matches(&held));
        assert!(!some(4u8).matches(&held));
        assert!(!some(3u8).matches(&empty));
    }

    #[test]
    fn test_tags_ordering() {
        let held = Optional::some(3i32);
        let empty = Optional::<i32>::none();

        assert!(NONE < held);
        assert!(held > NONE);
        assert!(NONE == empty);
        assert!(empty == NONE);
        assert!(empty < some(i32::MIN));
        assert!(some(5) > held);
        assert!(held < some(5));
        assert!(some(3) == held);
        assert_eq!(NONE.partial_cmp(&empty), Some(Ordering::Equal));
    }

    #[test]
    fn test_tags_into_inner() {
        assert_eq!(some("payload").into_inner(), "payload");
        assert_eq!(NoneTag::default(), NONE);
    }
}
