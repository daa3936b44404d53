//! Conversions between [`Optional`] and the standard library's [`Option`].
//!
//! The bridge is lossless in both directions: absence maps to `None`,
//! presence to `Some`, and the payload is moved (or borrowed) as is.

use crate::option::Optional;
use crate::storage::{Storable, Storage};

impl<T: Storable> Optional<T> {
    /// Builds an optional from a standard [`Option`].
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::NONE,
        }
    }

    /// Moves the state out into a standard [`Option`].
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        if self.storage.has_value() {
            Some(unsafe { self.storage.take_value() })
        } else {
            None
        }
    }

    /// Borrows the held value as a standard [`Option`].
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        if self.storage.has_value() {
            Some(unsafe { self.storage.get_value() })
        } else {
            None
        }
    }

    /// Mutably borrows the held value as a standard [`Option`].
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        if self.storage.has_value() {
            Some(unsafe { self.storage.get_value_mut() })
        } else {
            None
        }
    }
}

impl<T: Storable> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T: Storable> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
