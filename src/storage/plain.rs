use core::fmt;
use core::ops::{Deref, DerefMut};

use super::{Storable, Tagged};

/// Routes any type to the [`Tagged`] layout.
///
/// A crate can only implement [`Storable`] for its own types, so a type
/// from a third crate that the crate does not already cover is wrapped
/// instead. `Plain<T>` has the layout of `T` and derefs to it.
///
/// ```
/// use small_option::{Optional, Plain};
///
/// // `Layout` lives in `std`, so a downstream crate cannot select a
/// // storage for it directly.
/// let layout = std::alloc::Layout::new::<u64>();
/// let o = Optional::some(Plain(layout));
/// assert_eq!(o.map(|p| p.size()).unwrap(), 8);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Plain<T>(pub T);

impl<T> Plain<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Plain<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Plain<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Plain<T> {
    #[inline]
    fn from(value: T) -> Self {
        Plain(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Plain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> Storable for Plain<T> {
    type Storage = Tagged<Plain<T>>;
}
