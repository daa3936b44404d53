#![cfg(feature = "array")]
//! Fixed-size sequence with checked and optional element access.
//!
//! Provides [`Array`], a transparent wrapper over `[T; N]`. Besides the full
//! slice API (through `Deref<Target = [T]>`), it offers three ways to reach an
//! element, picked by how the caller wants to handle a bad index:
//!
//! * [`Array::at`] returns a [`Result`] carrying an [`OutOfBoundsError`].
//! * [`Array::get_ref`] / [`Array::get_mut`] return an [`Optional`] reference,
//!   which costs no more than a bare pointer.
//! * [`Array::element`] takes the index as a const parameter and rejects an
//!   out-of-range index when the program is built.

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::error::OutOfBoundsError;
use crate::option::Optional;
use crate::storage::{Storable, Tagged};

/// A fixed-size array of `N` elements.
///
/// # Overview
/// `Array<T, N>` has exactly the layout of `[T; N]`. It is `Copy` whenever
/// `T` is, and compares, orders and hashes element by element.
///
/// # Example
/// ```
/// use small_option::Array;
///
/// let mut temps = Array::new([18, 21, 19]);
/// assert_eq!(temps.at(1), Ok(&21));
/// assert!(temps.at(3).is_err());
///
/// if let Some(t) = temps.get_mut(2).into_option() {
///     *t += 1;
/// }
/// assert_eq!(*temps.element::<2>(), 20);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Array<T, const N: usize>([T; N]);

impl<T, const N: usize> Array<T, N> {
    #[inline]
    pub const fn new(items: [T; N]) -> Self {
        Array(items)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Unwraps the underlying `[T; N]`.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.0
    }

    /// Exchanges the contents of two arrays of the same shape.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.0, &mut other.0);
    }

    /// Returns the element at `index`, or an error naming the index and length.
    pub fn at(&self, index: usize) -> Result<&T, OutOfBoundsError> {
        self.0.get(index).ok_or(OutOfBoundsError { index, len: N })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfBoundsError> {
        self.0.get_mut(index).ok_or(OutOfBoundsError { index, len: N })
    }

    /// Returns a reference to the element at `index`, or an empty optional.
    #[inline]
    pub fn get_ref(&self, index: usize) -> Optional<&T> {
        Optional::from_option(self.0.get(index))
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Optional<&mut T> {
        Optional::from_option(self.0.get_mut(index))
    }

    /// Returns the element at the constant position `I`.
    ///
    /// An index past the end fails to build:
    ///
    /// ```compile_fail
    /// use small_option::Array;
    ///
    /// let pair = Array::new([1, 2]);
    /// let _ = pair.element::<2>();
    /// ```
    #[inline]
    pub fn element<const I: usize>(&self) -> &T {
        const { assert!(I < N, "element index out of bounds") };
        &self.0[I]
    }

    #[inline]
    pub fn element_mut<const I: usize>(&mut self) -> &mut T {
        const { assert!(I < N, "element index out of bounds") };
        &mut self.0[I]
    }
}

impl<T, const N: usize> Deref for Array<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> DerefMut for Array<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Array<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        Array(items)
    }
}

impl<T, const N: usize> From<Array<T, N>> for [T; N] {
    #[inline]
    fn from(array: Array<T, N>) -> Self {
        array.0
    }
}

// `[T; N]: Default` is only implemented up to N = 32.
impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Array(core::array::from_fn(|_| T::default()))
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Array<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T, const N: usize> Storable for Array<T, N> {
    type Storage = Tagged<Array<T, N>>;
}
