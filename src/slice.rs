#![cfg(feature = "slice")]
//! Borrowed contiguous views whose empty optional costs nothing extra.
//!
//! [`Slice`] (shared) and [`SliceMut`] (unique) store a non-null data pointer
//! and a length. Because a live view's pointer is never null (even for an
//! empty view), the pair `(null, 0)` is free to mean "no slice", so
//! `Optional<Slice<'_, T>>` and `Optional<SliceMut<'_, T>>` are exactly two
//! words.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};

use crate::array::Array;
use crate::error::OutOfBoundsError;
use crate::niche::Niche;
use crate::option::Optional;
use crate::storage::{NicheSlot, Storable};

/// An immutable view into `len` consecutive `T`s borrowed for `'a`.
///
/// # Example
/// ```
/// use small_option::Slice;
///
/// let samples = vec![3, 1, 4, 1, 5];
/// let view = Slice::from(&samples);
///
/// assert_eq!(view.first().copied().unwrap(), 3);
/// let (head, tail) = view.split_at(2).unwrap();
/// assert_eq!(head.as_slice(), &[3, 1]);
/// assert_eq!(tail.len(), 3);
/// assert!(view.split_at(6).is_none());
/// ```
#[repr(C)]
pub struct Slice<'a, T> {
    data: NonNull<T>,
    len: usize,
    _marker: PhantomData<&'a [T]>,
}

/// Raw `(pointer, length)` view of a [`Slice`] or [`SliceMut`], used as
/// their niche representation.
#[repr(C)]
pub struct RawSlice<T> {
    data: *const T,
    len: usize,
}

impl<T> Clone for RawSlice<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawSlice<T> {}

impl<T> PartialEq for RawSlice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.len == other.len
    }
}

impl<T> Eq for RawSlice<T> {}

// Same guarantees as `&'a [T]`.
unsafe impl<T: Sync> Send for Slice<'_, T> {}
unsafe impl<T: Sync> Sync for Slice<'_, T> {}

impl<'a, T> Slice<'a, T> {
    #[inline]
    pub fn new(items: &'a [T]) -> Self {
        Slice {
            data: NonNull::from(items).cast(),
            len: items.len(),
            _marker: PhantomData,
        }
    }

    /// A view of no elements. Its pointer is dangling but never null.
    #[inline]
    pub const fn empty() -> Self {
        Slice {
            data: NonNull::dangling(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the viewed elements with the full borrow lifetime.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        // Built from a `&'a [T]` (or empty with a dangling, aligned pointer).
        unsafe { core::slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get_ref(&self, index: usize) -> Optional<&'a T> {
        Optional::from_option(self.as_slice().get(index))
    }

    pub fn at(&self, index: usize) -> Result<&'a T, OutOfBoundsError> {
        self.as_slice().get(index).ok_or(OutOfBoundsError {
            index,
            len: self.len,
        })
    }

    #[inline]
    pub fn first(&self) -> Optional<&'a T> {
        Optional::from_option(self.as_slice().first())
    }

    #[inline]
    pub fn last(&self) -> Optional<&'a T> {
        Optional::from_option(self.as_slice().last())
    }

    /// Splits into `[0, mid)` and `[mid, len)`; empty if `mid > len`.
    pub fn split_at(&self, mid: usize) -> Optional<(Slice<'a, T>, Slice<'a, T>)> {
        if mid > self.len {
            return Optional::NONE;
        }
        let (head, tail) = self.as_slice().split_at(mid);
        Optional::some((Slice::new(head), Slice::new(tail)))
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<T> Default for Slice<'_, T> {
    fn default() -> Self {
        Slice::empty()
    }
}

impl<T> Deref for Slice<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Slice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for Slice<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Slice<'_, T> {}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Slice::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Slice<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Slice::new(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Slice<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Slice::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a Array<T, N>> for Slice<'a, T> {
    fn from(items: &'a Array<T, N>) -> Self {
        Slice::new(items.as_slice())
    }
}

impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

unsafe impl<'a, T> Niche for Slice<'a, T> {
    type Repr = RawSlice<T>;
    const SENTINEL: RawSlice<T> = RawSlice {
        data: ptr::null(),
        len: 0,
    };
}

impl<'a, T> Storable for Slice<'a, T> {
    type Storage = NicheSlot<Slice<'a, T>>;
}

/// A mutable view into `len` consecutive `T`s borrowed uniquely for `'a`.
///
/// ```
/// use small_option::SliceMut;
///
/// let mut readings = [4, 8, 15, 16];
/// let mut view = SliceMut::from(&mut readings);
/// if let Some(x) = view.get_mut(1).into_option() {
///     *x *= 10;
/// }
/// let (low, mut high) = view.split_at_mut(2).unwrap();
/// high[0] = low[1];
/// assert_eq!(readings, [4, 80, 80, 16]);
/// ```
#[repr(C)]
pub struct SliceMut<'a, T> {
    data: NonNull<T>,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

// Same guarantees as `&'a mut [T]`.
unsafe impl<T: Send> Send for SliceMut<'_, T> {}
unsafe impl<T: Sync> Sync for SliceMut<'_, T> {}

impl<'a, T> SliceMut<'a, T> {
    #[inline]
    pub fn new(items: &'a mut [T]) -> Self {
        SliceMut {
            len: items.len(),
            data: NonNull::from(items).cast(),
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn empty() -> Self {
        SliceMut {
            data: NonNull::dangling(),
            len: 0,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Gives up the view, returning the borrow with its full lifetime.
    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        unsafe { core::slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Borrows as a shared [`Slice`] for a shorter lifetime.
    #[inline]
    pub fn as_const(&self) -> Slice<'_, T> {
        Slice::new(self.as_slice())
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get_ref(&self, index: usize) -> Optional<&T> {
        Optional::from_option(self.as_slice().get(index))
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Optional<&mut T> {
        Optional::from_option(self.as_mut_slice().get_mut(index))
    }

    pub fn at(&self, index: usize) -> Result<&T, OutOfBoundsError> {
        let len = self.len;
        self.as_slice().get(index).ok_or(OutOfBoundsError { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfBoundsError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(OutOfBoundsError { index, len })
    }

    /// Splits into two disjoint views `[0, mid)` and `[mid, len)`; empty if
    /// `mid > len`.
    pub fn split_at_mut(self, mid: usize) -> Optional<(SliceMut<'a, T>, SliceMut<'a, T>)> {
        if mid > self.len {
            return Optional::NONE;
        }
        let (head, tail) = self.into_slice().split_at_mut(mid);
        Optional::some((SliceMut::new(head), SliceMut::new(tail)))
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Default for SliceMut<'_, T> {
    fn default() -> Self {
        SliceMut::empty()
    }
}

impl<T> Deref for SliceMut<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SliceMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SliceMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for SliceMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SliceMut<'_, T> {}

impl<'a, T> From<&'a mut [T]> for SliceMut<'a, T> {
    fn from(items: &'a mut [T]) -> Self {
        SliceMut::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for SliceMut<'a, T> {
    fn from(items: &'a mut [T; N]) -> Self {
        SliceMut::new(items)
    }
}

impl<'a, T> From<&'a mut Vec<T>> for SliceMut<'a, T> {
    fn from(items: &'a mut Vec<T>) -> Self {
        SliceMut::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a mut Array<T, N>> for SliceMut<'a, T> {
    fn from(items: &'a mut Array<T, N>) -> Self {
        SliceMut::new(items.as_mut_slice())
    }
}

impl<'a, T> From<SliceMut<'a, T>> for Slice<'a, T> {
    fn from(view: SliceMut<'a, T>) -> Self {
        Slice::new(view.into_slice())
    }
}

impl<'a, T> IntoIterator for SliceMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_slice().iter_mut()
    }
}

unsafe impl<'a, T> Niche for SliceMut<'a, T> {
    type Repr = RawSlice<T>;
    const SENTINEL: RawSlice<T> = RawSlice {
        data: ptr::null(),
        len: 0,
    };
}

impl<'a, T> Storable for SliceMut<'a, T> {
    type Storage = NicheSlot<SliceMut<'a, T>>;
}
