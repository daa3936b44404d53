//! Non-owning reference wrappers that declare the null pointer as their niche.
//!
//! [`Ref`] and [`RefMut`] behave like `&'a T` and `&'a mut T`, but go through
//! the [`Niche`] protocol instead of the built-in reference layout: their
//! sentinel is the null pointer, which no reference can ever be. An
//! `Optional<Ref<'_, T>>` is therefore one pointer wide.

use core::fmt;
use core::ops::{Deref, DerefMut};
use core::ptr;

use crate::niche::Niche;
use crate::storage::{NicheSlot, Storable};

/// A shared, non-owning reference.
///
/// Like `&'a T`, it can only be built from a place that outlives it:
///
/// ```compile_fail
/// use small_option::Ref;
///
/// let r = Ref::new(&String::from("temporary"));
/// assert_eq!(r.len(), 9);
/// ```
#[repr(transparent)]
pub struct Ref<'a, T> {
    target: &'a T,
}

impl<'a, T> Ref<'a, T> {
    #[inline]
    pub const fn new(target: &'a T) -> Self {
        Ref { target }
    }

    /// Returns the underlying reference with its full lifetime.
    #[inline]
    pub const fn get(self) -> &'a T {
        self.target
    }

    #[inline]
    pub fn as_ptr(self) -> *const T {
        self.target
    }
}

impl<T> Clone for Ref<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Ref<'_, T> {}

impl<T> Deref for Ref<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.target
    }
}

impl<'a, T> From<&'a T> for Ref<'a, T> {
    fn from(target: &'a T) -> Self {
        Ref::new(target)
    }
}

impl<T: fmt::Debug> fmt::Debug for Ref<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(self.target).finish()
    }
}

impl<T: PartialEq> PartialEq for Ref<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        *self.target == *other.target
    }
}

impl<T: Eq> Eq for Ref<'_, T> {}

unsafe impl<'a, T> Niche for Ref<'a, T> {
    type Repr = *const T;
    const SENTINEL: *const T = ptr::null();
}

impl<'a, T> Storable for Ref<'a, T> {
    type Storage = NicheSlot<Ref<'a, T>>;
}

/// A unique, non-owning reference.
///
/// It cannot be built from a shared reference or from a temporary:
///
/// ```compile_fail
/// use small_option::RefMut;
///
/// let value = 5;
/// let r = RefMut::new(&value);
/// ```
#[repr(transparent)]
pub struct RefMut<'a, T> {
    target: &'a mut T,
}

impl<'a, T> RefMut<'a, T> {
    #[inline]
    pub fn new(target: &'a mut T) -> Self {
        RefMut { target }
    }

    /// Borrows as a shared [`Ref`] for a shorter lifetime.
    #[inline]
    pub fn as_ref(&self) -> Ref<'_, T> {
        Ref::new(&*self.target)
    }

    /// Reborrows for a shorter lifetime, leaving `self` usable afterwards.
    #[inline]
    pub fn reborrow(&mut self) -> RefMut<'_, T> {
        RefMut::new(&mut *self.target)
    }

    /// Downgrades to a shared [`Ref`] with the full lifetime.
    #[inline]
    pub fn into_ref(self) -> Ref<'a, T> {
        Ref::new(self.target)
    }

    #[inline]
    pub fn into_inner(self) -> &'a mut T {
        self.target
    }

    #[inline]
    pub fn as_ptr(&mut self) -> *mut T {
        &mut *self.target
    }
}

impl<T> Deref for RefMut<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &*self.target
    }
}

impl<T> DerefMut for RefMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.target
    }
}

impl<'a, T> From<&'a mut T> for RefMut<'a, T> {
    fn from(target: &'a mut T) -> Self {
        RefMut::new(target)
    }
}

impl<'a, T> From<RefMut<'a, T>> for Ref<'a, T> {
    fn from(target: RefMut<'a, T>) -> Self {
        target.into_ref()
    }
}

impl<T: fmt::Debug> fmt::Debug for RefMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefMut").field(&*self.target).finish()
    }
}

unsafe impl<'a, T> Niche for RefMut<'a, T> {
    type Repr = *mut T;
    const SENTINEL: *mut T = ptr::null_mut();
}

impl<'a, T> Storable for RefMut<'a, T> {
    type Storage = NicheSlot<RefMut<'a, T>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Optional;
    use core::mem::size_of;

    #[test]
    fn test_reference_niche_sizes() {
        assert_eq!(size_of::<Optional<Ref<'_, u64>>>(), size_of::<*const u64>());
        assert_eq!(size_of::<Optional<RefMut<'_, u64>>>(), size_of::<*mut u64>());
        assert_eq!(
            size_of::<Optional<Ref<'_, String>>>(),
            size_of::<Ref<'_, String>>()
        );
    }

    #[test]
    fn test_reference_ref_binds_named_variable() {
        let value = String::from("bound");
        let o = Optional::some(Ref::new(&value));
        assert!(o.is_some());
        let r = o.unwrap();
        assert!(ptr::eq(r.as_ptr(), &value));
        assert_eq!(r.len(), 5);

        let empty: Optional<Ref<'_, String>> = Optional::none();
        assert!(empty.is_none());
        let raw: *const String = unsafe { core::mem::transmute(empty) };
        assert!(raw.is_null());
    }

    #[test]
    fn test_reference_ref_mut_writes_through() {
        let mut counter = 0u32;
        {
            let mut o = Optional::some(RefMut::new(&mut counter));
            if let Some(r) = o.as_option_mut() {
                **r += 2;
            }
            let mut r = o.unwrap();
            *r.reborrow() += 1;
            assert_eq!(*r.as_ref(), 3);
        }
        assert_eq!(counter, 3);
    }

    #[test]
    fn test_reference_ref_mut_downgrade() {
        let mut word = String::from("abc");
        let shared: Ref<'_, String> = RefMut::from(&mut word).into();
        assert_eq!(shared.get(), "abc");
        assert_eq!(format!("{:?}", shared), "Ref(\"abc\")");

        let mut n = 1;
        let r = RefMut::new(&mut n);
        assert_eq!(format!("{:?}", r), "RefMut(1)");
        *r.into_inner() = 4;
        assert_eq!(n, 4);
    }

    #[test]
    fn test_reference_ref_copy_and_eq() {
        let a = 7;
        let b = 7;
        let ra = Ref::new(&a);
        let copy = ra;
        assert_eq!(ra, copy);
        assert_eq!(ra, Ref::from(&b));
        assert_eq!(*ra, 7);
    }

    #[test]
    fn test_reference_optional_is_send_for_sync_targets() {
        fn assert_send<S: Send>(_: &S) {}
        let value = 1u8;
        let o = Optional::some(Ref::new(&value));
        assert_send(&o);
    }
}
