use core::mem::size_of;

use super::Storage;

/// The reference layout: a single pointer whose null value means "absent".
///
/// `R` is `&'a T` or `&'a mut T`. The field is an `Option<R>`, which the
/// language guarantees to be represented as a possibly-null pointer, so the
/// whole storage is exactly one reference wide. The referent is borrowed,
/// never owned: `destroy` only forgets the address.
pub struct Pointer<R> {
    target: Option<R>,
}

unsafe impl<'a, T: ?Sized> Storage<&'a T> for Pointer<&'a T> {
    const EMPTY: Self = {
        assert!(size_of::<Self>() == size_of::<&'a T>());
        Pointer { target: None }
    };

    #[inline]
    fn has_value(&self) -> bool {
        self.target.is_some()
    }

    #[inline]
    fn emplace(&mut self, value: &'a T) {
        debug_assert!(self.target.is_none(), "emplace over a bound reference");
        self.target = Some(value);
    }

    #[inline]
    fn destroy(&mut self) {
        self.target = None;
    }

    #[inline]
    unsafe fn get_value(&self) -> &&'a T {
        unsafe { self.target.as_ref().unwrap_unchecked() }
    }

    #[inline]
    unsafe fn get_value_mut(&mut self) -> &mut &'a T {
        unsafe { self.target.as_mut().unwrap_unchecked() }
    }

    #[inline]
    unsafe fn take_value(&mut self) -> &'a T {
        unsafe { self.target.take().unwrap_unchecked() }
    }
}

unsafe impl<'a, T: ?Sized> Storage<&'a mut T> for Pointer<&'a mut T> {
    const EMPTY: Self = {
        assert!(size_of::<Self>() == size_of::<&'a mut T>());
        Pointer { target: None }
    };

    #[inline]
    fn has_value(&self) -> bool {
        self.target.is_some()
    }

    #[inline]
    fn emplace(&mut self, value: &'a mut T) {
        debug_assert!(self.target.is_none(), "emplace over a bound reference");
        self.target = Some(value);
    }

    #[inline]
    fn destroy(&mut self) {
        self.target = None;
    }

    #[inline]
    unsafe fn get_value(&self) -> &&'a mut T {
        unsafe { self.target.as_ref().unwrap_unchecked() }
    }

    #[inline]
    unsafe fn get_value_mut(&mut self) -> &mut &'a mut T {
        unsafe { self.target.as_mut().unwrap_unchecked() }
    }

    #[inline]
    unsafe fn take_value(&mut self) -> &'a mut T {
        unsafe { self.target.take().unwrap_unchecked() }
    }
}
