use core::mem::{self, MaybeUninit};

use super::Storage;

/// The fallback layout: an explicit flag next to an uninitialized slot.
///
/// # Behavior
/// * **Empty:** `engaged == false`; the slot holds no constructed value.
/// * **Held:** `engaged == true`; the slot holds a live `T`.
///
/// This is a manual tagged union: `MaybeUninit` keeps the compiler from
/// assuming the slot is initialized or from dropping it on its own, and the
/// flag is the only source of truth about which state is active.
pub struct Tagged<T> {
    engaged: bool,
    slot: MaybeUninit<T>,
}

unsafe impl<T> Storage<T> for Tagged<T> {
    const EMPTY: Self = Tagged {
        engaged: false,
        slot: MaybeUninit::uninit(),
    };

    #[inline]
    fn has_value(&self) -> bool {
        self.engaged
    }

    #[inline]
    fn emplace(&mut self, value: T) {
        debug_assert!(!self.engaged, "emplace over a held value would leak it");
        self.slot.write(value);
        self.engaged = true;
    }

    #[inline]
    fn destroy(&mut self) {
        // Clear the flag first so a panicking destructor cannot run twice.
        if mem::replace(&mut self.engaged, false) {
            unsafe { self.slot.assume_init_drop() }
        }
    }

    #[inline]
    unsafe fn get_value(&self) -> &T {
        debug_assert!(self.engaged);
        unsafe { self.slot.assume_init_ref() }
    }

    #[inline]
    unsafe fn get_value_mut(&mut self) -> &mut T {
        debug_assert!(self.engaged);
        unsafe { self.slot.assume_init_mut() }
    }

    #[inline]
    unsafe fn take_value(&mut self) -> T {
        debug_assert!(self.engaged);
        self.engaged = false;
        unsafe { self.slot.assume_init_read() }
    }
}
