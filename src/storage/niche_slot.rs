use core::mem::{needs_drop, size_of, ManuallyDrop};

use super::Storage;
use crate::niche::Niche;

/// The niche layout: one region read either as `T` or as its sentinel view.
///
/// # Behavior
/// * **Empty:** the region's bytes equal `T::SENTINEL`.
/// * **Held:** the region holds a live `T`, whose bytes never equal the
///   sentinel (guaranteed by the [`Niche`] declaration).
///
/// There is no flag: `has_value` rereads the bytes as `T::Repr` and compares
/// them against the sentinel. That is what makes `Optional<T>` exactly as
/// large as `T`, and why a wrong niche declaration is undefined behavior
/// rather than a reportable error.
///
/// # Pseudo-code Implementation
///
/// ```text
/// EMPTY:          region.niche = SENTINEL
/// has_value:      region.niche != SENTINEL
/// emplace(v):     region.value = v
/// destroy:        region.niche = SENTINEL      // T has no drop glue
/// take_value:     v = read(region.value); region.niche = SENTINEL; v
/// ```
#[repr(C)]
pub union NicheSlot<T: Niche> {
    value: ManuallyDrop<T>,
    niche: T::Repr,
}

// The `Repr` view is a bit pattern that is never dereferenced, so thread
// safety follows `T` alone even when `Repr` is a raw pointer.
unsafe impl<T: Niche + Send> Send for NicheSlot<T> {}
unsafe impl<T: Niche + Sync> Sync for NicheSlot<T> {}

unsafe impl<T: Niche> Storage<T> for NicheSlot<T> {
    const EMPTY: Self = {
        assert!(
            size_of::<T>() == size_of::<T::Repr>(),
            "Niche::Repr must be exactly as large as the type it describes"
        );
        assert!(
            !needs_drop::<T>(),
            "niche-optimized types must not have drop glue"
        );
        NicheSlot {
            niche: T::SENTINEL,
        }
    };

    #[inline]
    fn has_value(&self) -> bool {
        // Both fields start at offset 0 and cover the same bytes.
        unsafe { self.niche != T::SENTINEL }
    }

    #[inline]
    fn emplace(&mut self, value: T) {
        debug_assert!(!self.has_value(), "emplace over a held value");
        self.value = ManuallyDrop::new(value);
        debug_assert!(
            self.has_value(),
            "emplaced value aliases the declared niche sentinel"
        );
    }

    #[inline]
    fn destroy(&mut self) {
        self.niche = T::SENTINEL;
    }

    #[inline]
    unsafe fn get_value(&self) -> &T {
        unsafe { &self.value }
    }

    #[inline]
    unsafe fn get_value_mut(&mut self) -> &mut T {
        unsafe { &mut self.value }
    }

    #[inline]
    unsafe fn take_value(&mut self) -> T {
        let value = unsafe { ManuallyDrop::take(&mut self.value) };
        self.niche = T::SENTINEL;
        value
    }
}
