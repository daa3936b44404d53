//! The niche registry: how a type declares a bit pattern that can mean "absent".
//!
//! A niche is a bit pattern no valid value of a type ever has. `bool` only
//! uses `0` and `1`, so `2` is free; `char` stops at `0x10FFFF`; a reference
//! is never null. When a type declares one of those patterns through
//! [`Niche`], an [`Optional`](crate::Optional) of it stores the pattern in
//! place of a value instead of carrying a separate flag, and ends up exactly
//! as large as the type itself.
//!
//! Declarations are per type and static. There is nothing to register at run
//! time, and a type without a declaration simply falls back to the
//! [`Tagged`](crate::storage::Tagged) layout.

use core::cmp::Ordering;
use core::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};

/// A type with a bit pattern that no valid value of it ever takes.
///
/// `Repr` is a plain view of the same bytes and `SENTINEL` is the pattern
/// reserved for "absent". The niche layout ([`NicheSlot`]) writes `SENTINEL`
/// when empty and decides presence by rereading its bytes as `Repr`.
///
/// Two properties are checked when the layout is first instantiated, as
/// compile-time errors:
/// * `Repr` has exactly the size of `Self`.
/// * `Self` has no drop glue (overwriting it with the sentinel must never
///   skip a destructor).
///
/// # Safety
///
/// Implementors promise that:
/// * `Self` contains no padding bytes, so every byte of a live value can be
///   read back as `Repr`.
/// * `Repr`'s `PartialEq` is equivalent to comparing the bytes of its
///   representation.
/// * No value of `Self` that can be legally constructed, reinterpreted as
///   `Repr`, compares equal to `SENTINEL`.
///
/// Breaking any of these makes [`Optional::is_some`](crate::Optional::is_some)
/// lie, which is undefined behavior.
///
/// [`NicheSlot`]: crate::storage::NicheSlot
pub unsafe trait Niche: Sized {
    /// Same-sized, byte-comparable view of `Self`.
    type Repr: Copy + Eq;

    /// The bit pattern that means "absent".
    const SENTINEL: Self::Repr;
}

/// Declares a niche for one or more non-generic types and routes their
/// [`Optional`](crate::Optional) to the niche layout.
///
/// Expands to an `unsafe impl Niche` plus an `impl Storable` selecting
/// [`NicheSlot`](crate::storage::NicheSlot). The `unsafe` keyword is part of
/// the syntax: the caller vouches for the contract documented on [`Niche`].
///
/// ```
/// use small_option::{declare_niche, Optional};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// #[repr(u8)]
/// enum Suit {
///     Clubs,
///     Diamonds,
///     Hearts,
///     Spades,
/// }
///
/// declare_niche! {
///     unsafe Suit: u8 = 0xFF;
/// }
///
/// let hand: Optional<Suit> = Optional::some(Suit::Hearts);
/// assert_eq!(core::mem::size_of_val(&hand), 1);
/// assert_eq!(hand.unwrap(), Suit::Hearts);
/// ```
///
/// Generic types implement [`Niche`] and [`Storable`](crate::Storable) by
/// hand, the way [`Ref`](crate::Ref) does.
#[macro_export]
macro_rules! declare_niche {
    ($(unsafe $ty:ty : $repr:ty = $sentinel:expr;)+) => {
        $(
            unsafe impl $crate::Niche for $ty {
                type Repr = $repr;
                const SENTINEL: $repr = $sentinel;
            }

            impl $crate::Storable for $ty {
                type Storage = $crate::storage::NicheSlot<$ty>;
            }
        )+
    };
}

declare_niche! {
    unsafe bool: u8 = 2;
    unsafe char: u32 = 0x11_0000;
    unsafe Ordering: i8 = 2;
}

// Zero is the one value a `NonZero*` can never hold.
declare_niche! {
    unsafe NonZeroU8: u8 = 0;
    unsafe NonZeroU16: u16 = 0;
    unsafe NonZeroU32: u32 = 0;
    unsafe NonZeroU64: u64 = 0;
    unsafe NonZeroU128: u128 = 0;
    unsafe NonZeroUsize: usize = 0;
    unsafe NonZeroI8: i8 = 0;
    unsafe NonZeroI16: i16 = 0;
    unsafe NonZeroI32: i32 = 0;
    unsafe NonZeroI64: i64 = 0;
    unsafe NonZeroI128: i128 = 0;
    unsafe NonZeroIsize: isize = 0;
}
