//! Storage strategies behind [`Optional`](crate::Optional).
//!
//! Every `Optional<T>` is a thin wrapper over exactly one storage type, picked
//! at compile time through [`Storable::Storage`]:
//!
//! | `T`                                 | Storage          | Size of `Optional<T>`   |
//! |-------------------------------------|------------------|-------------------------|
//! | `&'a U`, `&'a mut U`                | [`Pointer`]      | one reference           |
//! | declares a [`Niche`](crate::Niche)  | [`NicheSlot`]    | `size_of::<T>()`        |
//! | anything else                       | [`Tagged`]       | `T` plus a `bool` flag  |
//!
//! The storages only know how to answer "is a value held" and how to place,
//! reach and remove it. Ownership rules (dropping exactly once, never reading
//! an empty slot) are enforced one level up, by `Optional`.

mod niche_slot;
mod plain;
mod pointer;
mod tagged;

pub use niche_slot::NicheSlot;
pub use plain::Plain;
pub use pointer::Pointer;
pub use tagged::Tagged;

use std::borrow::Cow;
use std::cell::{Cell, OnceCell, RefCell};
use std::cmp::Reverse;
use std::collections::{
    BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque,
};
use std::marker::PhantomData;
use std::num::{Saturating, Wrapping};
use std::ops::{Range, RangeFrom, RangeInclusive, RangeTo, RangeToInclusive};
use std::pin::Pin;
use std::rc::{self, Rc};
use std::sync::{self, Arc, Mutex, OnceLock, RwLock};

use crate::Optional;

/// The narrow contract every storage strategy implements for a value type `T`.
///
/// # Safety
///
/// Implementors guarantee that:
/// * `EMPTY.has_value()` is `false`.
/// * After `emplace(v)`, `has_value()` is `true` and `get_value` yields `v`
///   until the next `take_value` or `destroy`.
/// * After `take_value` or `destroy`, `has_value()` is `false`.
/// * `destroy` drops a held value at most once and never touches an empty
///   slot's contents.
pub unsafe trait Storage<T>: Sized {
    /// The empty state.
    const EMPTY: Self;

    /// Returns `true` if a value is currently held.
    fn has_value(&self) -> bool;

    /// Places `value` into an empty slot.
    ///
    /// Emplacing over a held value is a caller error: it trips a debug
    /// assertion and otherwise leaks the previous value.
    fn emplace(&mut self, value: T);

    /// Drops the held value, if any. Calling it on an empty slot is a no-op.
    fn destroy(&mut self);

    /// # Safety
    /// `has_value()` must be `true`.
    unsafe fn get_value(&self) -> &T;

    /// # Safety
    /// `has_value()` must be `true`.
    unsafe fn get_value_mut(&mut self) -> &mut T;

    /// Moves the held value out, leaving the slot empty.
    ///
    /// # Safety
    /// `has_value()` must be `true`.
    unsafe fn take_value(&mut self) -> T;
}

/// Selects the storage strategy used by `Optional<Self>`.
///
/// References select [`Pointer`], types declared through
/// [`declare_niche!`](crate::declare_niche) select [`NicheSlot`], and every
/// other type selects [`Tagged`]. The crate covers the primitive and common
/// standard library types; downstream types opt in with
/// [`tagged_storage!`](crate::tagged_storage) or a niche declaration.
///
/// The orphan rule only lets a crate implement `Storable` for its own types.
/// A type from a third crate is wrapped in [`Plain`] instead.
pub trait Storable: Sized {
    type Storage: Storage<Self>;
}

/// Routes one or more types to the [`Tagged`] layout.
///
/// ```
/// use small_option::{tagged_storage, Optional};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Reading {
///     celsius: f32,
///     station: String,
/// }
///
/// tagged_storage!(Reading);
///
/// let mut last: Optional<Reading> = Optional::none();
/// last.insert(Reading { celsius: 21.5, station: "north".into() });
/// assert_eq!(last.as_ref().map(|r| r.celsius).unwrap(), 21.5);
/// ```
#[macro_export]
macro_rules! tagged_storage {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Storable for $ty {
                type Storage = $crate::storage::Tagged<$ty>;
            }
        )+
    };
}

// --- References ---

impl<'a, T: ?Sized> Storable for &'a T {
    type Storage = Pointer<&'a T>;
}

impl<'a, T: ?Sized> Storable for &'a mut T {
    type Storage = Pointer<&'a mut T>;
}

// --- Primitives ---

tagged_storage!(
    (),
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    std::ffi::OsString,
    std::ffi::CString,
    std::path::PathBuf,
    std::fs::File,
    std::time::Duration,
    std::time::Instant,
    std::time::SystemTime,
    std::thread::ThreadId,
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr,
    std::net::SocketAddrV4,
    std::net::SocketAddrV6,
    std::ops::RangeFull,
    std::sync::atomic::AtomicBool,
    std::sync::atomic::AtomicU32,
    std::sync::atomic::AtomicI32,
    std::sync::atomic::AtomicU64,
    std::sync::atomic::AtomicI64,
    std::sync::atomic::AtomicUsize,
    std::sync::atomic::AtomicIsize,
);

// --- Generic standard library types ---

impl<T: ?Sized> Storable for Box<T> {
    type Storage = Tagged<Box<T>>;
}

impl<T: ?Sized> Storable for Rc<T> {
    type Storage = Tagged<Rc<T>>;
}

impl<T: ?Sized> Storable for Arc<T> {
    type Storage = Tagged<Arc<T>>;
}

impl<T> Storable for Vec<T> {
    type Storage = Tagged<Vec<T>>;
}

impl<T> Storable for VecDeque<T> {
    type Storage = Tagged<VecDeque<T>>;
}

impl<K, V, S> Storable for HashMap<K, V, S> {
    type Storage = Tagged<HashMap<K, V, S>>;
}

impl<T, S> Storable for HashSet<T, S> {
    type Storage = Tagged<HashSet<T, S>>;
}

impl<K, V> Storable for BTreeMap<K, V> {
    type Storage = Tagged<BTreeMap<K, V>>;
}

impl<T> Storable for BTreeSet<T> {
    type Storage = Tagged<BTreeSet<T>>;
}

impl<T> Storable for BinaryHeap<T> {
    type Storage = Tagged<BinaryHeap<T>>;
}

impl<T> Storable for LinkedList<T> {
    type Storage = Tagged<LinkedList<T>>;
}

impl<T: ?Sized> Storable for rc::Weak<T> {
    type Storage = Tagged<rc::Weak<T>>;
}

impl<T: ?Sized> Storable for sync::Weak<T> {
    type Storage = Tagged<sync::Weak<T>>;
}

impl<P> Storable for Pin<P> {
    type Storage = Tagged<Pin<P>>;
}

impl<T: ?Sized> Storable for PhantomData<T> {
    type Storage = Tagged<PhantomData<T>>;
}

impl<T> Storable for Cell<T> {
    type Storage = Tagged<Cell<T>>;
}

impl<T> Storable for RefCell<T> {
    type Storage = Tagged<RefCell<T>>;
}

impl<T> Storable for OnceCell<T> {
    type Storage = Tagged<OnceCell<T>>;
}

impl<T> Storable for OnceLock<T> {
    type Storage = Tagged<OnceLock<T>>;
}

impl<T> Storable for Mutex<T> {
    type Storage = Tagged<Mutex<T>>;
}

impl<T> Storable for RwLock<T> {
    type Storage = Tagged<RwLock<T>>;
}

impl<T> Storable for Reverse<T> {
    type Storage = Tagged<Reverse<T>>;
}

impl<T> Storable for Wrapping<T> {
    type Storage = Tagged<Wrapping<T>>;
}

impl<T> Storable for Saturating<T> {
    type Storage = Tagged<Saturating<T>>;
}

impl<Idx> Storable for Range<Idx> {
    type Storage = Tagged<Range<Idx>>;
}

impl<Idx> Storable for RangeInclusive<Idx> {
    type Storage = Tagged<RangeInclusive<Idx>>;
}

impl<Idx> Storable for RangeFrom<Idx> {
    type Storage = Tagged<RangeFrom<Idx>>;
}

impl<Idx> Storable for RangeTo<Idx> {
    type Storage = Tagged<RangeTo<Idx>>;
}

impl<Idx> Storable for RangeToInclusive<Idx> {
    type Storage = Tagged<RangeToInclusive<Idx>>;
}

impl<'a, B: ?Sized + ToOwned> Storable for Cow<'a, B> {
    type Storage = Tagged<Cow<'a, B>>;
}

impl<T> Storable for Option<T> {
    type Storage = Tagged<Option<T>>;
}

impl<T, E> Storable for Result<T, E> {
    type Storage = Tagged<Result<T, E>>;
}

// Nesting is always tagged: the inner optional's empty state is a valid value.
impl<T: Storable> Storable for Optional<T> {
    type Storage = Tagged<Optional<T>>;
}

impl<T, const N: usize> Storable for [T; N] {
    type Storage = Tagged<[T; N]>;
}

macro_rules! tuple_storage {
    ($(($($name:ident),+))+) => {
        $(
            impl<$($name),+> Storable for ($($name,)+) {
                type Storage = Tagged<($($name,)+)>;
            }
        )+
    };
}

tuple_storage! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
    (A, B, C, D, E, F, G)
    (A, B, C, D, E, F, G, H)
    (A, B, C, D, E, F, G, H, I)
    (A, B, C, D, E, F, G, H, I, J)
    (A, B, C, D, E, F, G, H, I, J, K)
    (A, B, C, D, E, F, G, H, I, J, K, L)
}
