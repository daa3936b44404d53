use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem;
use core::ops::{Deref, DerefMut};

use crate::error::EmptyAccessError;
use crate::storage::{Storable, Storage};

/// An optional value whose layout is chosen at compile time.
///
/// `Optional<T>` is always in exactly one of two states: empty, or holding a
/// value of type `T`. How that state is stored depends on `T` (see
/// [`storage`](crate::storage)): references and types with a declared
/// [`Niche`](crate::Niche) cost nothing beyond `T` itself, everything else
/// pays for a flag.
///
/// # Behavior
/// * **Construction:** [`none`](Self::none) / `Default` start empty,
///   [`some`](Self::some) / `From<T>` start holding a value.
/// * **Access:** [`try_unwrap`](Self::try_unwrap) is the checked accessor and
///   the only operation that reports a failure ([`EmptyAccessError`]).
///   The `unsafe` `*_unchecked` accessors skip the check.
/// * **Ownership:** a held object is dropped exactly once, by
///   [`reset`](Self::reset), by reassignment, or when the `Optional` is
///   dropped. A held reference is only forgotten, never dropped.
/// * **Comparison:** empty is less than any held value; two held values
///   compare by their own order. The storage strategy never shows through.
///
/// References cannot outlive what they point to, so an optional reference
/// can never be bound to a temporary that dies first:
///
/// ```compile_fail
/// use small_option::Optional;
///
/// let held: Optional<&String>;
/// {
///     let temp = String::from("gone");
///     held = Optional::some(&temp);
/// }
/// assert!(held.is_some());
/// ```
///
/// ```compile_fail
/// use small_option::Optional;
///
/// let held = Optional::some(&String::from("temporary"));
/// assert!(held.is_some());
/// ```
///
/// Unlike `Option<&'a T>`, an `Optional<&'a T>` does not shrink its lifetime
/// implicitly: the layout is picked through an associated type, which makes
/// `Optional` invariant in `'a`. Use [`shorten`](Optional::shorten) where
/// `Option` would coerce on its own:
///
/// ```
/// use small_option::Optional;
///
/// fn pick<'a>(local: &'a str, fallback: Optional<&'static str>) -> Optional<&'a str> {
///     if local.is_empty() {
///         fallback.shorten()
///     } else {
///         Optional::some(local)
///     }
/// }
///
/// assert_eq!(pick("", Optional::some("default")), Optional::some("default"));
/// ```
#[repr(transparent)]
pub struct Optional<T: Storable> {
    pub(crate) storage: T::Storage,
}

impl<T: Storable> Optional<T> {
    /// The empty optional.
    pub const NONE: Self = Optional {
        storage: <T::Storage as Storage<T>>::EMPTY,
    };

    /// Creates an empty optional.
    #[inline]
    pub const fn none() -> Self {
        Self::NONE
    }

    /// Creates an optional holding `value`.
    #[inline]
    pub fn some(value: T) -> Self {
        let mut this = Self::NONE;
        this.storage.emplace(value);
        this
    }

    // --- Inspection ---

    #[inline]
    pub fn is_some(&self) -> bool {
        self.storage.has_value()
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        !self.storage.has_value()
    }

    pub fn is_some_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self.into_option() {
            Some(value) => f(value),
            None => false,
        }
    }

    pub fn is_none_or(self, f: impl FnOnce(T) -> bool) -> bool {
        match self.into_option() {
            Some(value) => f(value),
            None => true,
        }
    }

    /// Borrows the held value as an `Optional<&T>`.
    pub fn as_ref(&self) -> Optional<&T> {
        match self.as_option() {
            Some(value) => Optional::some(value),
            None => Optional::none(),
        }
    }

    /// Mutably borrows the held value as an `Optional<&mut T>`.
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self.as_option_mut() {
            Some(value) => Optional::some(value),
            None => Optional::none(),
        }
    }

    pub fn as_deref(&self) -> Optional<&T::Target>
    where
        T: Deref,
    {
        match self.as_option() {
            Some(value) => Optional::some(value.deref()),
            None => Optional::none(),
        }
    }

    pub fn as_deref_mut(&mut self) -> Optional<&mut T::Target>
    where
        T: DerefMut,
    {
        match self.as_option_mut() {
            Some(value) => Optional::some(value.deref_mut()),
            None => Optional::none(),
        }
    }

    // --- Access ---

    /// Returns a reference to the held value without checking.
    ///
    /// # Safety
    /// The optional must hold a value.
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.is_some(), "get_unchecked on an empty Optional");
        unsafe { self.storage.get_value() }
    }

    /// # Safety
    /// The optional must hold a value.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.is_some(), "get_unchecked_mut on an empty Optional");
        unsafe { self.storage.get_value_mut() }
    }

    /// Moves the held value out without checking.
    ///
    /// # Safety
    /// The optional must hold a value.
    #[inline]
    pub unsafe fn unwrap_unchecked(mut self) -> T {
        debug_assert!(self.is_some(), "unwrap_unchecked on an empty Optional");
        unsafe { self.storage.take_value() }
    }

    /// Returns the held value, or [`EmptyAccessError`] if there is none.
    ///
    /// ```
    /// use small_option::{EmptyAccessError, Optional};
    ///
    /// assert_eq!(Optional::some(3u8).try_unwrap(), Ok(3));
    /// assert_eq!(Optional::<u8>::none().try_unwrap(), Err(EmptyAccessError));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, EmptyAccessError> {
        self.into_option().ok_or(EmptyAccessError)
    }

    /// Returns the held value.
    ///
    /// # Panics
    /// Panics with the [`EmptyAccessError`] message if the optional is empty.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    /// Panics with `msg` if the optional is empty.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => panic!("{msg}: {err}"),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    #[inline]
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.into_option().unwrap_or_else(f)
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.into_option().unwrap_or_default()
    }

    // --- Modification ---

    /// Empties the optional, dropping the held value if there is one.
    ///
    /// Resetting an empty optional does nothing.
    #[inline]
    pub fn reset(&mut self) {
        self.storage.destroy();
    }

    /// Moves the current state out, leaving the optional empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::NONE)
    }

    /// Takes the held value only if `predicate` returns `true` for it.
    pub fn take_if<P: FnOnce(&mut T) -> bool>(&mut self, predicate: P) -> Self {
        if self.as_option_mut().map_or(false, predicate) {
            self.take()
        } else {
            Self::NONE
        }
    }

    /// Stores `value` and returns the previous state.
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        mem::replace(self, Self::some(value))
    }

    /// Drops any held value, stores `value` and returns a reference to it.
    pub fn insert(&mut self, value: T) -> &mut T {
        self.storage.destroy();
        self.storage.emplace(value);
        unsafe { self.storage.get_value_mut() }
    }

    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        if self.is_none() {
            self.storage.emplace(f());
        }
        unsafe { self.storage.get_value_mut() }
    }

    /// Move-assigns `source` into `self`.
    ///
    /// # Behavior
    /// * **Both hold:** the held value is assigned in place, so `self` keeps
    ///   its contained object (for a reference, the reference is rebound).
    /// * **Only `source` holds:** the value is moved into the empty slot.
    /// * **`source` is empty:** `self`'s value is dropped.
    pub fn assign(&mut self, source: Self) {
        match source.into_option() {
            Some(value) => {
                if self.is_some() {
                    *unsafe { self.storage.get_value_mut() } = value;
                } else {
                    self.storage.emplace(value);
                }
            }
            None => self.storage.destroy(),
        }
    }

    /// Exchanges the states of two optionals.
    ///
    /// When both hold a value the payloads are swapped in place; when only
    /// one does, its value is moved across.
    pub fn swap(&mut self, other: &mut Self) {
        match (self.is_some(), other.is_some()) {
            (true, true) => unsafe {
                mem::swap(self.storage.get_value_mut(), other.storage.get_value_mut())
            },
            (true, false) => {
                let value = unsafe { self.storage.take_value() };
                other.storage.emplace(value);
            }
            (false, true) => {
                let value = unsafe { other.storage.take_value() };
                self.storage.emplace(value);
            }
            (false, false) => {}
        }
    }

    // --- Combinators ---

    /// Applies `f` to the held value.
    ///
    /// ```
    /// use small_option::Optional;
    ///
    /// let len = Optional::some(String::from("four")).map(|s| s.len());
    /// assert_eq!(len, Optional::some(4));
    /// ```
    #[inline]
    pub fn map<U: Storable, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self.into_option() {
            Some(value) => Optional::some(f(value)),
            None => Optional::none(),
        }
    }

    #[inline]
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        self.into_option().map_or(default, f)
    }

    #[inline]
    pub fn map_or_else<U, D: FnOnce() -> U, F: FnOnce(T) -> U>(self, default: D, f: F) -> U {
        self.into_option().map_or_else(default, f)
    }

    /// Calls `f` with a reference to the held value, if any, and passes the
    /// optional through.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Some(value) = self.as_option() {
            f(value);
        }
        self
    }

    /// Monadic bind: `f` runs at most once and its result is returned as is,
    /// without another layer of wrapping.
    ///
    /// ```
    /// use small_option::Optional;
    ///
    /// fn half(n: u32) -> Optional<u32> {
    ///     if n % 2 == 0 { Optional::some(n / 2) } else { Optional::none() }
    /// }
    ///
    /// assert_eq!(Optional::some(8).and_then(half).and_then(half), Optional::some(2));
    /// assert!(Optional::some(6).and_then(half).and_then(half).is_none());
    /// ```
    #[inline]
    pub fn and_then<U: Storable, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        match self.into_option() {
            Some(value) => f(value),
            None => Optional::none(),
        }
    }

    /// Returns `other` if `self` holds a value, otherwise an empty optional.
    pub fn and<U: Storable>(self, other: Optional<U>) -> Optional<U> {
        if self.is_some() {
            other
        } else {
            Optional::none()
        }
    }

    /// Returns `self` if it holds a value, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        if self.is_some() {
            self
        } else {
            other
        }
    }

    /// Returns `self` if it holds a value, otherwise the result of `f`.
    #[inline]
    pub fn or_else<F: FnOnce() -> Self>(self, f: F) -> Self {
        if self.is_some() {
            self
        } else {
            f()
        }
    }

    /// Returns whichever of `self` and `other` holds a value, if exactly one
    /// does.
    pub fn xor(self, other: Self) -> Self {
        match (self.is_some(), other.is_some()) {
            (true, false) => self,
            (false, true) => other,
            _ => Self::NONE,
        }
    }

    /// Keeps the held value only if `predicate` returns `true` for it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        let keep = match self.as_option() {
            Some(value) => predicate(value),
            None => false,
        };
        if keep {
            self
        } else {
            Self::NONE
        }
    }

    /// Pairs the held values of `self` and `other` when both hold one.
    pub fn zip<U: Storable>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self.into_option(), other.into_option()) {
            (Some(a), Some(b)) => Optional::some((a, b)),
            _ => Optional::none(),
        }
    }

    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        self.into_option().ok_or(err)
    }

    #[inline]
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, err: F) -> Result<T, E> {
        self.into_option().ok_or_else(err)
    }

    /// Converts the held value into another type, consuming `self`.
    pub fn map_into<U: Storable + From<T>>(self) -> Optional<U> {
        self.map(U::from)
    }

    /// Builds an optional from an optional of a convertible type, consuming
    /// the source.
    pub fn from_optional<U: Storable>(source: Optional<U>) -> Self
    where
        T: From<U>,
    {
        source.map(T::from)
    }

    // --- Iteration ---

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_option(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.as_option_mut(),
        }
    }
}

impl<T: Storable> Drop for Optional<T> {
    fn drop(&mut self) {
        self.storage.destroy();
    }
}

// --- Nested and borrowed payloads ---

impl<T: Storable> Optional<Optional<T>> {
    /// Collapses one layer of nesting.
    ///
    /// ```
    /// use small_option::Optional;
    ///
    /// let nested = Optional::some(Optional::some(1u8));
    /// assert_eq!(nested.flatten(), Optional::some(1));
    ///
    /// let hollow: Optional<Optional<u8>> = Optional::some(Optional::none());
    /// assert!(hollow.flatten().is_none());
    /// ```
    pub fn flatten(self) -> Optional<T> {
        match self.into_option() {
            Some(inner) => inner,
            None => Optional::none(),
        }
    }
}

impl<T: Storable, E> Optional<Result<T, E>> {
    /// Turns an optional result into a result of an optional.
    pub fn transpose(self) -> Result<Optional<T>, E> {
        match self.into_option() {
            Some(Ok(value)) => Ok(Optional::some(value)),
            Some(Err(err)) => Err(err),
            None => Ok(Optional::none()),
        }
    }
}

impl<'a, T: ?Sized> Optional<&'a T> {
    /// Shortens the borrow to `'b`.
    #[inline]
    pub fn shorten<'b>(self) -> Optional<&'b T>
    where
        'a: 'b,
    {
        Optional::from_option(self.into_option())
    }
}

impl<'a, T: ?Sized> Optional<&'a mut T> {
    /// Shortens the unique borrow to `'b`.
    #[inline]
    pub fn shorten<'b>(self) -> Optional<&'b mut T>
    where
        'a: 'b,
    {
        Optional::from_option(self.into_option())
    }
}

impl<T: Storable + Copy> Optional<&T> {
    pub fn copied(self) -> Optional<T> {
        self.map(|value| *value)
    }
}

impl<T: Storable + Clone> Optional<&T> {
    pub fn cloned(self) -> Optional<T> {
        self.map(T::clone)
    }
}

impl<T: Storable + Copy> Optional<&mut T> {
    pub fn copied(self) -> Optional<T> {
        self.map(|value| *value)
    }
}

impl<T: Storable + Clone> Optional<&mut T> {
    pub fn cloned(self) -> Optional<T> {
        self.map(|value| value.clone())
    }
}

// --- Trait implementations ---

impl<T: Storable> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::NONE
    }
}

impl<T: Storable + Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::some(value.clone()),
            None => Self::NONE,
        }
    }

    /// Copy-assignment: reuses the held object when both sides hold a value.
    fn clone_from(&mut self, source: &Self) {
        match source.as_option() {
            Some(value) => {
                if self.is_some() {
                    unsafe { self.storage.get_value_mut() }.clone_from(value);
                } else {
                    self.storage.emplace(value.clone());
                }
            }
            None => self.storage.destroy(),
        }
    }
}

impl<T: Storable + fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: Storable + PartialEq<U>, U: Storable> PartialEq<Optional<U>> for Optional<T> {
    fn eq(&self, other: &Optional<U>) -> bool {
        match (self.as_option(), other.as_option()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Storable + Eq> Eq for Optional<T> {}

impl<T: Storable + PartialOrd<U>, U: Storable> PartialOrd<Optional<U>> for Optional<T> {
    fn partial_cmp(&self, other: &Optional<U>) -> Option<Ordering> {
        match (self.as_option(), other.as_option()) {
            (Some(a), Some(b)) => a.partial_cmp(b),
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (None, None) => Some(Ordering::Equal),
        }
    }
}

impl<T: Storable + Ord> Ord for Optional<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_option(), other.as_option()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T: Storable + Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state);
    }
}

impl<T: Storable> From<T> for Optional<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<'a, T: Storable> From<&'a Optional<T>> for Optional<&'a T> {
    fn from(value: &'a Optional<T>) -> Self {
        value.as_ref()
    }
}

impl<'a, T: Storable> From<&'a mut Optional<T>> for Optional<&'a mut T> {
    fn from(value: &'a mut Optional<T>) -> Self {
        value.as_mut()
    }
}

// --- Iterators ---

/// Iterator over a reference to the held value, if any.
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.inner.is_some() as usize;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over a mutable reference to the held value, if any.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.inner.is_some() as usize;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the held value, if any.
pub struct IntoIter<T: Storable> {
    inner: Optional<T>,
}

impl<T: Storable + fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("inner", &self.inner).finish()
    }
}

impl<T: Storable> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take().into_option()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.inner.is_some() as usize;
        (n, Some(n))
    }
}

impl<T: Storable> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.take().into_option()
    }
}

impl<T: Storable> ExactSizeIterator for IntoIter<T> {}
impl<T: Storable> FusedIterator for IntoIter<T> {}

impl<T: Storable> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T: Storable> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T: Storable> IntoIterator for &'a mut Optional<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::rc::Rc;

    #[derive(Debug)]
    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    crate::tagged_storage!(DropCounter);

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut s = DefaultHasher::new();
        value.hash(&mut s);
        s.finish()
    }

    #[test]
    fn test_option_default_is_empty() {
        let tagged: Optional<u64> = Optional::default();
        let niche: Optional<char> = Optional::default();
        let pointer: Optional<&str> = Optional::default();
        assert!(tagged.is_none());
        assert!(niche.is_none());
        assert!(pointer.is_none());
        assert_eq!(tagged.try_unwrap(), Err(EmptyAccessError));
        assert_eq!(niche.try_unwrap(), Err(EmptyAccessError));
        assert_eq!(pointer.try_unwrap(), Err(EmptyAccessError));
    }

    #[test]
    #[should_panic(expected = "attempted to unwrap an empty Optional")]
    fn test_option_unwrap_empty_panics() {
        Optional::<String>::none().unwrap();
    }

    #[test]
    #[should_panic(expected = "config missing: attempted to unwrap an empty Optional")]
    fn test_option_expect_empty_panics() {
        Optional::<u32>::none().expect("config missing");
    }

    #[test]
    fn test_option_round_trip_and_reset() {
        let mut o = Optional::some(String::from("payload"));
        assert_eq!(o.as_option().map(String::as_str), Some("payload"));
        o.reset();
        assert!(o.is_none());

        assert_eq!(Optional::some(7u16).unwrap(), 7);
        assert!(Optional::some('z').unwrap() == 'z');
    }

    #[test]
    fn test_option_reset_idempotent_drops_once() {
        let drops = Rc::new(Cell::new(0));
        let mut o = Optional::some(DropCounter(drops.clone()));
        o.reset();
        o.reset();
        assert!(o.is_none());
        assert_eq!(drops.get(), 1);
        drop(o);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_option_drop_releases_payload() {
        let drops = Rc::new(Cell::new(0));
        {
            let _o = Optional::some(DropCounter(drops.clone()));
        }
        assert_eq!(drops.get(), 1);

        let mut a = Optional::some(DropCounter(drops.clone()));
        let b = a.take();
        assert!(a.is_none());
        assert_eq!(drops.get(), 1);
        drop(b);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_option_assign_cases() {
        let drops = Rc::new(Cell::new(0));

        // Both hold: old value is dropped by the in-place assignment.
        let mut dst = Optional::some(DropCounter(drops.clone()));
        dst.assign(Optional::some(DropCounter(drops.clone())));
        assert!(dst.is_some());
        assert_eq!(drops.get(), 1);

        // Source empty: destination's value is dropped.
        dst.assign(Optional::none());
        assert!(dst.is_none());
        assert_eq!(drops.get(), 2);

        // Destination empty: constructs anew.
        dst.assign(Optional::some(DropCounter(drops.clone())));
        assert!(dst.is_some());
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_option_assign_rebinds_reference() {
        let first = 1u8;
        let second = 2u8;
        let mut r = Optional::some(&first);
        r.assign(Optional::some(&second));
        assert!(core::ptr::eq(r.unwrap(), &second));
        assert_eq!(first, 1);
    }

    #[test]
    fn test_option_clone_from_reuses_allocation() {
        let mut dst = Optional::some(Vec::<i32>::with_capacity(64));
        let src = Optional::some(vec![1, 2]);
        dst.clone_from(&src);
        assert_eq!(dst, src);
        assert!(dst.as_ref().unwrap().capacity() >= 64);

        let mut empty: Optional<Vec<i32>> = Optional::none();
        empty.clone_from(&src);
        assert_eq!(empty, src);

        empty.clone_from(&Optional::none());
        assert!(empty.is_none());
    }

    #[test]
    fn test_option_swap_moves_single_value() {
        let mut a = Optional::some(1i32);
        let mut b = Optional::none();
        a.swap(&mut b);
        assert!(a.is_none());
        assert_eq!(b, Optional::some(1));

        let mut c = Optional::some(2i32);
        b.swap(&mut c);
        assert_eq!(b, Optional::some(2));
        assert_eq!(c, Optional::some(1));

        let mut d: Optional<i32> = Optional::none();
        let mut e: Optional<i32> = Optional::none();
        d.swap(&mut e);
        assert!(d.is_none() && e.is_none());
    }

    #[test]
    fn test_option_swap_references_rebinds() {
        let x = String::from("x");
        let y = String::from("y");
        let mut a = Optional::some(&x);
        let mut b = Optional::some(&y);
        a.swap(&mut b);
        assert!(core::ptr::eq(a.unwrap(), &y));
        assert!(core::ptr::eq(b.unwrap(), &x));
    }

    #[test]
    fn test_option_swap_niche() {
        let mut a = Optional::some(true);
        let mut b: Optional<bool> = Optional::none();
        a.swap(&mut b);
        assert!(a.is_none());
        assert_eq!(b, Optional::some(true));
    }

    #[test]
    fn test_option_reference_binds_address() {
        let mut target = 41;
        {
            let r = Optional::some(&mut target);
            *r.unwrap() += 1;
        }
        assert_eq!(target, 42);

        let o = Optional::some(&target);
        assert!(core::ptr::eq(o.unwrap(), &target));
    }

    #[test]
    fn test_option_unwrap_fallbacks() {
        assert_eq!(Optional::<u32>::none().unwrap_or(5), 5);
        assert_eq!(Optional::some(1u32).unwrap_or(5), 1);
        assert_eq!(Optional::<u32>::none().unwrap_or_else(|| 6), 6);
        assert_eq!(Optional::<String>::none().unwrap_or_default(), "");
    }

    #[test]
    fn test_option_insert_and_get_or_insert() {
        let mut o: Optional<Vec<u8>> = Optional::none();
        o.get_or_insert_with(Vec::new).push(1);
        o.get_or_insert(vec![9]).push(2);
        assert_eq!(o.as_option(), Some(&vec![1, 2]));

        *o.insert(vec![3]) = vec![4];
        assert_eq!(o.as_option(), Some(&vec![4]));

        let old = o.replace(vec![5]);
        assert_eq!(old, Optional::some(vec![4]));

        let mut n: Optional<u8> = Optional::none();
        *n.get_or_insert_default() += 3;
        assert_eq!(n, Optional::some(3));
    }

    #[test]
    fn test_option_take_if() {
        let mut o = Optional::some(10u32);
        assert!(o.take_if(|v| *v > 20).is_none());
        assert!(o.is_some());
        assert_eq!(o.take_if(|v| *v == 10), Optional::some(10));
        assert!(o.is_none());
    }

    #[test]
    fn test_option_map_and_then() {
        let o = Optional::some(3i32);
        assert_eq!(o.clone().map(|v| v * 2), Optional::some(6));
        assert!(Optional::<i32>::none().map(|v| v * 2).is_none());

        let parsed = Optional::some("12").and_then(|s| Optional::from_option(s.parse::<u8>().ok()));
        assert_eq!(parsed, Optional::some(12u8));

        let mut calls = 0;
        let empty: Optional<u8> = Optional::<u8>::none().and_then(|v| {
            calls += 1;
            Optional::some(v)
        });
        assert!(empty.is_none());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_option_or_xor_and_filter() {
        let some = || Optional::some(1u8);
        let none = Optional::<u8>::none;

        assert_eq!(some().or(Optional::some(2)), some());
        assert_eq!(none().or(Optional::some(2)), Optional::some(2));
        assert_eq!(none().or_else(some), some());
        assert_eq!(some().or_else(|| unreachable!()), some());

        assert_eq!(some().xor(none()), some());
        assert_eq!(none().xor(some()), some());
        assert!(some().xor(some()).is_none());
        assert!(none().xor(none()).is_none());

        assert_eq!(some().and(Optional::some('a')), Optional::some('a'));
        assert!(none().and(Optional::some('a')).is_none());

        assert_eq!(some().filter(|v| *v == 1), some());
        assert!(some().filter(|v| *v == 2).is_none());
    }

    #[test]
    fn test_option_zip_flatten_transpose() {
        let zipped = Optional::some(1u8).zip(Optional::some('b'));
        assert_eq!(zipped, Optional::some((1u8, 'b')));
        assert!(Optional::some(1u8).zip(Optional::<char>::none()).is_none());

        let nested = Optional::some(Optional::some(5u32));
        assert_eq!(nested.flatten(), Optional::some(5));
        assert!(Optional::<Optional<u32>>::none().flatten().is_none());

        let ok: Optional<Result<u8, String>> = Optional::some(Ok(1));
        assert_eq!(ok.transpose(), Ok(Optional::some(1)));
        let err: Optional<Result<u8, String>> = Optional::some(Err("bad".into()));
        assert_eq!(err.transpose(), Err(String::from("bad")));
        let none: Optional<Result<u8, String>> = Optional::none();
        assert_eq!(none.transpose(), Ok(Optional::none()));
    }

    #[test]
    fn test_option_as_ref_as_mut_copied() {
        let mut o = Optional::some(String::from("abc"));
        assert_eq!(o.as_ref().map(|s| s.len()), Optional::some(3));
        o.iter_mut().for_each(|s| s.push('d'));
        assert_eq!(o.as_deref(), Optional::some("abcd"));
        if let Some(s) = o.as_deref_mut().into_option() {
            s.make_ascii_uppercase();
        }
        assert_eq!(o.as_ref().cloned(), Optional::some(String::from("ABCD")));

        let mut n = Optional::some(9u64);
        assert_eq!(n.as_ref().copied(), Optional::some(9));
        assert_eq!(n.as_mut().copied(), Optional::some(9));
    }

    fn pick_label<'a>(local: &'a str, fallback: Optional<&'static str>) -> Optional<&'a str> {
        if local.is_empty() {
            fallback.shorten()
        } else {
            Optional::some(local)
        }
    }

    #[test]
    fn test_option_shorten_reference_lifetime() {
        let local = String::from("mine");
        assert_eq!(pick_label(&local, Optional::some("default")), Optional::some("mine"));
        assert_eq!(pick_label("", Optional::some("default")), Optional::some("default"));
        assert!(pick_label("", Optional::none()).is_none());

        let mut slot = 1u32;
        {
            let long: Optional<&mut u32> = Optional::some(&mut slot);
            let short: Optional<&mut u32> = long.shorten();
            *short.unwrap() += 1;
        }
        assert_eq!(slot, 2);
    }

    #[test]
    fn test_option_conversions() {
        let o: Optional<u32> = 5.into();
        assert_eq!(o, Optional::some(5));

        let wide: Optional<u64> = Optional::from_optional(Optional::some(5u32));
        assert_eq!(wide, Optional::some(5u64));
        assert_eq!(Optional::some(7u8).map_into::<i32>(), Optional::some(7i32));

        assert_eq!(Optional::some(1u8).ok_or("empty"), Ok(1));
        assert_eq!(Optional::<u8>::none().ok_or_else(|| "empty"), Err("empty"));

        let borrowed: Optional<&u32> = (&o).into();
        assert_eq!(borrowed.copied(), o);
    }

    #[test]
    fn test_option_ordering() {
        let empty = Optional::<i32>::none();
        assert!(empty < Optional::some(i32::MIN));
        assert!(Optional::some(3) < Optional::some(5));
        assert_eq!(empty.cmp(&Optional::none()), Ordering::Equal);
        assert_eq!(Optional::some(5).cmp(&empty), Ordering::Greater);

        assert!(Optional::<bool>::none() < Optional::some(false));
        assert!(Optional::some('a') < Optional::some('b'));

        let (x, y) = (1, 2);
        assert!(Optional::some(&x) < Optional::some(&y));
        assert!(Optional::<&i32>::none() < Optional::some(&x));

        assert_eq!(
            Optional::some(f64::NAN).partial_cmp(&Optional::some(1.0)),
            None
        );
    }

    #[test]
    fn test_option_equality_states() {
        let owned = Optional::some(String::from("k"));
        let borrowed: Optional<&str> = Optional::some("k");
        assert!(owned == borrowed.map(String::from));
        assert_ne!(Optional::some(1u8), Optional::<u8>::none());
        assert_eq!(Optional::<u8>::none(), Optional::<u8>::none());
    }

    #[test]
    fn test_option_hash_matches_std_option() {
        assert_eq!(hash_of(&Optional::some(7u32)), hash_of(&Some(7u32)));
        assert_eq!(hash_of(&Optional::<u32>::none()), hash_of(&None::<u32>));
        assert_eq!(hash_of(&Optional::some('q')), hash_of(&Some('q')));
    }

    #[test]
    fn test_option_debug() {
        assert_eq!(format!("{:?}", Optional::some(1u8)), "Some(1)");
        assert_eq!(format!("{:?}", Optional::<u8>::none()), "None");
        assert_eq!(format!("{:?}", Optional::some("s")), "Some(\"s\")");
    }

    #[test]
    fn test_option_iterators() {
        let mut o = Optional::some(4u32);
        assert_eq!(o.iter().len(), 1);
        for v in &mut o {
            *v += 1;
        }
        assert_eq!(o.iter().copied().collect::<Vec<_>>(), vec![5]);
        assert_eq!(o.iter_mut().next_back(), Some(&mut 5));

        let collected: Vec<u32> = o.into_iter().chain(Optional::none()).collect();
        assert_eq!(collected, vec![5]);

        let mut empty = Optional::<u32>::none().into_iter();
        assert_eq!(empty.size_hint(), (0, Some(0)));
        assert_eq!(empty.next(), None);
    }

    #[test]
    fn test_option_inspect_and_predicates() {
        let mut seen = 0;
        let o = Optional::some(2u8).inspect(|v| seen = *v);
        assert_eq!(seen, 2);
        assert!(o.clone().is_some_and(|v| v == 2));
        assert!(!Optional::<u8>::none().is_some_and(|_| true));
        assert!(Optional::<u8>::none().is_none_or(|_| false));
        assert_eq!(o.map_or(0, |v| v * 10), 20);
        assert_eq!(Optional::<u8>::none().map_or_else(|| 1, |v| v), 1);
    }

    #[test]
    fn test_option_unchecked_access() {
        let mut o = Optional::some(vec![1]);
        unsafe {
            o.get_unchecked_mut().push(2);
            assert_eq!(o.get_unchecked(), &vec![1, 2]);
            assert_eq!(o.unwrap_unchecked(), vec![1, 2]);
        }
    }
}
