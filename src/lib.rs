//! # Small Option
//!
//! An optional value type that never costs more memory than it has to.
//!
//! [`Optional<T>`] behaves like the standard library's `Option<T>`, but its
//! layout is chosen per payload type at compile time instead of being left
//! to the compiler:
//!
//! * **Reference payloads** (`&T`, `&mut T`) are stored as a single pointer.
//! * **Niche payloads** (types that declare a bit pattern they never use,
//!   through [`Niche`]) store that pattern to mean "absent", so
//!   `size_of::<Optional<T>>() == size_of::<T>()`. This works for user types
//!   the compiler knows nothing about, such as enums with a spare
//!   discriminant or integers with an unused range.
//! * **Everything else** is stored as the value plus a one-byte flag.
//!
//! ## Key Features
//!
//! * **User-declared niches:** [`declare_niche!`] turns any spare bit
//!   pattern into the empty state. Layout mistakes (size mismatch, drop glue)
//!   are rejected when the program is built.
//! * **Familiar API:** the `Option` combinators (`map`, `and_then`, `filter`,
//!   `zip`, `take`, `replace`, `get_or_insert_with`, ...) plus lossless
//!   conversion to and from `Option`.
//! * **Explicit failure:** [`Optional::try_unwrap`] reports an empty access as
//!   an [`EmptyAccessError`]; [`Optional::unwrap`] panics with its message.
//! * **Construction tags:** [`some`] and [`NONE`] build an optional without
//!   naming its type.
//! * **Containers:** [`Array`], [`Slice`] and [`SliceMut`] hand out optional
//!   references and checked accessors (features `array` and `slice`, both on
//!   by default).
//!
//! ## Storage Selection
//!
//! Rust has no specialization, so each payload type names its layout through
//! [`Storable`]. The crate covers references, primitives and the common
//! standard library types (collections, smart pointers, locks, ranges,
//! network addresses, time stamps, tuples up to twelve elements).
//! Downstream types pick one of two macros:
//!
//! ```rust
//! use small_option::{declare_niche, tagged_storage, Optional};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! #[repr(u8)]
//! enum Light {
//!     Red = 0,
//!     Amber = 1,
//!     Green = 2,
//! }
//!
//! // 0xFF is never a valid `Light`.
//! declare_niche! {
//!     unsafe Light: u8 = 0xFF;
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Route {
//!     stops: Vec<String>,
//! }
//!
//! tagged_storage!(Route);
//!
//! assert_eq!(std::mem::size_of::<Optional<Light>>(), 1);
//!
//! let mut current: Optional<Light> = Optional::none();
//! assert!(current.is_none());
//! current.insert(Light::Green);
//! assert_eq!(current, Optional::some(Light::Green));
//!
//! let route = Optional::some(Route { stops: vec!["depot".into()] });
//! assert_eq!(route.map(|r| r.stops.len()).unwrap_or(0), 1);
//! ```
//!
//! Both macros implement a trait of this crate, so the orphan rule limits
//! them to types defined in the calling crate. A type from a third crate is
//! wrapped in [`Plain`], which always selects the tagged layout:
//!
//! ```rust
//! use small_option::{Optional, Plain};
//! use std::alloc::Layout;
//!
//! let cached: Optional<Plain<Layout>> = Optional::some(Plain(Layout::new::<u16>()));
//! assert_eq!(cached.map(|l| l.align()).unwrap(), 2);
//! ```
//!
//! ## Examples
//!
//! ### References
//!
//! ```rust
//! use small_option::Optional;
//!
//! let name = String::from("ada");
//! let found: Optional<&String> = Optional::some(&name);
//!
//! assert_eq!(std::mem::size_of_val(&found), std::mem::size_of::<&String>());
//! assert_eq!(found.map(|s| s.len()).unwrap(), 3);
//! ```
//!
//! ### Interop with `Option`
//!
//! ```rust
//! use small_option::Optional;
//!
//! let parsed = Optional::<u32>::from_option("17".parse().ok());
//! let back: Option<u32> = parsed.into();
//! assert_eq!(back, Some(17));
//!
//! let empty = Optional::<u32>::none();
//! assert!(empty.try_unwrap().is_err());
//! ```

// --- Module Declarations ---

pub mod error;
pub mod niche;
pub mod storage;
pub mod tags;

mod interop;
mod option;
mod reference;

#[cfg(feature = "array")]
pub mod array;
#[cfg(feature = "slice")]
pub mod slice;

// --- Re-exports ---

pub use error::{EmptyAccessError, OutOfBoundsError};
pub use niche::Niche;
pub use option::{IntoIter, Iter, IterMut, Optional};
pub use reference::{Ref, RefMut};
pub use storage::{Plain, Storable};
pub use tags::{some, NoneTag, SomeTag, NONE};

#[cfg(feature = "array")]
pub use array::Array;
#[cfg(feature = "slice")]
pub use slice::{Slice, SliceMut};
