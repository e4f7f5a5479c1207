//! Arena-backed circular lists for knot edge cycles.
//!
//! A [`Ring`] is a doubly-linked circular sequence whose entries live in a
//! slot arena and are addressed by [`RingHandle`]s instead of references.
//! Each slot carries a generation that is bumped when its entry is removed,
//! so a handle to a removed entry is detected in O(1) instead of silently
//! aliasing whatever value reuses the slot.
//!
//! ```text
//! Ring<T>
//! ├── slots: Vec<Slot<T>>   (value, prev, next, generation)
//! ├── free:  Vec<u32>       (vacated slots, reused first)
//! └── head:  Option<u32>    (start point of every traversal)
//! ```
//!
//! # Traversals
//!
//! - [`Ring::iter`] / [`Ring::handles`]: one lap forward from the head.
//! - [`Ring::triples`]: `(previous, current, next)` for every entry once.
//! - [`Ring::range`]: the handles from one entry forward to another.
//!
//! Misusing a handle (stale, or from another ring) is a programming error
//! and panics.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod handle;
pub mod iter;
pub mod ring;

pub use handle::RingHandle;
pub use iter::{Handles, Iter, Range, Triples};
pub use ring::Ring;
