//! Generic slice helpers: remove, count, filter, map, reduce, unique,
//! difference and flatten.
//!
//! Everything is a free function over `&[E]`; [`SliceExt`] offers the same
//! operations as methods. The only operation that can fail is [`remove()`],
//! which panics on an out-of-range index ([`try_remove`] reports it instead).

mod ext;
mod fold;
mod remove;
mod set;
mod transform;

pub use ext::SliceExt;
pub use fold::{count, reduce, reduce_default};
pub use remove::{IndexOutOfBounds, remove, remove_copy, try_remove};
pub use set::{difference, unique};
pub use transform::{filter, flatten, map, remap};
