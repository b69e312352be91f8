#![forbid(unsafe_code)]
//! seqtools-operators: the cursor and every combinator built on it.
//!
//! Design intent:
//! - One generic `Sequence<'a, T>`; no per-element-type copies.
//! - Combinators that need fresh memory allocate an owned store and wrap it
//!   with the regular constructor, so results compose like any other sequence.
//!   Only `map_in_place` and `tee` touch the source's own buffer.
//! - Eager combinators (`map`, `filter`, `where_indices`, `reduce`,
//!   `pair_op`, `double_op`, `double_comp`) read the whole store and leave
//!   the source cursor where it was; they do not reset it first.
//! - Lazy combinators hand out small step objects that borrow the source
//!   mutably and implement `Stepper`; nothing runs until the caller pulls.

pub mod filter;
pub mod map;
pub mod pair;
pub mod sequence;
pub mod structural;
pub mod traits;

pub use filter::FilterNext;
pub use map::MapNext;
pub use pair::{DoubleCompNext, DoubleOpNext, PairOpNext};
pub use sequence::{Cycle, Sequence};
pub use structural::{
    chain, chain_stores, multi_map, multi_map_next, multi_map_stores, zip, zip_stores,
    MultiMapNext,
};
pub use traits::{Stepper, Steps};
