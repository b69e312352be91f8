#![forbid(unsafe_code)]
//! seqtools: cursor-based traversal over in-memory sequences.
//!
//! Facade over the workspace crates. Eager combinators such as `map`,
//! `filter` and `reduce` always see the whole sequence and never move its
//! cursor; `map_in_place`, `tee` and the lazy `*_next` creators reset it.
//!
//! Most callers only need the prelude:
//!
//! ```
//! use seqtools::prelude::*;
//!
//! let seq: Sequence<'_, i32> = (1..=6).collect();
//! let total = seq.filter(|x| x % 2 == 0).reduce(|a, b| a + b).unwrap();
//! assert_eq!(total, 12);
//! ```

pub use seqtools_core::{config, element, error, value};
pub use seqtools_core::{DynamicList, EngineConfig, Error, Result, Sentinel, Value, ValueKind};
pub use seqtools_mem::{plan_partitions, split_views, Store};
pub use seqtools_operators::*;

pub mod prelude {
    pub use seqtools_core::prelude::*;
    pub use seqtools_operators::{chain, multi_map, multi_map_next, zip, Sequence, Stepper};
}
