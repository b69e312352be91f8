#![forbid(unsafe_code)]
//! seqtools-mem: backing stores and partition planning.
//!
//! Every sequence sits on a `Store`, which either owns a fresh `Vec<T>` or
//! borrows a sub-range of somebody else's buffer. Allocating combinators go
//! through the helpers here so the owned/borrowed split stays explicit.
//!
//! No cursor state lives here; `seqtools-operators` drives the stores.

pub mod partition;
pub mod store;

pub use partition::{plan_partitions, split_views};
pub use store::{concat, finish_grown, interleave, Store};
