#![forbid(unsafe_code)]
//! seqtools-core: shared vocabulary for the sequence engine.
//!
//! Holds the error taxonomy, the engine configuration, the element-level
//! traits the combinators bound on, and the dynamic `Value` used for
//! genuinely heterogeneous input. No cursor logic and no allocation policy
//! live here.

pub mod config;
pub mod element;
pub mod error;
pub mod prelude;
pub mod value;

pub use config::EngineConfig;
pub use element::Sentinel;
pub use error::{Error, Result};
pub use value::{DynamicList, Value, ValueKind};
