//! Owned vs. borrowed element storage.
//!
//! A `Store::Owned` is the single owner of its buffer. A `Store::View` borrows
//! a disjoint slice of another buffer; writes through it land in that buffer.

use std::fmt;
use std::ops::{Deref, DerefMut};

use seqtools_core::error::{Error, Result};

pub enum Store<'a, T> {
    Owned(Vec<T>),
    View(&'a mut [T]),
}

impl<'a, T> Store<'a, T> {
    pub fn owned(buf: Vec<T>) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = buf.len(), "owned store");
        Store::Owned(buf)
    }

    pub fn view(slice: &'a mut [T]) -> Self {
        Store::View(slice)
    }

    /// Zero-length owned store; what an invalidated sequence is left with.
    pub fn empty() -> Self {
        Store::Owned(Vec::new())
    }

    pub fn is_view(&self) -> bool {
        matches!(self, Store::View(_))
    }

    /// Take the elements out. Views have to copy, owned stores hand over
    /// their buffer.
    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            Store::Owned(buf) => buf,
            Store::View(slice) => slice.to_vec(),
        }
    }
}

impl<T> Deref for Store<'_, T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        match self {
            Store::Owned(buf) => buf,
            Store::View(slice) => slice,
        }
    }
}

impl<T> DerefMut for Store<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            Store::Owned(buf) => buf,
            Store::View(slice) => slice,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_view() { "View" } else { "Owned" };
        f.debug_tuple(kind).field(&self.deref()).finish()
    }
}

/// Concatenate at least two parts, in order, into one fresh buffer.
pub fn concat<T: Clone>(parts: &[&[T]]) -> Result<Vec<T>> {
    if parts.len() < 2 {
        return Err(Error::InvalidArgument(format!(
            "chain needs at least 2 inputs, got {}",
            parts.len()
        )));
    }
    let total = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part);
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(inputs = parts.len(), len = total, "chained stores");
    Ok(out)
}

/// Interleave two equal-length slices as `a0, b0, a1, b1, ...`.
pub fn interleave<T: Clone>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    let mut out = Vec::with_capacity(a.len() * 2);
    for (x, y) in a.iter().zip(b) {
        out.push(x.clone());
        out.push(y.clone());
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(len = out.len(), "zipped stores");
    Ok(out)
}

/// Finish a grow-as-needed buffer, releasing spare capacity when asked to.
pub fn finish_grown<T>(mut buf: Vec<T>, compact: bool) -> Vec<T> {
    if compact {
        buf.shrink_to_fit();
    }
    buf
}
