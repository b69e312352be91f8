//! The cursor-bearing `Sequence` and its boundary policy.
//!
//! The cursor ranges over `[-1, len]`. Both ends are exhausted positions:
//! `-1` sits before the first element, `len` past the last. Moving beyond
//! either end clamps back onto it and raises the exhaustion flag; reads at a
//! boundary return the nearest real element. Overrun is how traversal loops
//! end, so it is never an error.

use seqtools_core::value::{DynamicList, Value};
use seqtools_mem::Store;

/// Cursor position before the first element.
pub(crate) const BEFORE_FIRST: isize = -1;

#[derive(Debug)]
pub struct Sequence<'a, T> {
    pub(crate) store: Store<'a, T>,
    pub(crate) cursor: isize,
    pub(crate) exhausted: bool,
    /// Overrides `T::sentinel()` for exhausted `filter_next` steps.
    pub(crate) sentinel: Option<T>,
}

impl<'a, T> Sequence<'a, T> {
    /// Wrap an owned buffer.
    pub fn new(buf: Vec<T>) -> Self {
        Self::from_store(Store::owned(buf))
    }

    /// Wrap a borrowed buffer. Writes through the sequence (`map_in_place`,
    /// `list_mut`) land in `slice`.
    pub fn view(slice: &'a mut [T]) -> Self {
        Self::from_store(Store::view(slice))
    }

    pub(crate) fn from_store(store: Store<'a, T>) -> Self {
        Self {
            store,
            cursor: BEFORE_FIRST,
            exhausted: false,
            sentinel: None,
        }
    }

    /// Attach the value exhausted filter steps hand out instead of
    /// `T::sentinel()`. Combinator results do not inherit it.
    pub fn with_sentinel(mut self, sentinel: T) -> Self {
        self.sentinel = Some(sentinel);
        self
    }

    pub fn sentinel(&self) -> Option<&T> {
        self.sentinel.as_ref()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// `len - 1`; `-1` for an empty sequence.
    pub fn last_index(&self) -> isize {
        self.len() as isize - 1
    }

    /// True when the store is borrowed from another buffer.
    pub fn is_view(&self) -> bool {
        self.store.is_view()
    }

    pub fn index(&self) -> isize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Park before the first element; the next `advance` yields element 0.
    pub fn reset(&mut self) {
        self.cursor = BEFORE_FIRST;
        self.exhausted = false;
    }

    /// Park past the last element, ready for reverse traversal with `retreat`.
    pub fn to_end(&mut self) {
        self.cursor = self.len() as isize;
        self.exhausted = false;
    }

    /// Force the cursor to `idx`, then sanitize. Returns the resulting
    /// position and exhaustion state.
    pub fn set_index(&mut self, idx: isize) -> (isize, bool) {
        self.cursor = idx;
        self.exhausted = false;
        self.sanitize();
        (self.cursor, self.exhausted)
    }

    /// Clamp the cursor into `[-1, len]` and return the index to read.
    ///
    /// The exhaustion flag is raised on clamping and never lowered here; only
    /// `reset`, `to_end` and `set_index` clear it.
    fn sanitize(&mut self) -> Option<usize> {
        let len = self.len() as isize;
        if self.cursor < 0 {
            self.cursor = BEFORE_FIRST;
            self.exhausted = true;
            return (len > 0).then_some(0);
        }
        if self.cursor >= len {
            self.cursor = len;
            self.exhausted = true;
            return (len > 0).then(|| (len - 1) as usize);
        }
        Some(self.cursor as usize)
    }

    /// Move one step forward. `None` only for an empty sequence.
    pub fn advance(&mut self) -> Option<&T> {
        self.cursor += 1;
        let idx = self.sanitize()?;
        Some(&self.store[idx])
    }

    /// Move one step backward. `None` only for an empty sequence.
    pub fn retreat(&mut self) -> Option<&T> {
        self.cursor -= 1;
        let idx = self.sanitize()?;
        Some(&self.store[idx])
    }

    /// Element under the cursor, sanitizing without moving.
    pub fn current(&mut self) -> Option<&T> {
        let idx = self.sanitize()?;
        Some(&self.store[idx])
    }

    pub fn first(&self) -> Option<&T> {
        self.store.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.store.last()
    }

    /// Advance and return the index to read for step objects.
    ///
    /// Step objects are only built over non-empty sequences and hold the
    /// sequence borrowed for their whole life, so the index is always valid.
    pub(crate) fn advance_index(&mut self) -> usize {
        self.cursor += 1;
        self.sanitize().unwrap_or(0)
    }

    /// Endless ring walk over the elements. Resets the cursor first; never
    /// raises the exhaustion flag.
    pub fn cycle(&mut self) -> Cycle<'_, 'a, T> {
        self.reset();
        Cycle { seq: self }
    }

    /// Scan from the start for `needle`. On a hit the cursor is parked on it.
    pub fn any(&mut self, needle: &T) -> bool
    where
        T: PartialEq,
    {
        match self.store.iter().position(|v| v == needle) {
            Some(idx) => {
                self.cursor = idx as isize;
                true
            }
            None => false,
        }
    }

    /// Check every element equals `needle`. On the first mismatch the cursor
    /// is parked on it; otherwise the cursor is left where it was.
    pub fn all(&mut self, needle: &T) -> bool
    where
        T: PartialEq,
    {
        match self.store.iter().position(|v| v != needle) {
            Some(idx) => {
                self.cursor = idx as isize;
                false
            }
            None => true,
        }
    }

    /// Zero-copy view of the backing store.
    pub fn list(&self) -> &[T] {
        &self.store
    }

    /// Zero-copy mutable view; writes alias back into the sequence (and into
    /// the parent buffer for views).
    pub fn list_mut(&mut self) -> &mut [T] {
        &mut self.store
    }

    /// Defensive copy of the elements.
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.store.to_vec()
    }

    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        self.store.into_vec()
    }

    /// Drop the backing store and leave an empty sequence behind.
    ///
    /// For views only the borrow is released; the parent buffer keeps its
    /// contents.
    pub fn invalidate(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len(), view = self.is_view(), "invalidate sequence");
        self.store = Store::empty();
        self.cursor = BEFORE_FIRST;
        self.exhausted = false;
    }
}

impl Sequence<'_, Value> {
    /// Classify a typed collection into a dynamic sequence.
    ///
    /// Returns the sequence together with the error sentinel of the input's
    /// kind (e.g. `i16::MIN` for `DynamicList::I16`). The sequence keeps that
    /// sentinel, so `filter_next` reports it on exhaustion.
    pub fn from_dynamic(list: DynamicList) -> (Self, Value) {
        let (values, sentinel) = list.into_values();
        (Self::new(values).with_sentinel(sentinel.clone()), sentinel)
    }
}

impl<T> From<Vec<T>> for Sequence<'_, T> {
    fn from(buf: Vec<T>) -> Self {
        Self::new(buf)
    }
}

impl<T> FromIterator<T> for Sequence<'_, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Ring walker returned by [`Sequence::cycle`].
#[derive(Debug)]
pub struct Cycle<'s, 'a, T> {
    seq: &'s mut Sequence<'a, T>,
}

impl<T: Clone> Iterator for Cycle<'_, '_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let len = self.seq.len() as isize;
        if len == 0 {
            return None;
        }
        self.seq.cursor += 1;
        if self.seq.cursor >= len {
            self.seq.cursor = 0;
        }
        Some(self.seq.store[self.seq.cursor as usize].clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.seq.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}
