//! Predicate-driven selection: values (`filter`), positions (`where_indices`)
//! and the lazy `filter_next`.

use seqtools_core::config::EngineConfig;
use seqtools_core::element::Sentinel;
use seqtools_core::error::{Error, Result};
use seqtools_mem::finish_grown;

use crate::sequence::Sequence;
use crate::traits::Stepper;

impl<'a, T> Sequence<'a, T> {
    /// Keep the elements satisfying `cond`, in their original order, in a
    /// freshly allocated sequence.
    pub fn filter<'b, F>(&self, cond: F) -> Sequence<'b, T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.filter_with(cond, &EngineConfig::default())
    }

    pub fn filter_with<'b, F>(&self, mut cond: F, config: &EngineConfig) -> Sequence<'b, T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut kept = Vec::with_capacity(self.len());
        for value in self.list() {
            if cond(value) {
                kept.push(value.clone());
            }
        }
        Sequence::new(finish_grown(kept, config.compact_filtered))
    }

    /// Positions of the elements satisfying `cond` (the index set, not the
    /// values).
    pub fn where_indices<'b, F>(&self, cond: F) -> Sequence<'b, usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.where_with(cond, &EngineConfig::default())
    }

    pub fn where_with<'b, F>(&self, mut cond: F, config: &EngineConfig) -> Sequence<'b, usize>
    where
        F: FnMut(&T) -> bool,
    {
        let mut indices = Vec::with_capacity(self.len());
        for (idx, value) in self.list().iter().enumerate() {
            if cond(value) {
                indices.push(idx);
            }
        }
        Sequence::new(finish_grown(indices, config.compact_filtered))
    }

    /// Lazy `filter`: every step advances until an element satisfies `cond`.
    ///
    /// Once the sequence runs out the step reports exhaustion together with
    /// the sequence's attached sentinel, or `T::sentinel()` when it has none.
    pub fn filter_next<F>(&mut self, cond: F) -> Result<FilterNext<'_, 'a, T, F>>
    where
        T: Clone + Sentinel,
        F: FnMut(&T) -> bool,
    {
        let sentinel = self.sentinel.clone().unwrap_or_else(T::sentinel);
        self.filter_next_or(cond, sentinel)
    }

    /// `filter_next` with an explicit value for exhausted steps.
    pub fn filter_next_or<F>(&mut self, cond: F, sentinel: T) -> Result<FilterNext<'_, 'a, T, F>>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        if self.is_empty() {
            return Err(Error::too_short("filter_next", 1, 0));
        }
        self.reset();
        Ok(FilterNext {
            seq: self,
            cond,
            sentinel,
        })
    }
}

/// Step object returned by [`Sequence::filter_next`].
#[derive(Debug)]
pub struct FilterNext<'s, 'a, T, F> {
    seq: &'s mut Sequence<'a, T>,
    cond: F,
    sentinel: T,
}

impl<T, F> Stepper for FilterNext<'_, '_, T, F>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    type Output = T;

    fn step(&mut self) -> (T, bool) {
        loop {
            let idx = self.seq.advance_index();
            if self.seq.exhausted {
                return (self.sentinel.clone(), true);
            }
            let candidate = &self.seq.store[idx];
            if (self.cond)(candidate) {
                return (candidate.clone(), false);
            }
        }
    }
}
