//! Two-element operations.
//!
//! `pair_op` partitions the sequence into non-overlapping pairs
//! `(s[k], s[k+1])` for `k = 0, step, 2*step, ...`; `double_op` and
//! `double_comp` slide an overlapping `(prev, cur)` window over it.

use seqtools_core::config::{EngineConfig, DEFAULT_PAIR_STEP};
use seqtools_core::error::{Error, Result};
use seqtools_mem::finish_grown;

use crate::sequence::Sequence;
use crate::traits::Stepper;

/// Shared precondition of `pair_op_by` and `pair_op_next_by`.
fn check_pairing(len: usize, step: usize) -> Result<()> {
    if len < 2 {
        return Err(Error::too_short("pair_op", 2, len));
    }
    if step < 2 {
        return Err(Error::InvalidArgument(format!(
            "pair step must be at least 2, got {step}"
        )));
    }
    if !len.is_multiple_of(step) {
        return Err(Error::StepMismatch { len, step });
    }
    Ok(())
}

impl<'a, T> Sequence<'a, T> {
    /// `f` over adjacent non-overlapping pairs, `len / 2` outputs.
    pub fn pair_op<'b, F>(&self, f: F) -> Result<Sequence<'b, T>>
    where
        F: FnMut(&T, &T) -> T,
    {
        self.pair_op_by(f, DEFAULT_PAIR_STEP)
    }

    /// `f` over `(s[k], s[k+1])` for every `k` that is a multiple of `step`,
    /// `len / step` outputs. `step` must divide the length.
    pub fn pair_op_by<'b, F>(&self, mut f: F, step: usize) -> Result<Sequence<'b, T>>
    where
        F: FnMut(&T, &T) -> T,
    {
        let s = self.list();
        check_pairing(s.len(), step)?;
        let out = (0..s.len())
            .step_by(step)
            .map(|k| f(&s[k], &s[k + 1]))
            .collect();
        Ok(Sequence::new(out))
    }

    pub fn pair_op_with<'b, F>(&self, f: F, config: &EngineConfig) -> Result<Sequence<'b, T>>
    where
        F: FnMut(&T, &T) -> T,
    {
        self.pair_op_by(f, config.pair_step)
    }

    /// `f(prev, cur)` for every adjacent pair, `len - 1` outputs.
    pub fn double_op<'b, F>(&self, mut f: F) -> Result<Sequence<'b, T>>
    where
        F: FnMut(&T, &T) -> T,
    {
        let s = self.list();
        if s.len() < 2 {
            return Err(Error::too_short("double_op", 2, s.len()));
        }
        let out = s.windows(2).map(|w| f(&w[0], &w[1])).collect();
        Ok(Sequence::new(out))
    }

    /// Keep `cur` from every adjacent `(prev, cur)` for which `cond` holds.
    /// The first element has no predecessor and is never kept.
    pub fn double_comp<'b, F>(&self, cond: F) -> Result<Sequence<'b, T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        self.double_comp_with(cond, &EngineConfig::default())
    }

    pub fn double_comp_with<'b, F>(
        &self,
        mut cond: F,
        config: &EngineConfig,
    ) -> Result<Sequence<'b, T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let s = self.list();
        if s.len() < 2 {
            return Err(Error::too_short("double_comp", 2, s.len()));
        }
        let mut kept = Vec::with_capacity(s.len());
        for w in s.windows(2) {
            if cond(&w[0], &w[1]) {
                kept.push(w[1].clone());
            }
        }
        Ok(Sequence::new(finish_grown(kept, config.compact_filtered)))
    }

    /// Lazy `pair_op`.
    pub fn pair_op_next<F>(&mut self, f: F) -> Result<PairOpNext<'_, 'a, T, F>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> T,
    {
        self.pair_op_next_by(f, DEFAULT_PAIR_STEP)
    }

    /// Lazy `pair_op_by`. After the last pair the step reports exhaustion
    /// with the last element.
    pub fn pair_op_next_by<F>(
        &mut self,
        f: F,
        step: usize,
    ) -> Result<PairOpNext<'_, 'a, T, F>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> T,
    {
        check_pairing(self.len(), step)?;
        self.reset();
        self.cursor = 0;
        Ok(PairOpNext { seq: self, f, step })
    }

    pub fn pair_op_next_with<F>(
        &mut self,
        f: F,
        config: &EngineConfig,
    ) -> Result<PairOpNext<'_, 'a, T, F>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> T,
    {
        self.pair_op_next_by(f, config.pair_step)
    }

    /// Lazy `double_op`. The call past the end reports exhaustion with
    /// `f(last, last)`.
    pub fn double_op_next<F>(&mut self, f: F) -> Result<DoubleOpNext<'_, 'a, T, F>>
    where
        F: FnMut(&T, &T) -> T,
    {
        if self.len() < 2 {
            return Err(Error::too_short("double_op_next", 2, self.len()));
        }
        self.reset();
        self.cursor = 0;
        Ok(DoubleOpNext {
            seq: self,
            f,
            cur: 0,
        })
    }

    /// Lazy `double_comp`: each step slides forward until `cond(prev, cur)`
    /// holds and yields `cur`. At the end it reports exhaustion with the
    /// last element.
    pub fn double_comp_next<F>(&mut self, cond: F) -> Result<DoubleCompNext<'_, 'a, T, F>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        if self.len() < 2 {
            return Err(Error::too_short("double_comp_next", 2, self.len()));
        }
        self.reset();
        self.cursor = 0;
        Ok(DoubleCompNext {
            seq: self,
            cond,
            cur: 0,
        })
    }
}

/// Step object returned by [`Sequence::pair_op_next`].
#[derive(Debug)]
pub struct PairOpNext<'s, 'a, T, F> {
    seq: &'s mut Sequence<'a, T>,
    f: F,
    step: usize,
}

impl<T, F> Stepper for PairOpNext<'_, '_, T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> T,
{
    type Output = T;

    fn step(&mut self) -> (T, bool) {
        let s = &self.seq.store;
        let k = self.seq.cursor;
        if k > self.seq.last_index() {
            self.seq.exhausted = true;
            return (s[s.len() - 1].clone(), true);
        }
        let k = k as usize;
        let value = (self.f)(&s[k], &s[k + 1]);
        // k + step <= len because step divides len.
        self.seq.cursor += self.step as isize;
        (value, false)
    }
}

/// Step object returned by [`Sequence::double_op_next`].
#[derive(Debug)]
pub struct DoubleOpNext<'s, 'a, T, F> {
    seq: &'s mut Sequence<'a, T>,
    f: F,
    cur: usize,
}

impl<T, F> Stepper for DoubleOpNext<'_, '_, T, F>
where
    F: FnMut(&T, &T) -> T,
{
    type Output = T;

    fn step(&mut self) -> (T, bool) {
        let prev = self.cur;
        self.cur = self.seq.advance_index();
        let value = (self.f)(&self.seq.store[prev], &self.seq.store[self.cur]);
        (value, self.seq.exhausted)
    }
}

/// Step object returned by [`Sequence::double_comp_next`].
#[derive(Debug)]
pub struct DoubleCompNext<'s, 'a, T, F> {
    seq: &'s mut Sequence<'a, T>,
    cond: F,
    cur: usize,
}

impl<T, F> Stepper for DoubleCompNext<'_, '_, T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    type Output = T;

    fn step(&mut self) -> (T, bool) {
        let mut prev = self.cur;
        self.cur = self.seq.advance_index();
        while !self.seq.exhausted {
            if (self.cond)(&self.seq.store[prev], &self.seq.store[self.cur]) {
                break;
            }
            prev = self.cur;
            self.cur = self.seq.advance_index();
        }
        (self.seq.store[self.cur].clone(), self.seq.exhausted)
    }
}
