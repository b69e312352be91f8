//! Element-wise transforms and the left fold.

use seqtools_core::error::{Error, Result};

use crate::sequence::Sequence;
use crate::traits::Stepper;

impl<'a, T> Sequence<'a, T> {
    /// Apply `f` to every element into a freshly allocated sequence.
    /// The source is left untouched.
    pub fn map<'b, F>(&self, f: F) -> Sequence<'b, T>
    where
        F: FnMut(&T) -> T,
    {
        Sequence::new(self.list().iter().map(f).collect())
    }

    /// Overwrite every element with `f(element)` in the existing store.
    ///
    /// This writes through the backing buffer: for views the parent sees the
    /// new values, and earlier `list()` borrows observe them once released.
    pub fn map_in_place<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&T) -> T,
    {
        self.reset();
        for slot in self.list_mut().iter_mut() {
            *slot = f(&*slot);
        }
        self
    }

    /// Left fold seeded with the first element: `state = f(state, x)` for
    /// every following `x`.
    pub fn reduce<F>(&self, mut f: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> T,
    {
        let (head, tail) = self
            .list()
            .split_first()
            .ok_or_else(|| Error::too_short("reduce", 1, 0))?;
        Ok(tail.iter().fold(head.clone(), |state, x| f(&state, x)))
    }

    /// Lazy `map`: every step advances the cursor and yields `f(element)`.
    ///
    /// Past the end the step reports exhaustion with `f(last)`.
    pub fn map_next<F>(&mut self, f: F) -> Result<MapNext<'_, 'a, T, F>>
    where
        F: FnMut(&T) -> T,
    {
        if self.is_empty() {
            return Err(Error::too_short("map_next", 1, 0));
        }
        self.reset();
        Ok(MapNext { seq: self, f })
    }
}

/// Step object returned by [`Sequence::map_next`].
#[derive(Debug)]
pub struct MapNext<'s, 'a, T, F> {
    seq: &'s mut Sequence<'a, T>,
    f: F,
}

impl<T, F> Stepper for MapNext<'_, '_, T, F>
where
    F: FnMut(&T) -> T,
{
    type Output = T;

    fn step(&mut self) -> (T, bool) {
        let idx = self.seq.advance_index();
        let value = (self.f)(&self.seq.store[idx]);
        (value, self.seq.exhausted)
    }
}
