//! The step protocol shared by every lazy combinator.
//!
//! A step object yields `(value, exhausted)` per call. The caller's loop
//! checks `exhausted` before trusting `value`: depending on the combinator an
//! exhausted step carries a clamped endpoint value or a type sentinel.

/// A stateful, caller-driven unit of lazy work.
pub trait Stepper {
    type Output;

    /// Advance once and report the produced value plus the exhaustion flag.
    fn step(&mut self) -> (Self::Output, bool);

    /// Adapt into an `Iterator` that stops at the first exhausted step.
    fn steps(self) -> Steps<Self>
    where
        Self: Sized,
    {
        Steps {
            inner: self,
            done: false,
        }
    }
}

/// Iterator over the non-exhausted results of a `Stepper`.
#[derive(Debug)]
pub struct Steps<S> {
    inner: S,
    done: bool,
}

impl<S> Steps<S> {
    /// Give the step object back, e.g. to keep pulling past exhaustion.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Stepper> Iterator for Steps<S> {
    type Item = S::Output;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let (value, exhausted) = self.inner.step();
        if exhausted {
            self.done = true;
            None
        } else {
            Some(value)
        }
    }
}
