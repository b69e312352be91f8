//! Partitioning, concatenation and multi-input alignment.
//!
//! `tee` is the only operation here that keeps pointing into the source
//! buffer; chain, zip and multi_map all allocate a fresh store.

use seqtools_core::config::EngineConfig;
use seqtools_core::error::{Error, Result};
use seqtools_mem::{concat, interleave, split_views};

use crate::sequence::Sequence;
use crate::traits::Stepper;

impl<'a, T> Sequence<'a, T> {
    /// Split into contiguous, non-overlapping views that together cover every
    /// element exactly once.
    ///
    /// The views borrow this sequence's buffer mutably, so they can be handed
    /// to separate threads (`T: Send`) and mapped in place independently.
    pub fn tee(&mut self, parts: usize) -> Result<Vec<Sequence<'_, T>>> {
        self.reset();
        let views = split_views(&mut self.store[..], parts)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(parts = views.len(), "tee");
        Ok(views.into_iter().map(Sequence::view).collect())
    }

    pub fn tee_with(&mut self, config: &EngineConfig) -> Result<Vec<Sequence<'_, T>>> {
        self.tee(config.tee_parts)
    }
}

/// At least two inputs, all of the same length. Returns that length.
fn check_aligned<T>(op: &str, inputs: &[&[T]]) -> Result<usize> {
    if inputs.len() < 2 {
        return Err(Error::InvalidArgument(format!(
            "{op} needs at least 2 inputs, got {}",
            inputs.len()
        )));
    }
    let expected = inputs[0].len();
    match inputs.iter().find(|s| s.len() != expected) {
        Some(odd) => Err(Error::LengthMismatch {
            expected,
            found: odd.len(),
        }),
        None => Ok(expected),
    }
}

/// Concatenate two or more sequences, in argument order, into a new one.
pub fn chain<'b, T: Clone>(seqs: &[&Sequence<'_, T>]) -> Result<Sequence<'b, T>> {
    let parts: Vec<&[T]> = seqs.iter().map(|s| s.list()).collect();
    concat(&parts).map(Sequence::new)
}

/// Concatenate two or more plain slices into a new sequence.
pub fn chain_stores<'b, T: Clone>(stores: &[&[T]]) -> Result<Sequence<'b, T>> {
    concat(stores).map(Sequence::new)
}

/// Interleave two equal-length sequences as `a0, b0, a1, b1, ...`.
pub fn zip<'b, T: Clone>(a: &Sequence<'_, T>, b: &Sequence<'_, T>) -> Result<Sequence<'b, T>> {
    interleave(a.list(), b.list()).map(Sequence::new)
}

pub fn zip_stores<'b, T: Clone>(a: &[T], b: &[T]) -> Result<Sequence<'b, T>> {
    interleave(a, b).map(Sequence::new)
}

/// Apply `f` to the i-th element of every input for each i.
///
/// `f` receives one row per call, ordered like `seqs`.
pub fn multi_map<'b, T, F>(f: F, seqs: &[&Sequence<'_, T>]) -> Result<Sequence<'b, T>>
where
    T: Clone,
    F: FnMut(&[T]) -> T,
{
    let inputs: Vec<&[T]> = seqs.iter().map(|s| s.list()).collect();
    multi_map_stores(f, &inputs)
}

pub fn multi_map_stores<'b, T, F>(mut f: F, inputs: &[&[T]]) -> Result<Sequence<'b, T>>
where
    T: Clone,
    F: FnMut(&[T]) -> T,
{
    let len = check_aligned("multi_map", inputs)?;
    let mut row = Vec::with_capacity(inputs.len());
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        row.clear();
        row.extend(inputs.iter().map(|s| s[i].clone()));
        out.push(f(&row));
    }
    Ok(Sequence::new(out))
}

/// Lazy `multi_map`: one row per step.
///
/// The step object keeps its own cursor over the shared length and re-reads
/// the i-th element of every input on each call. Past the end every input is
/// clamped to its last element and the step reports exhaustion.
pub fn multi_map_next<'s, T, F>(
    f: F,
    seqs: &[&'s Sequence<'_, T>],
) -> Result<MultiMapNext<'s, T, F>>
where
    T: Clone,
    F: FnMut(&[T]) -> T,
{
    let inputs: Vec<&'s [T]> = seqs.iter().map(|&s| s.list()).collect();
    let len = check_aligned("multi_map_next", &inputs)?;
    if len == 0 {
        return Err(Error::too_short("multi_map_next", 1, 0));
    }
    Ok(MultiMapNext {
        row: Vec::with_capacity(inputs.len()),
        inputs,
        f,
        len,
        cursor: -1,
        exhausted: false,
    })
}

/// Step object returned by [`multi_map_next`].
#[derive(Debug)]
pub struct MultiMapNext<'s, T, F> {
    inputs: Vec<&'s [T]>,
    row: Vec<T>,
    f: F,
    len: usize,
    cursor: isize,
    exhausted: bool,
}

impl<T, F> MultiMapNext<'_, T, F> {
    pub fn index(&self) -> isize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<T, F> Stepper for MultiMapNext<'_, T, F>
where
    T: Clone,
    F: FnMut(&[T]) -> T,
{
    type Output = T;

    fn step(&mut self) -> (T, bool) {
        self.cursor += 1;
        if self.cursor >= self.len as isize {
            self.cursor = self.len as isize;
            self.exhausted = true;
        }
        let idx = (self.cursor as usize).min(self.len - 1);
        self.row.clear();
        self.row.extend(self.inputs.iter().map(|s| s[idx].clone()));
        ((self.f)(&self.row), self.exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tee_even_split_reconstructs() {
        let mut seq: Sequence<'_, u32> = (0..20).collect();
        let parts = seq.tee(2).unwrap();
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|p| p.is_view() && p.len() == 10));
        let refs: Vec<&Sequence<'_, u32>> = parts.iter().collect();
        let joined = chain(&refs).unwrap();
        assert_eq!(joined.into_vec(), (0..20).collect::<Vec<u32>>());
    }

    #[test]
    fn test_tee_uneven_last_takes_remainder() {
        let mut seq: Sequence<'_, u32> = (0..10).collect();
        let sizes: Vec<usize> = seq.tee(4).unwrap().iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![3, 3, 3, 1]);
    }

    #[test]
    fn test_tee_views_write_back() {
        let mut seq: Sequence<'_, i32> = (1..=6).collect();
        for mut part in seq.tee(3).unwrap() {
            part.map_in_place(|x| x * 100);
        }
        assert_eq!(seq.list(), &[100, 200, 300, 400, 500, 600]);
    }

    #[test]
    fn test_tee_zero_parts() {
        let mut seq = Sequence::new(vec![1, 2]);
        assert!(matches!(seq.tee(0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_tee_with_config() {
        let mut seq: Sequence<'_, u8> = (0..8).collect();
        let parts = seq.tee_with(&EngineConfig::default()).unwrap();
        assert_eq!(parts.len(), 4);
    }

    #[test]
    fn test_chain_orders_inputs() {
        let a = Sequence::new(vec![1, 2]);
        let b = Sequence::new(vec![3]);
        let c = Sequence::new(vec![4, 5]);
        let out = chain(&[&a, &b, &c]).unwrap();
        assert_eq!(out.list(), &[1, 2, 3, 4, 5]);
        assert!(!out.is_view());
    }

    #[test]
    fn test_chain_needs_two() {
        let a = Sequence::new(vec![1, 2]);
        assert!(matches!(chain(&[&a]), Err(Error::InvalidArgument(_))));
        let none: [&[i32]; 0] = [];
        assert!(chain_stores(&none).is_err());
    }

    #[test]
    fn test_chain_stores() {
        let out = chain_stores(&[&["x", "y"][..], &["z"][..]]).unwrap();
        assert_eq!(out.list(), &["x", "y", "z"]);
    }

    #[test]
    fn test_zip_interleaves() {
        let a = Sequence::new(vec![1, 3, 5]);
        let b = Sequence::new(vec![2, 4, 6]);
        assert_eq!(zip(&a, &b).unwrap().list(), &[1, 2, 3, 4, 5, 6]);

        let short = Sequence::new(vec![0]);
        assert_eq!(
            zip(&a, &short).unwrap_err(),
            Error::LengthMismatch {
                expected: 3,
                found: 1
            }
        );
        assert_eq!(zip_stores(&[0.5], &[1.5]).unwrap().list(), &[0.5, 1.5]);
    }

    #[test]
    fn test_multi_map_sums_rows() {
        let a = Sequence::new(vec![1, 2, 3]);
        let b = Sequence::new(vec![10, 20, 30]);
        let c = Sequence::new(vec![100, 200, 300]);
        let out = multi_map(|row| row.iter().sum(), &[&a, &b, &c]).unwrap();
        assert_eq!(out.list(), &[111, 222, 333]);
    }

    #[test]
    fn test_multi_map_checks_inputs() {
        let a = Sequence::new(vec![1, 2, 3]);
        let b = Sequence::new(vec![1, 2]);
        assert!(matches!(
            multi_map(|row| row[0], &[&a]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            multi_map(|row| row[0], &[&a, &b]),
            Err(Error::LengthMismatch { expected: 3, found: 2 })
        ));
    }

    #[test]
    fn test_multi_map_next_matches_eager() {
        let a = Sequence::new(vec![1.0, 2.0, 3.0]);
        let b = Sequence::new(vec![0.5, 0.25, 0.125]);
        let mut step = multi_map_next(|row: &[f64]| row[0] * row[1], &[&a, &b]).unwrap();
        assert_eq!(step.step(), (0.5, false));
        assert_eq!(step.step(), (0.5, false));
        assert_eq!(step.step(), (0.375, false));
        assert!(!step.is_exhausted());
        assert_eq!(step.step(), (0.375, true));
        assert_eq!(step.index(), 3);

        let eager = multi_map_stores(|row| row[0] * row[1], &[a.list(), b.list()]).unwrap();
        let lazy: Vec<f64> = multi_map_next(|row| row[0] * row[1], &[&a, &b])
            .unwrap()
            .steps()
            .collect();
        assert_eq!(lazy, eager.into_vec());
    }

    #[test]
    fn test_multi_map_next_rejects_empty_inputs() {
        let a: Sequence<'_, i32> = Sequence::new(vec![]);
        let b: Sequence<'_, i32> = Sequence::new(vec![]);
        assert!(multi_map_next(|row| row[0], &[&a, &b]).is_err());
        assert!(multi_map(|row| row[0], &[&a, &b]).unwrap().is_empty());
    }
}
