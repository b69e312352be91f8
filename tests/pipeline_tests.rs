//! End-to-end pipelines combining several operators.

use seqtools::prelude::*;
use std::thread;

fn costly(i: &i64) -> i64 {
    (i + (i << 1) + ((i * i) << 1)) / (1 + (i >> 1))
}

fn sample(len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| i % 30 + 30 * (i / 60)).collect()
}

#[test]
fn test_tee_map_filter_reduce_across_threads() {
    let data = sample(10_000);

    let expected = Sequence::new(data.clone())
        .map(costly)
        .filter(|x| x & 1 == 0)
        .reduce(|a, b| a + b)
        .unwrap();

    let mut seq = Sequence::new(data);
    let parts = seq.tee(4).unwrap();
    assert_eq!(parts.len(), 4);

    let total: i64 = thread::scope(|scope| {
        let handles: Vec<_> = parts
            .into_iter()
            .map(|mut part| {
                scope.spawn(move || {
                    part.map_in_place(costly)
                        .filter(|x| x & 1 == 0)
                        .reduce(|a, b| a + b)
                        .unwrap_or(0)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(total, expected);
    // map_in_place wrote through every view into the parent buffer.
    assert_eq!(seq.list()[3], costly(&3));
}

#[test]
fn test_tee_with_config_from_lookup() {
    let config = EngineConfig::from_lookup(|key| match key {
        "SEQTOOLS_TEE_PARTS" => Some("3".to_string()),
        _ => None,
    });
    config.validate().unwrap();

    let mut seq: Sequence<'_, u32> = (0..9).collect();
    let sizes: Vec<usize> = seq
        .tee_with(&config)
        .unwrap()
        .iter()
        .map(|p| p.len())
        .collect();
    assert_eq!(sizes, vec![3, 3, 3]);
}

#[test]
fn test_discrete_derivative_via_zip_and_pair_op() {
    let xs: Sequence<'_, f64> = (0..10).map(f64::from).collect();
    let f1 = xs.map(|x| x * x);
    let f2 = xs.map(|x| 2.0 * x * x);

    let diff = zip(&f1, &f2).unwrap().pair_op(|a, b| b - a).unwrap();
    assert_eq!(
        diff.list(),
        &[0.0, 1.0, 4.0, 9.0, 16.0, 25.0, 36.0, 49.0, 64.0, 81.0]
    );
}

#[test]
fn test_drop_repeats_then_chain() {
    let noisy = Sequence::new(vec![1, 1, 2, 3, 3, 3, 4]);
    let tail = Sequence::new(vec![4, 5, 5, 6]);

    let joined = chain(&[&noisy, &tail]).unwrap();
    let distinct = joined.double_comp(|p, c| p != c).unwrap();
    assert_eq!(distinct.list(), &[2, 3, 4, 5, 6]);
}

#[test]
fn test_multi_map_averages_columns() {
    let a = Sequence::new(vec![1.0, 2.0, 3.0]);
    let b = Sequence::new(vec![3.0, 4.0, 5.0]);
    let c = Sequence::new(vec![5.0, 6.0, 7.0]);

    let avg = |row: &[f64]| row.iter().sum::<f64>() / row.len() as f64;
    let mean = multi_map(avg, &[&a, &b, &c]).unwrap();
    assert_eq!(mean.list(), &[3.0, 4.0, 5.0]);

    let mut step = multi_map_next(|row: &[f64]| row[0].max(row[2]), &[&a, &b, &c]).unwrap();
    assert_eq!(step.step(), (5.0, false));
    let rest: Vec<f64> = step.steps().collect();
    assert_eq!(rest, vec![6.0, 7.0]);
}
