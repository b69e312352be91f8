//! Contiguous partition planning for `tee`.
//!
//! Parts never overlap and together cover the whole range. When the length
//! divides evenly every part has `len / parts` elements; otherwise parts take
//! `ceil(len / parts)` elements and the last part gets what is left, which can
//! leave fewer parts than requested (e.g. 5 elements into 4 parts gives 2, 2, 1).

use std::ops::Range;

use seqtools_core::error::{Error, Result};

pub fn plan_partitions(len: usize, parts: usize) -> Result<Vec<Range<usize>>> {
    if parts == 0 {
        return Err(Error::InvalidArgument(
            "tee needs at least 1 partition".into(),
        ));
    }
    if len == 0 {
        return Ok(std::iter::once(0..0).collect());
    }

    let chunk = len.div_ceil(parts);
    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;
    while start + chunk < len {
        ranges.push(start..start + chunk);
        start += chunk;
    }
    ranges.push(start..len);

    #[cfg(feature = "tracing")]
    tracing::trace!(len, requested = parts, planned = ranges.len(), chunk, "planned partitions");
    Ok(ranges)
}

/// Split `data` into the disjoint mutable slices `plan_partitions` describes.
pub fn split_views<T>(data: &mut [T], parts: usize) -> Result<Vec<&mut [T]>> {
    let ranges = plan_partitions(data.len(), parts)?;
    let mut views = Vec::with_capacity(ranges.len());
    let mut rest = data;
    for range in ranges {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        views.push(head);
        rest = tail;
    }
    Ok(views)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        assert_eq!(plan_partitions(20, 2).unwrap(), vec![0..10, 10..20]);
        assert_eq!(plan_partitions(12, 4).unwrap(), vec![0..3, 3..6, 6..9, 9..12]);
    }

    #[test]
    fn test_uneven_split_last_takes_remainder() {
        assert_eq!(plan_partitions(10, 4).unwrap(), vec![0..3, 3..6, 6..9, 9..10]);
        assert_eq!(plan_partitions(10, 3).unwrap(), vec![0..4, 4..8, 8..10]);
        assert_eq!(plan_partitions(5, 4).unwrap(), vec![0..2, 2..4, 4..5]);
    }

    #[test]
    fn test_more_parts_than_elements() {
        assert_eq!(plan_partitions(3, 5).unwrap(), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(matches!(plan_partitions(4, 0), Err(Error::InvalidArgument(_))));
        let plan = plan_partitions(0, 3).unwrap();
        assert_eq!(plan.len(), 1);
        assert!(plan[0].is_empty());
        assert_eq!(plan_partitions(7, 1).unwrap(), vec![0..7]);
    }

    #[test]
    fn test_split_views_are_disjoint_and_writable() {
        let mut data: Vec<u32> = (0..10).collect();
        {
            let views = split_views(&mut data, 3).unwrap();
            assert_eq!(views.len(), 3);
            for (i, view) in views.into_iter().enumerate() {
                for x in view.iter_mut() {
                    *x += 100 * (i as u32 + 1);
                }
            }
        }
        assert_eq!(
            data,
            vec![100, 101, 102, 103, 204, 205, 206, 207, 308, 309]
        );
    }
}
