use std::ops::Range;

use ndarray::{ArrayBase, Data, Ix1, Ix2};

use crate::error::{Error, Result};

/// Margin used when every point shares the same coordinate on an axis.
const FLAT_AXIS_MARGIN: f64 = 0.5;

/// Evenly spaced values in `[start, stop)`, `ceil((stop - start) / step)` of them.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let count = ((stop - start) / step).ceil();
    if !(count.is_finite() && count > 0.0) {
        return Vec::new();
    }
    (0..count as usize).map(|i| start + i as f64 * step).collect()
}

/// Points `(x1, x2)` on the line `theta[0] + theta[1] * x1 + theta[2] * x2 = 0`,
/// with the intercept term scaled by `correction`.
pub fn decision_boundary(theta: &[f64], x1: &[f64], correction: f64) -> Result<Vec<(f64, f64)>> {
    let (t0, t1, t2) = match theta {
        [t0, t1, t2, ..] => (*t0, *t1, *t2),
        _ => return Err(Error::ThetaTooShort(theta.len())),
    };
    if t2 == 0.0 {
        return Err(Error::DegenerateBoundary);
    }
    Ok(x1
        .iter()
        .map(|&x| (x, -(t0 / t2 * correction + t1 / t2 * x)))
        .collect())
}

/// Clip a polyline to the band `lo <= y <= hi`.
///
/// Segments that cross a band edge are cut at the crossing, so a line that
/// passes through the band always keeps its entry and exit points.
pub fn clip_to_band(points: &[(f64, f64)], lo: f64, hi: f64) -> Vec<(f64, f64)> {
    let inside = |y: f64| y >= lo && y <= hi;
    let mut out: Vec<(f64, f64)> = Vec::new();

    for pair in points.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        if inside(y0) && out.last() != Some(&(x0, y0)) {
            out.push((x0, y0));
        }

        let mut hits: Vec<(f64, (f64, f64))> = [lo, hi]
            .into_iter()
            .filter(|&level| (y0 - level) * (y1 - level) < 0.0)
            .map(|level| {
                let t = (level - y0) / (y1 - y0);
                (t, (x0 + t * (x1 - x0), level))
            })
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        out.extend(hits.into_iter().map(|(_, p)| p));
    }

    if let Some(&(x, y)) = points.last() {
        if inside(y) && out.last() != Some(&(x, y)) {
            out.push((x, y));
        }
    }
    out
}

/// Min/max of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Returns `None` for an empty iterator.
    pub fn of<'a, I: IntoIterator<Item = &'a f64>>(values: I) -> Option<Self> {
        values.into_iter().fold(None, |acc, &v| {
            Some(match acc {
                None => Extent { min: v, max: v },
                Some(e) => Extent {
                    min: e.min.min(v),
                    max: e.max.max(v),
                },
            })
        })
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    pub fn margin(&self, fraction: f64) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            span * fraction
        } else {
            FLAT_AXIS_MARGIN
        }
    }

    /// `[min - margin, max + margin)` as an axis range.
    pub fn padded(&self, fraction: f64) -> Range<f64> {
        let m = self.margin(fraction);
        (self.min - m)..(self.max + m)
    }
}

/// Split the last two feature columns into label-1 and label-0 points.
/// Rows with any other label are dropped.
pub fn partition_by_label<S1, S2>(
    x: &ArrayBase<S1, Ix2>,
    y: &ArrayBase<S2, Ix1>,
) -> (Vec<(f64, f64)>, Vec<(f64, f64)>)
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let cols = x.ncols();
    let mut positives = Vec::new();
    let mut negatives = Vec::new();
    for (row, &label) in x.outer_iter().zip(y.iter()) {
        let point = (row[cols - 2], row[cols - 1]);
        if label == 1.0 {
            positives.push(point);
        } else if label == 0.0 {
            negatives.push(point);
        }
    }
    (positives, negatives)
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn arange_excludes_stop() {
        assert_eq!(arange(0.0, 1.0, 0.25), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(arange(0.0, 1.0, 0.3).len(), 4);
        assert_eq!(arange(-1.0, 1.0, 0.01).len(), 200);
        assert!(arange(1.0, 1.0, 0.1).is_empty());
        assert!(arange(0.0, 1.0, 0.0).is_empty());
        assert!(arange(0.0, f64::INFINITY, 0.01).is_empty());
        assert!(arange(f64::NEG_INFINITY, 1.0, 0.01).is_empty());
        assert!(arange(0.0, 1.0, f64::NAN).is_empty());
    }

    #[test]
    fn clip_keeps_inside_points_and_cuts_at_edges() {
        // y = -10x sampled every 0.1 over [-0.3, 0.3]
        let points: Vec<_> = (-3..=3).map(|i| (i as f64 / 10.0, -(i as f64))).collect();
        let clipped = clip_to_band(&points, -1.5, 1.5);

        assert_eq!(clipped.len(), 5);
        assert_eq!(clipped[0].1, 1.5);
        assert!((clipped[0].0 - -0.15).abs() < 1e-12);
        assert_eq!(&clipped[1..4], &points[2..5]);
        assert_eq!(clipped[4].1, -1.5);
        assert!((clipped[4].0 - 0.15).abs() < 1e-12);
    }

    #[test]
    fn clip_crosses_whole_band_within_one_segment() {
        let clipped = clip_to_band(&[(0.0, 10.0), (1.0, -10.0)], -2.0, 1.5);
        assert_eq!(clipped.len(), 2);
        assert_eq!(clipped[0].1, 1.5);
        assert_eq!(clipped[1].1, -2.0);
        assert!(clipped[0].0 < clipped[1].0);

        // Rising line: enters at the bottom edge first.
        let clipped = clip_to_band(&[(0.0, -10.0), (1.0, 10.0)], -2.0, 1.5);
        assert_eq!(clipped.iter().map(|p| p.1).collect::<Vec<_>>(), vec![-2.0, 1.5]);
    }

    #[test]
    fn clip_outside_band_is_empty() {
        assert!(clip_to_band(&[(0.0, 5.0), (1.0, 6.0)], -1.0, 1.0).is_empty());
        assert!(clip_to_band(&[], -1.0, 1.0).is_empty());
        assert_eq!(clip_to_band(&[(0.0, 0.5)], -1.0, 1.0), vec![(0.0, 0.5)]);
    }

    #[test]
    fn boundary_for_unit_theta_is_negative_diagonal() {
        let xs = arange(-2.4, 2.4, 0.01);
        let points = decision_boundary(&[0.0, 1.0, 1.0], &xs, 1.0).unwrap();
        assert_eq!(points.len(), xs.len());
        for (x1, x2) in points {
            assert_eq!(x2, -x1);
        }
    }

    #[test]
    fn correction_scales_intercept_only() {
        let points = decision_boundary(&[2.0, 1.0, 4.0], &[0.0, 4.0], 3.0).unwrap();
        // -(2/4 * 3 + 1/4 * x)
        assert_eq!(points, vec![(0.0, -1.5), (4.0, -2.5)]);
    }

    #[test]
    fn extra_theta_entries_are_ignored() {
        let a = decision_boundary(&[1.0, 2.0, 3.0], &[1.0], 1.0).unwrap();
        let b = decision_boundary(&[1.0, 2.0, 3.0, 9.0], &[1.0], 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn theta_validation() {
        assert!(matches!(
            decision_boundary(&[1.0, 2.0], &[0.0], 1.0),
            Err(Error::ThetaTooShort(2))
        ));
        assert!(matches!(
            decision_boundary(&[1.0, 2.0, 0.0], &[0.0], 1.0),
            Err(Error::DegenerateBoundary)
        ));
    }

    #[test]
    fn extent_and_margin() {
        let e = Extent::of(&[3.0, -1.0, 4.0]).unwrap();
        assert_eq!(e, Extent { min: -1.0, max: 4.0 });
        assert_eq!(e.margin(0.2), 1.0);
        assert_eq!(e.padded(0.2), -2.0..5.0);

        let flat = Extent::of(&[2.0, 2.0]).unwrap();
        assert_eq!(flat.padded(0.2), 1.5..2.5);

        assert!(Extent::of(std::iter::empty()).is_none());
        assert!(e.is_finite());
        assert!(!Extent::of(&[1.0, f64::INFINITY]).unwrap().is_finite());
    }

    #[test]
    fn partition_drops_unknown_labels() {
        let x = array![[1.0, 10.0, 20.0], [1.0, 11.0, 21.0], [1.0, 12.0, 22.0], [1.0, 13.0, 23.0]];
        let y = array![1.0, 0.0, 2.0, 1.0];
        let (pos, neg) = partition_by_label(&x, &y);
        assert_eq!(pos, vec![(10.0, 20.0), (13.0, 23.0)]);
        assert_eq!(neg, vec![(11.0, 21.0)]);
    }
}
