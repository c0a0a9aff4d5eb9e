//! Proportional partition of the canvas along one axis.

/// The span of one band along the partition axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// Offset from the canvas edge.
    pub start: f64,
    /// Extent along the axis.
    pub len: f64,
}

impl Segment {
    /// End of the segment (exclusive).
    pub fn end(&self) -> f64 {self.start + self.len}
}

/// Returns the sum of weights.
pub fn total_weight(weights: &[f64]) -> f64 {weights.iter().sum()}

/// Partitions `extent` into one segment per weight, in order.
///
/// Returns an empty list when the total weight is not positive.
pub fn partition(weights: &[f64], extent: f64) -> Vec<Segment> {
    let mut scale = 1.0;
    let mut tot = total_weight(weights);
    // Finite weights can still overflow the sum.
    if tot == f64::INFINITY && weights.iter().all(|w| w.is_finite()) {
        scale = weights.iter().fold(0.0_f64, |m, &w| m.max(w));
        tot = weights.iter().map(|w| w / scale).sum();
    }
    if !(tot.is_finite() && tot > 0.0) {return vec![]};

    let mut acc = 0.0;
    weights.iter().map(|&w| {
        let share = (w / scale) / tot;
        let seg = Segment {start: acc * extent, len: share * extent};
        acc += share;
        seg
    }).collect()
}

/// Assigns each pixel line `0..n` to the band whose segment contains its center.
///
/// Lines past the last segment end, which only happens through rounding,
/// go to the last band with positive extent.
pub fn pixel_bands(weights: &[f64], n: u32) -> Vec<Option<usize>> {
    let segs = partition(weights, n as f64);
    let last = match segs.iter().rposition(|s| s.len > 0.0) {
        None => return vec![None; n as usize],
        Some(i) => i,
    };
    let mut i = 0;
    (0..n).map(|p| {
        let c = p as f64 + 0.5;
        while i < last && !(segs[i].len > 0.0 && c < segs[i].end()) {i += 1}
        Some(i)
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_extent() {
        let w = [1.0, 3.0, 0.5, 7.25];
        let segs = partition(&w, 321.0);
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[0].start, 0.0);
        for pair in segs.windows(2) {
            assert!((pair[0].end() - pair[1].start).abs() < 1e-9);
        }
        let sum: f64 = segs.iter().map(|s| s.len).sum();
        assert!((sum - 321.0).abs() < 1e-9);
        assert!((segs[3].end() - 321.0).abs() < 1e-9);
    }

    #[test]
    fn proportions() {
        let segs = partition(&[1.0, 3.0], 100.0);
        assert_eq!(segs, vec![
            Segment {start: 0.0, len: 25.0},
            Segment {start: 25.0, len: 75.0},
        ]);
        // Same shares along a different extent.
        let segs = partition(&[1.0, 3.0], 400.0);
        assert_eq!(segs[0].len, 100.0);
        assert_eq!(segs[1].len, 300.0);
    }

    #[test]
    fn zero_total() {
        assert!(partition(&[], 100.0).is_empty());
        assert!(partition(&[0.0, 0.0], 100.0).is_empty());
        assert_eq!(pixel_bands(&[0.0], 3), vec![None; 3]);
        assert!(pixel_bands(&[], 0).is_empty());
    }

    #[test]
    fn pixels() {
        let p = pixel_bands(&[1.0, 3.0], 100);
        assert!(p[..25].iter().all(|&b| b == Some(0)));
        assert!(p[25..].iter().all(|&b| b == Some(1)));

        // Zero weight bands paint nothing.
        let p = pixel_bands(&[0.0, 1.0, 0.0, 1.0, 0.0], 4);
        assert_eq!(p, vec![Some(1), Some(1), Some(3), Some(3)]);

        // Thirds do not divide evenly.
        let p = pixel_bands(&[1.0, 1.0, 1.0], 10);
        assert_eq!(p.iter().filter(|&&b| b == Some(0)).count(), 3);
        assert_eq!(p.iter().filter(|&&b| b == Some(1)).count(), 4);
        assert_eq!(p.iter().filter(|&&b| b == Some(2)).count(), 3);
    }

    #[test]
    fn huge_weights() {
        let p = pixel_bands(&[1e308, 1e308], 10);
        assert_eq!(p, vec![Some(0), Some(0), Some(0), Some(0), Some(0),
                           Some(1), Some(1), Some(1), Some(1), Some(1)]);

        let segs = partition(&[f64::MAX, f64::MAX, f64::MAX, 0.0], 300.0);
        assert_eq!(segs.len(), 4);
        let sum: f64 = segs.iter().map(|s| s.len).sum();
        assert!((sum - 300.0).abs() < 1e-9);
        assert_eq!(segs[3].len, 0.0);
    }

    #[test]
    fn order() {
        let p = pixel_bands(&[2.0, 1.0, 5.0, 0.3], 997);
        assert!(p.windows(2).all(|w| w[0] <= w[1]));
        assert!(p.iter().all(|b| b.is_some()));
    }
}
