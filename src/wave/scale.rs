/// A monotone mapping from a numeric domain to a numeric range.
///
/// Two-point scales interpolate and extrapolate linearly. Three-point scales interpolate within
/// whichever segment contains the input and hold the end values outside the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Linear { domain: [f64; 2], range: [f64; 2] },
    Piecewise { domain: [f64; 3], range: [f64; 3] },
}

impl Scale {
    /// Create a two-point linear scale.
    pub fn linear(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self::Linear { domain, range }
    }

    /// Create a three-point scale, e.g. the triangular `[0, peak, 0]` wave height profile.
    pub fn piecewise(domain: [f64; 3], range: [f64; 3]) -> Self {
        Self::Piecewise { domain, range }
    }

    /// Map `x` from the domain into the range.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Self::Linear { domain, range } => lerp_segment(domain[0], domain[1], range[0], range[1], x),
            Self::Piecewise { domain, range } => {
                if x <= domain[0] {
                    range[0]
                } else if x >= domain[2] {
                    range[2]
                } else if x <= domain[1] {
                    lerp_segment(domain[0], domain[1], range[0], range[1], x)
                } else {
                    lerp_segment(domain[1], domain[2], range[1], range[2], x)
                }
            }
        }
    }

    /// Map `y` from the range back into the domain.
    ///
    /// Returns `None` when no segment's range contains `y` or the segment is flat, since there's no
    /// single answer in that case.
    pub fn invert(&self, y: f64) -> Option<f64> {
        match self {
            Self::Linear { domain, range } => {
                if range[0] == range[1] {
                    return None;
                }
                Some(lerp_segment(range[0], range[1], domain[0], domain[1], y))
            }
            Self::Piecewise { domain, range } => (0..2).find_map(|i| {
                let (r0, r1) = (range[i], range[i + 1]);
                let contains = r0.min(r1) <= y && y <= r0.max(r1);
                if contains && r0 != r1 { Some(lerp_segment(r0, r1, domain[i], domain[i + 1], y)) } else { None }
            }),
        }
    }
}

fn lerp_segment(d0: f64, d1: f64, r0: f64, r1: f64, x: f64) -> f64 {
    // Degenerate domains collapse onto the range start
    if d1 == d0 {
        return r0;
    }
    r0 + (r1 - r0) * (x - d0) / (d1 - d0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 10.0)]
    #[case(0.5, 15.0)]
    #[case(1.0, 20.0)]
    #[case(2.0, 30.0)]
    #[case(-1.0, 0.0)]
    fn linear_interpolates_and_extrapolates(#[case] x: f64, #[case] expected: f64) {
        let scale = Scale::linear([0.0, 1.0], [10.0, 20.0]);
        assert!((scale.apply(x) - expected).abs() < 1e-9);
    }

    #[test]
    fn inverted_range() {
        let scale = Scale::linear([0.0, 1.0], [110.0, 10.0]);
        assert_eq!(scale.apply(0.0), 110.0);
        assert_eq!(scale.apply(1.0), 10.0);
        assert!((scale.apply(0.25) - 85.0).abs() < 1e-9);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(25.0, 2.5)]
    #[case(50.0, 5.0)]
    #[case(75.0, 2.5)]
    #[case(100.0, 0.0)]
    #[case(-20.0, 0.0)]
    #[case(140.0, 0.0)]
    fn triangular_profile(#[case] x: f64, #[case] expected: f64) {
        let scale = Scale::piecewise([0.0, 50.0, 100.0], [0.0, 5.0, 0.0]);
        assert!((scale.apply(x) - expected).abs() < 1e-9);
    }

    #[test]
    fn piecewise_holds_end_values() {
        let scale = Scale::piecewise([0.0, 1.0, 2.0], [1.0, 3.0, 4.0]);
        assert_eq!(scale.apply(-5.0), 1.0);
        assert_eq!(scale.apply(9.0), 4.0);
    }

    #[test]
    fn invert_linear() {
        let scale = Scale::linear([0.0, 1.0], [110.0, 10.0]);
        let x = scale.invert(35.0).expect("invertible");
        assert!((x - 0.75).abs() < 1e-9);
        assert_eq!(Scale::linear([0.0, 1.0], [3.0, 3.0]).invert(3.0), None);
    }

    #[test]
    fn invert_piecewise_picks_first_segment() {
        let scale = Scale::piecewise([0.0, 50.0, 100.0], [0.0, 5.0, 0.0]);
        let x = scale.invert(2.5).expect("invertible");
        assert!((x - 25.0).abs() < 1e-9);
        assert_eq!(scale.invert(6.0), None);
    }
}
