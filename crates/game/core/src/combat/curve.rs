//! Configurable defense mitigation curve.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub defense: f64,
    pub multiplier: f64,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CurveError {
    #[error("mitigation curve needs at least one point")]
    Empty,

    #[error("point {index}: defense values must be finite and strictly ascending")]
    NonAscending { index: usize },

    #[error("point {index}: multiplier {multiplier} is outside [0, 1]")]
    OutOfRange { index: usize, multiplier: f64 },

    #[error("point {index}: multiplier increases with defense")]
    Increasing { index: usize },
}

/// Piecewise-linear map from effective defense to a damage multiplier.
///
/// Multipliers never increase with defense. Inputs left of the first point
/// take the first multiplier and inputs right of the last point take the last.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")
)]
pub struct MitigationCurve {
    points: Vec<CurvePoint>,
}

impl MitigationCurve {
    pub const DEFAULT_POINTS: [(f64, f64); 2] = [(0.0, 1.0), (100.0, 0.05)];

    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> Result<Self, CurveError> {
        let points: Vec<CurvePoint> = points
            .into_iter()
            .map(|(defense, multiplier)| CurvePoint {
                defense,
                multiplier,
            })
            .collect();

        if points.is_empty() {
            return Err(CurveError::Empty);
        }

        for (index, point) in points.iter().enumerate() {
            if !(0.0..=1.0).contains(&point.multiplier) {
                return Err(CurveError::OutOfRange {
                    index,
                    multiplier: point.multiplier,
                });
            }
            if !point.defense.is_finite() {
                return Err(CurveError::NonAscending { index });
            }
            if index > 0 {
                let previous = points[index - 1];
                if point.defense <= previous.defense {
                    return Err(CurveError::NonAscending { index });
                }
                if point.multiplier > previous.multiplier {
                    return Err(CurveError::Increasing { index });
                }
            }
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn multiplier(&self, effective_defense: f64) -> f64 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return 1.0;
        };

        if effective_defense.is_nan() || effective_defense <= first.defense {
            return first.multiplier;
        }
        if effective_defense >= last.defense {
            return last.multiplier;
        }

        self.points
            .windows(2)
            .find(|pair| effective_defense <= pair[1].defense)
            .map(|pair| {
                let (lo, hi) = (pair[0], pair[1]);
                let t = (effective_defense - lo.defense) / (hi.defense - lo.defense);
                lo.multiplier + t * (hi.multiplier - lo.multiplier)
            })
            .unwrap_or(last.multiplier)
    }
}

impl Default for MitigationCurve {
    fn default() -> Self {
        Self {
            points: Self::DEFAULT_POINTS
                .iter()
                .map(|&(defense, multiplier)| CurvePoint {
                    defense,
                    multiplier,
                })
                .collect(),
        }
    }
}

impl TryFrom<Vec<(f64, f64)>> for MitigationCurve {
    type Error = CurveError;

    fn try_from(points: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<MitigationCurve> for Vec<(f64, f64)> {
    fn from(curve: MitigationCurve) -> Self {
        curve
            .points
            .into_iter()
            .map(|p| (p.defense, p.multiplier))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_curve_edges() {
        let curve = MitigationCurve::default();
        assert_eq!(curve.multiplier(0.0), 1.0);
        assert_eq!(curve.multiplier(-40.0), 1.0);
        assert!(curve.multiplier(100.0) <= 0.05);
        assert!(curve.multiplier(10_000.0) <= 0.05);
    }

    #[test]
    fn multiplier_is_monotone_non_increasing() {
        let curves = [
            MitigationCurve::default(),
            MitigationCurve::new([(0.0, 1.0), (50.0, 0.8), (100.0, 0.1), (400.0, 0.0)]).unwrap(),
        ];
        for curve in curves {
            let mut previous = f64::INFINITY;
            for step in -20..=500 {
                let m = curve.multiplier(step as f64);
                assert!(m <= previous, "increase at defense {step}");
                previous = m;
            }
        }
    }

    #[test]
    fn interpolates_between_points() {
        let curve = MitigationCurve::new([(0.0, 1.0), (100.0, 0.0)]).unwrap();
        assert!((curve.multiplier(50.0) - 0.5).abs() < 1e-12);
        assert!((curve.multiplier(25.0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn rejects_invalid_curves() {
        assert_eq!(MitigationCurve::new(Vec::<(f64, f64)>::new()), Err(CurveError::Empty));
        assert_eq!(
            MitigationCurve::new([(0.0, 1.0), (0.0, 0.5)]),
            Err(CurveError::NonAscending { index: 1 })
        );
        assert_eq!(
            MitigationCurve::new([(0.0, 0.5), (10.0, 0.7)]),
            Err(CurveError::Increasing { index: 1 })
        );
        assert!(matches!(
            MitigationCurve::new([(0.0, 1.5)]),
            Err(CurveError::OutOfRange { index: 0, .. })
        ));
    }
}
