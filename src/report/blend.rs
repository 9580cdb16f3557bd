//! SWACC Blend Curve Module
//! Computes the effective discount rate as a convex combination of the
//! corporate WACC and the social discount rate, sampled over lambda.

use serde::Serialize;

/// Corporate WACC in percent.
pub const CORPORATE_RATE: f64 = 10.0;
/// Social discount rate in percent.
pub const SOCIAL_RATE: f64 = 3.0;
/// Number of lambda steps; the curve has BLEND_STEPS + 1 points.
pub const BLEND_STEPS: usize = 10;

/// One sample of the blend curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlendPoint {
    /// Weight on the social discount rate, in [0, 1].
    pub lambda: f64,
    /// Blended rate in percent.
    pub effective_rate: f64,
}

/// The sampled SWACC blend curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlendCurve {
    pub corporate_rate: f64,
    pub social_rate: f64,
    pub points: Vec<BlendPoint>,
}

impl BlendCurve {
    /// Sample the convex combination `(1 - lambda) * corporate + lambda * social`
    /// at lambda = 0.0, 0.1, ..., 1.0.
    pub fn compute(corporate_rate: f64, social_rate: f64) -> Self {
        let points = (0..=BLEND_STEPS)
            .map(|i| {
                let lambda = i as f64 / BLEND_STEPS as f64;
                BlendPoint {
                    lambda,
                    effective_rate: (1.0 - lambda) * corporate_rate + lambda * social_rate,
                }
            })
            .collect();

        Self {
            corporate_rate,
            social_rate,
            points,
        }
    }

    /// The report's blend curve, using the fixed SWACC constants.
    pub fn swacc() -> Self {
        Self::compute(CORPORATE_RATE, SOCIAL_RATE)
    }

    /// Lambda values formatted for a categorical axis ("0.0" through "1.0").
    pub fn lambda_labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| format!("{:.1}", p.lambda))
            .collect()
    }

    /// The effective-rate series.
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.effective_rate).collect()
    }
}
