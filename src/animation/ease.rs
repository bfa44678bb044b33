/// Rate curve mapping normalized elapsed time to normalized progress.
///
/// Every curve maps `0 -> 0` and `1 -> 1` exactly; input is clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant velocity.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// Logistic S-curve rescaled onto `[0, 1]`: slow start, fast middle, slow end.
    ///
    /// The inflection sits at [`Ease::SIGMOID_CENTER`], so progress is already past one half
    /// at `t = 0.5`.
    Sigmoid,
}

impl Ease {
    /// Steepness of [`Ease::Sigmoid`].
    pub const SIGMOID_STEEPNESS: f64 = 10.0;
    /// Normalized time of the steepest point of [`Ease::Sigmoid`].
    pub const SIGMOID_CENTER: f64 = 0.45;

    /// Map normalized time `t` to normalized progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Sigmoid => {
                let (k, c) = (Self::SIGMOID_STEEPNESS, Self::SIGMOID_CENTER);
                let lo = logistic(-k * c);
                let hi = logistic(k * (1.0 - c));
                (logistic(k * (t - c)) - lo) / (hi - lo)
            }
        }
    }
}

fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
