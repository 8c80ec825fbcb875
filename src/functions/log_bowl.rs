use nalgebra::{Matrix2, Vector2};

use super::Differentiated;
use crate::error::ObjectiveError;

/// f(x) = log(1 + (x1 - 2)^2 + (x2 - 1)^2), minimized at (2, 1).
pub struct LogBowl;

impl Differentiated<2> for LogBowl {
    const NAME: &'static str = "log_bowl";
    const FORMULA: &'static str = "log(1 + (x1 - 2)^2 + (x2 - 1)^2)";
    const SAMPLE_POINT: [f64; 2] = [1.0, 2.0];
    const SAMPLE_DIRECTION: [f64; 2] = [0.0, 1.0];

    fn f(x: &Vector2<f64>) -> Result<f64, ObjectiveError> {
        let (x1, x2) = (x.x, x.y);
        Ok((1.0 + (x1 - 2.0).powi(2) + (x2 - 1.0).powi(2)).ln())
    }

    fn grad(x: &Vector2<f64>) -> Result<Vector2<f64>, ObjectiveError> {
        let (x1, x2) = (x.x, x.y);
        let denominator = (x1 - 2.0).powi(2) + (x2 - 1.0).powi(2) + 1.0;
        Ok(Vector2::new(x1 - 2.0, x2 - 1.0) * 2.0 / denominator)
    }

    fn hess(x: &Vector2<f64>) -> Result<Matrix2<f64>, ObjectiveError> {
        let (x1, x2) = (x.x, x.y);
        let denominator = (x1 * x1 - 4.0 * x1 + x2 * x2 - 2.0 * x2 + 6.0).powi(2);

        let h11 = -2.0 * (x1 * x1 - 4.0 * x1 - x2 * x2 + 2.0 * x2 + 2.0) / denominator;
        let h12 = -4.0 * (x1 - 2.0) * (x2 - 1.0) / denominator;
        let h22 = 2.0 * (x1 * x1 - 4.0 * x1 - x2 * x2 + 2.0 * x2 + 4.0) / denominator;

        Ok(Matrix2::new(h11, h12, h12, h22))
    }
}
