use nalgebra::{Matrix3, Vector3};

use super::Differentiated;
use crate::error::ObjectiveError;

/// f(x) = sqrt(x1 + x2 + x3)
pub struct SqrtSum;

/// Sum of the components of `x`, if it is non-negative, or strictly positive
/// when `positive` is set.
fn domain_sum(
    x: &Vector3<f64>,
    function: &'static str,
    positive: bool,
) -> Result<f64, ObjectiveError> {
    let sum = x.sum();
    let (inside, requirement) = if positive {
        (sum > 0.0, "> 0")
    } else {
        (sum >= 0.0, ">= 0")
    };

    if inside {
        Ok(sum)
    } else {
        Err(ObjectiveError::Domain {
            function,
            quantity: "x1 + x2 + x3",
            value: sum,
            requirement,
        })
    }
}

impl Differentiated<3> for SqrtSum {
    const NAME: &'static str = "sqrt_sum";
    const FORMULA: &'static str = "sqrt(x1 + x2 + x3)";
    const SAMPLE_POINT: [f64; 3] = [1.0, 2.0, 3.0];
    const SAMPLE_DIRECTION: [f64; 3] = [0.0, 0.0, 1.0];

    fn f(x: &Vector3<f64>) -> Result<f64, ObjectiveError> {
        Ok(domain_sum(x, "sqrt_sum", false)?.sqrt())
    }

    fn grad(x: &Vector3<f64>) -> Result<Vector3<f64>, ObjectiveError> {
        let sum = domain_sum(x, "sqrt_sum gradient", true)?;
        Ok(Vector3::from_element(1.0 / (2.0 * sum.sqrt())))
    }

    fn hess(x: &Vector3<f64>) -> Result<Matrix3<f64>, ObjectiveError> {
        let sum = domain_sum(x, "sqrt_sum hessian", true)?;
        // sum^1.5 underflows for tiny positive sums, leaving an infinite entry.
        let denominator = 4.0 * sum.powf(1.5);
        let entry = -1.0 / denominator;
        if !entry.is_finite() {
            return Err(ObjectiveError::Domain {
                function: "sqrt_sum hessian",
                quantity: "4·(x1 + x2 + x3)^1.5",
                value: denominator,
                requirement: "a finite reciprocal",
            });
        }
        Ok(Matrix3::from_element(entry))
    }

    /// Sums the point and the direction separately before combining them,
    /// i.e. sqrt(Σx + α·Σd), rather than summing x + α·d.
    fn phi(x: &Vector3<f64>, direction: &Vector3<f64>, alpha: f64) -> Result<f64, ObjectiveError> {
        let radicand = x.sum() + direction.sum() * alpha;
        if radicand >= 0.0 {
            Ok(radicand.sqrt())
        } else {
            Err(ObjectiveError::Domain {
                function: "sqrt_sum phi",
                quantity: "Σx + α·Σd",
                value: radicand,
                requirement: ">= 0",
            })
        }
    }
}
