use log::{debug, trace};
use nalgebra::{SMatrix, SVector};

use std::{fmt, marker::PhantomData};

use crate::error::ObjectiveError;
use crate::functions::{log_bowl::LogBowl, sqrt_sum::SqrtSum, to_vector, Differentiated};

/// Evaluator for `sqrt(x1 + x2 + x3)`.
pub type FunctionA = Evaluator<3, SqrtSum>;
/// Evaluator for `log(1 + (x1 - 2)^2 + (x2 - 1)^2)`.
pub type FunctionB = Evaluator<2, LogBowl>;

/// Slice based access to a [`Differentiated`] function, remembering the last
/// line given to [`Evaluator::pre_search`] so that [`Evaluator::phi`] can be
/// called with only a step length.
///
/// The line starts out as the zero point with a zero direction, and `phi`
/// evaluates on that line until `pre_search` replaces it.
pub struct Evaluator<const D: usize, F: Differentiated<D>> {
    x_phi: SVector<f64, D>,
    direction_phi: SVector<f64, D>,
    function: PhantomData<F>,
}

impl<const D: usize, F: Differentiated<D>> Evaluator<D, F> {
    pub fn new() -> Self {
        Self {
            x_phi: SVector::zeros(),
            direction_phi: SVector::zeros(),
            function: PhantomData,
        }
    }

    pub fn function(&self, x: &[f64]) -> Result<f64, ObjectiveError> {
        F::f(&to_vector::<D>(F::NAME, "point", x)?)
    }

    pub fn gradient(&self, x: &[f64]) -> Result<SVector<f64, D>, ObjectiveError> {
        F::grad(&to_vector::<D>(F::NAME, "point", x)?)
    }

    pub fn hessian(&self, x: &[f64]) -> Result<SMatrix<f64, D, D>, ObjectiveError> {
        F::hess(&to_vector::<D>(F::NAME, "point", x)?)
    }

    /// Stores the line used by [`Evaluator::phi`]. Both slices are checked
    /// before anything is stored, so a failed call leaves the previous line
    /// in place.
    pub fn pre_search(&mut self, x: &[f64], direction: &[f64]) -> Result<(), ObjectiveError> {
        let x = to_vector::<D>(F::NAME, "point", x)?;
        let direction = to_vector::<D>(F::NAME, "direction", direction)?;
        debug!(
            "{}: searching from {:?} along {:?}",
            F::NAME,
            x.as_slice(),
            direction.as_slice()
        );

        self.x_phi = x;
        self.direction_phi = direction;
        Ok(())
    }

    pub fn phi(&self, alpha: f64) -> Result<f64, ObjectiveError> {
        trace!("{}: phi({})", F::NAME, alpha);
        F::phi(&self.x_phi, &self.direction_phi, alpha)
    }

    pub fn x_phi(&self) -> &SVector<f64, D> {
        &self.x_phi
    }

    pub fn direction_phi(&self) -> &SVector<f64, D> {
        &self.direction_phi
    }
}

impl<const D: usize, F: Differentiated<D>> Default for Evaluator<D, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize, F: Differentiated<D>> Clone for Evaluator<D, F> {
    fn clone(&self) -> Self {
        Self {
            x_phi: self.x_phi,
            direction_phi: self.direction_phi,
            function: PhantomData,
        }
    }
}

impl<const D: usize, F: Differentiated<D>> fmt::Debug for Evaluator<D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("function", &F::NAME)
            .field("x_phi", &self.x_phi.as_slice())
            .field("direction_phi", &self.direction_phi.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Vector2, Vector3};

    #[test]
    fn test_function_a_sample() {
        let mut a = FunctionA::new();
        assert_relative_eq!(a.function(&[1.0, 2.0, 3.0]).unwrap(), 6_f64.sqrt());
        assert_relative_eq!(
            a.gradient(&[1.0, 2.0, 3.0]).unwrap(),
            Vector3::from_element(0.20412415),
            epsilon = 1e-8
        );
        assert_relative_eq!(
            a.hessian(&[1.0, 2.0, 3.0]).unwrap()[(2, 1)],
            -1.0 / (4.0 * 6_f64.powf(1.5))
        );

        a.pre_search(&[1.0, 2.0, 3.0], &[0.0, 0.0, 1.0]).unwrap();
        assert_eq!(a.phi(3.0).unwrap(), 3.0);
    }

    #[test]
    fn test_function_b_sample() {
        let mut b = FunctionB::default();
        assert_relative_eq!(b.function(&[1.0, 2.0]).unwrap(), 1.098612289, epsilon = 1e-9);

        b.pre_search(&[1.0, 2.0], &[0.0, 1.0]).unwrap();
        assert_relative_eq!(b.phi(3.0).unwrap(), 2.890371758, epsilon = 1e-9);
        assert_relative_eq!(b.phi(3.0).unwrap(), 18_f64.ln());
    }

    #[test]
    fn test_phi_before_pre_search_uses_zero_line() {
        let a = FunctionA::new();
        assert_eq!(a.x_phi(), &Vector3::zeros());
        assert_eq!(a.phi(10.0).unwrap(), 0.0);

        let b = FunctionB::new();
        assert_eq!(b.direction_phi(), &Vector2::zeros());
        assert_relative_eq!(b.phi(10.0).unwrap(), 6_f64.ln());
    }

    #[test]
    fn test_failed_pre_search_keeps_line() {
        let mut b = FunctionB::new();
        b.pre_search(&[1.0, 2.0], &[0.0, 1.0]).unwrap();

        assert_eq!(
            b.pre_search(&[5.0, 5.0], &[1.0, 1.0, 1.0]),
            Err(ObjectiveError::Dimension {
                function: "log_bowl",
                argument: "direction",
                expected: 2,
                got: 3,
            })
        );
        assert_eq!(b.x_phi(), &Vector2::new(1.0, 2.0));
        assert_eq!(b.direction_phi(), &Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_wrong_dimensions() {
        let a = FunctionA::new();
        assert!(matches!(
            a.function(&[1.0, 2.0]),
            Err(ObjectiveError::Dimension { expected: 3, got: 2, .. })
        ));
        assert!(a.gradient(&[1.0, 2.0, 3.0, 4.0]).is_err());

        let b = FunctionB::new();
        assert!(matches!(
            b.hessian(&[1.0]),
            Err(ObjectiveError::Dimension { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_domain_errors_reach_caller() {
        let a = FunctionA::new();
        assert!(matches!(
            a.gradient(&[0.0, 0.0, 0.0]),
            Err(ObjectiveError::Domain { .. })
        ));

        let mut a = FunctionA::new();
        a.pre_search(&[1.0, 1.0, 1.0], &[-1.0, 0.0, 0.0]).unwrap();
        assert_eq!(a.phi(3.0).unwrap(), 0.0);
        assert!(a.phi(3.5).is_err());
    }

    /// For A, phi sums the point and the direction separately; since the sum
    /// is linear this only differs from f(x + αd) by rounding. For B, phi
    /// is exactly f(x + αd).
    #[test]
    fn test_phi_against_function_along_line() {
        let (x, d) = ([0.1, 0.7, 1.3], [0.3, -0.1, 0.45]);
        let mut a = FunctionA::new();
        a.pre_search(&x, &d).unwrap();
        for alpha in [0.0, 0.37, 1.0, 2.9, 11.3] {
            let on_line: Vec<f64> = x.iter().zip(d).map(|(x, d)| x + alpha * d).collect();
            let separate_sums = (x.iter().sum::<f64>() + d.iter().sum::<f64>() * alpha).sqrt();

            assert_eq!(a.phi(alpha).unwrap(), separate_sums);
            assert_relative_eq!(
                a.phi(alpha).unwrap(),
                a.function(&on_line).unwrap(),
                max_relative = 1e-14
            );
        }

        let (x, d) = ([-0.4, 3.1], [0.8, -0.6]);
        let mut b = FunctionB::new();
        b.pre_search(&x, &d).unwrap();
        for alpha in [0.0, 0.37, 1.0, 2.9, 11.3] {
            let on_line: Vec<f64> = x.iter().zip(d).map(|(x, d)| x + alpha * d).collect();
            assert_eq!(b.phi(alpha).unwrap(), b.function(&on_line).unwrap());
        }
    }
}
