use nalgebra::{DMatrix, DVector, SMatrix, SVector};
use strum::VariantNames;
use strum_macros::{EnumIter, EnumString, VariantNames};

use std::str::FromStr;

use crate::error::ObjectiveError;
use crate::report::{report, Report};
use crate::utils::prettify_list;

/// A scalar objective over `D`-dimensional points with closed-form derivatives.
pub trait Differentiated<const D: usize> {
    const NAME: &'static str;
    const FORMULA: &'static str;
    /// Inputs used when a caller asks for a demonstration without supplying any.
    const SAMPLE_POINT: [f64; D];
    const SAMPLE_DIRECTION: [f64; D];

    fn f(x: &SVector<f64, D>) -> Result<f64, ObjectiveError>;

    fn grad(x: &SVector<f64, D>) -> Result<SVector<f64, D>, ObjectiveError>;

    fn hess(x: &SVector<f64, D>) -> Result<SMatrix<f64, D, D>, ObjectiveError>;

    /// The objective restricted to the line through `x` along `direction`,
    /// evaluated at step length `alpha`.
    fn phi(x: &SVector<f64, D>, direction: &SVector<f64, D>, alpha: f64) -> Result<f64, ObjectiveError> {
        Self::f(&(x + direction * alpha))
    }
}

/// Copies `values` into a fixed size vector, failing if the lengths differ.
pub fn to_vector<const D: usize>(
    function: &'static str,
    argument: &'static str,
    values: &[f64],
) -> Result<SVector<f64, D>, ObjectiveError> {
    if values.len() != D {
        return Err(ObjectiveError::Dimension {
            function,
            argument,
            expected: D,
            got: values.len(),
        });
    }
    Ok(SVector::from_column_slice(values))
}

macro_rules! create_function_enum {
    ($($file:ident::$typename:ident<$D:literal>),*,) => {
        $(pub mod $file);*;

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, VariantNames)]
        #[strum(serialize_all = "snake_case")]
        pub enum Functions {
            $($typename),*
        }

        impl Functions {
            /// Tries to create a function from a function name, returns a string with
            /// a descriptive error message if the function name is invalid.
            pub fn descriptive_from_str(s: &str) -> Result<Functions, String> {
                Self::from_str(&s.to_lowercase()).map_err(|_| format!(
                    "Got malformed function name '{}'. Legal \
                    function names are {}.", s, prettify_list(Self::VARIANTS)
                ))
            }

            pub fn dimension(&self) -> usize {
                match self {
                    $(Self::$typename => $D),*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$typename => $file::$typename::NAME),*
                }
            }

            pub fn formula(&self) -> &'static str {
                match self {
                    $(Self::$typename => $file::$typename::FORMULA),*
                }
            }

            pub fn f(&self, x: &[f64]) -> Result<f64, ObjectiveError> {
                match self {
                    $(Self::$typename => {
                        let x = to_vector::<$D>($file::$typename::NAME, "point", x)?;
                        $file::$typename::f(&x)
                    }),*
                }
            }

            pub fn grad(&self, x: &[f64]) -> Result<DVector<f64>, ObjectiveError> {
                match self {
                    $(Self::$typename => {
                        let x = to_vector::<$D>($file::$typename::NAME, "point", x)?;
                        let grad = $file::$typename::grad(&x)?;
                        Ok(DVector::from_column_slice(grad.as_slice()))
                    }),*
                }
            }

            pub fn hess(&self, x: &[f64]) -> Result<DMatrix<f64>, ObjectiveError> {
                match self {
                    $(Self::$typename => {
                        let x = to_vector::<$D>($file::$typename::NAME, "point", x)?;
                        let hess = $file::$typename::hess(&x)?;
                        Ok(DMatrix::from_column_slice($D, $D, hess.as_slice()))
                    }),*
                }
            }

            pub fn phi(&self, x: &[f64], direction: &[f64], alpha: f64) -> Result<f64, ObjectiveError> {
                match self {
                    $(Self::$typename => {
                        let x = to_vector::<$D>($file::$typename::NAME, "point", x)?;
                        let direction = to_vector::<$D>($file::$typename::NAME, "direction", direction)?;
                        $file::$typename::phi(&x, &direction, alpha)
                    }),*
                }
            }

            /// Evaluates every operation once, falling back to the sample
            /// inputs of the function where no point or direction is given.
            pub fn report(
                &self,
                point: Option<&[f64]>,
                direction: Option<&[f64]>,
                alpha: f64,
            ) -> Result<Report, ObjectiveError> {
                match self {
                    $(Self::$typename => {
                        let point = point.unwrap_or(&$file::$typename::SAMPLE_POINT);
                        let direction = direction.unwrap_or(&$file::$typename::SAMPLE_DIRECTION);
                        report::<$D, $file::$typename>(point, direction, alpha)
                    }),*
                }
            }
        }
    };
}

create_function_enum!(
    sqrt_sum::SqrtSum<3>,
    log_bowl::LogBowl<2>,
);
