//! Two closed-form objective functions with analytic gradients and Hessians,
//! and their restriction to a line for use in one-dimensional searches.
//!
//! - [`SqrtSum`]: `sqrt(x1 + x2 + x3)`, evaluated through [`FunctionA`]
//! - [`LogBowl`]: `log(1 + (x1 - 2)^2 + (x2 - 1)^2)`, evaluated through [`FunctionB`]

pub mod error;
pub mod evaluator;
pub mod functions;
pub mod report;
pub mod utils;

pub use error::ObjectiveError;
pub use evaluator::{Evaluator, FunctionA, FunctionB};
pub use functions::{log_bowl::LogBowl, sqrt_sum::SqrtSum, Differentiated, Functions};
pub use report::Report;
