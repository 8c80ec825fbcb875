use thiserror::Error;

/// Errors produced when evaluating an objective.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjectiveError {
    /// An input slice did not have the function's fixed dimensionality.
    #[error("{function} expects a {expected}-dimensional {argument}, but got {got} components")]
    Dimension {
        function: &'static str,
        argument: &'static str,
        expected: usize,
        got: usize,
    },

    /// The input lies outside the real-valued domain of the function.
    #[error("{function} is undefined for {quantity} = {value} (requires {requirement})")]
    Domain {
        function: &'static str,
        quantity: &'static str,
        value: f64,
        requirement: &'static str,
    },
}
