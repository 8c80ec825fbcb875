use log::info;

use std::fmt;

use crate::error::ObjectiveError;
use crate::evaluator::Evaluator;
use crate::functions::Differentiated;
use crate::utils::{format_vector, g_format};

const DIGITS: usize = 10;

/// Every operation of a function evaluated once at a single point and line.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub name: &'static str,
    pub formula: &'static str,
    pub point: Vec<f64>,
    pub direction: Vec<f64>,
    pub alpha: f64,
    pub value: f64,
    pub gradient: Vec<f64>,
    pub hessian: Vec<Vec<f64>>,
    pub phi: f64,
}

pub fn report<const D: usize, F: Differentiated<D>>(
    point: &[f64],
    direction: &[f64],
    alpha: f64,
) -> Result<Report, ObjectiveError> {
    let mut evaluator = Evaluator::<D, F>::new();

    let value = evaluator.function(point)?;
    let gradient = evaluator.gradient(point)?;
    let hessian = evaluator.hessian(point)?;
    evaluator.pre_search(point, direction)?;
    let phi = evaluator.phi(alpha)?;
    info!("Evaluated {} at {}", F::NAME, format_vector(point, DIGITS));

    Ok(Report {
        name: F::NAME,
        formula: F::FORMULA,
        point: point.to_vec(),
        direction: direction.to_vec(),
        alpha,
        value,
        gradient: gradient.as_slice().to_vec(),
        hessian: hessian
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect(),
        phi,
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let point = format_vector(&self.point, DIGITS);
        writeln!(f, "{}: f(x) = {}", self.name, self.formula)?;
        writeln!(f, "  f({}) = {}", point, g_format(self.value, DIGITS))?;
        writeln!(f, "  gradient = {}", format_vector(&self.gradient, DIGITS))?;
        writeln!(f, "  hessian  = [")?;
        for row in &self.hessian {
            writeln!(f, "    {},", format_vector(row, DIGITS))?;
        }
        writeln!(f, "  ]")?;
        write!(
            f,
            "  phi({}) along {} = {}",
            g_format(self.alpha, DIGITS),
            format_vector(&self.direction, DIGITS),
            g_format(self.phi, DIGITS)
        )
    }
}
