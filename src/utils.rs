use itertools::Itertools;

/// Formats a list of names as 'a', 'b' and 'c'.
pub fn prettify_list(list: &[&str]) -> String {
    match list {
        [] => String::new(),
        [only] => format!("'{}'", only),
        [rest @ .., last] => format!(
            "{} and '{}'",
            rest.iter().map(|s| format!("'{}'", s)).join(", "),
            last
        ),
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Formats a number with the given amount of significant digits, like printf's %g.
pub fn g_format(value: f64, significant: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let significant = significant.max(1);
    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= significant as i32 {
        let formatted = format!("{:.*e}", significant - 1, value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) => format!("{}e{}", trim_zeros(mantissa), exponent),
            None => formatted,
        }
    } else {
        let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

pub fn format_vector(values: &[f64], significant: usize) -> String {
    format!(
        "[{}]",
        values.iter().map(|v| g_format(*v, significant)).join(", ")
    )
}
