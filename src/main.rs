use clap::Parser;
use log::{error, LevelFilter};
use std::{env, process::ExitCode};
use strum::{IntoEnumIterator, VariantNames};

use omega_objectives::{utils, Functions};

#[derive(Parser)]
struct Args {
    /// Name of the function you want to evaluate. Every function is evaluated
    /// at its sample point when left out.
    /// Use the -p flag to get a list of valid function names
    #[arg(value_parser=Functions::descriptive_from_str)]
    function: Option<Functions>,
    /// Space separated components of the point to evaluate at.
    /// Requires a function name
    #[arg(short = 'x', long, num_args = 1.., allow_negative_numbers = true)]
    point: Option<Vec<f64>>,
    /// Space separated components of the search direction used by phi.
    /// Requires a function name
    #[arg(short, long, num_args = 1.., allow_negative_numbers = true)]
    direction: Option<Vec<f64>>,
    /// Step length phi is evaluated at
    #[arg(short, long, default_value_t = 3.0, allow_negative_numbers = true)]
    alpha: f64,
    /// Log what the evaluators are doing.
    #[arg(short, long)]
    verbose: bool,
    /// Print a list of all valid function names
    #[arg(short, long)]
    print_function_names: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.print_function_names {
        println!(
            "Valid function names are {}.",
            utils::prettify_list(Functions::VARIANTS)
        );
    }

    let mut builder = pretty_env_logger::formatted_timed_builder();
    if let Ok(s) = env::var("RUST_LOG") {
        builder.parse_filters(&s);
    } else {
        builder.filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
    }
    builder.init();

    let functions: Vec<Functions> = match args.function {
        Some(function) => vec![function],
        None if args.point.is_some() || args.direction.is_some() => {
            error!("A point or direction was given, but no function to evaluate it with!");
            return ExitCode::FAILURE;
        }
        None => Functions::iter().collect(),
    };

    for function in functions {
        match function.report(args.point.as_deref(), args.direction.as_deref(), args.alpha) {
            Ok(report) => println!("{}\n", report),
            Err(err) => {
                error!("{}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
