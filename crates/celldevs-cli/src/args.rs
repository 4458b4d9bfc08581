//! Argument parsing.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use celldevs_core::Time;
use celldevs_sir::SirParams;

/// Log file written in the working directory.
pub const DEFAULT_OUTPUT: &str = "celldevs_sir_sequential_log.csv";

/// Everything one run needs.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Side of the square grid.
    pub grid_dimension: u32,
    /// Simulation horizon.
    pub horizon: Time,
    /// Where the result log goes.
    pub output_path: PathBuf,
    /// Epidemic parameters.
    pub params: SirParams,
}

impl RunConfig {
    /// A run with the default output path and parameters.
    pub fn new(grid_dimension: u32, horizon: Time) -> Self {
        Self {
            grid_dimension,
            horizon,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            params: SirParams::default(),
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `-h` or `--help`.
    Help,
    /// A simulation run.
    Run(RunConfig),
}

/// Errors from [`parse_args`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgError {
    /// A positional argument is missing.
    Missing {
        /// Name of the argument.
        name: &'static str,
    },
    /// A positional argument is not an integer.
    NotANumber {
        /// Name of the argument.
        name: &'static str,
        /// The text given.
        value: String,
    },
    /// `GRID_DIMENSIONS` is below 1.
    GridTooSmall {
        /// The value given.
        value: i64,
    },
    /// `GRID_DIMENSIONS` does not fit the grid's coordinate range.
    GridTooLarge {
        /// The value given.
        value: i64,
    },
    /// `SIMULATION_TIME` is below 0.
    NegativeTime {
        /// The value given.
        value: i64,
    },
    /// An argument beyond the two positionals.
    Unexpected {
        /// The extra argument.
        value: String,
    },
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { name } => write!(f, "not enough arguments: {name} is required"),
            Self::NotANumber { name, value } => {
                write!(f, "{name} must be an integer, got '{value}'")
            }
            Self::GridTooSmall { value } => {
                write!(f, "GRID_DIMENSIONS is less than 1 ({value})")
            }
            Self::GridTooLarge { value } => {
                write!(f, "GRID_DIMENSIONS is too large ({value})")
            }
            Self::NegativeTime { value } => {
                write!(f, "SIMULATION_TIME is less than 0 ({value})")
            }
            Self::Unexpected { value } => write!(f, "unexpected argument '{value}'"),
        }
    }
}

impl Error for ArgError {}

/// Usage text printed on `--help` and after an argument error.
pub fn usage() -> &'static str {
    "Usage:\n    celldevs-sir GRID_DIMENSIONS SIMULATION_TIME\n        \
     (GRID_DIMENSIONS must be at least 1, SIMULATION_TIME at least 0)\n\n\
     Writes celldevs_sir_sequential_log.csv and prints the elapsed seconds.\n\
     Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr."
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ArgError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let grid = match args.next() {
        Some(a) if a == "-h" || a == "--help" => return Ok(Command::Help),
        Some(a) => a,
        None => return Err(ArgError::Missing {
            name: "GRID_DIMENSIONS",
        }),
    };
    let time = args.next().ok_or(ArgError::Missing {
        name: "SIMULATION_TIME",
    })?;
    if let Some(extra) = args.next() {
        return Err(ArgError::Unexpected { value: extra });
    }

    let grid = parse_int("GRID_DIMENSIONS", &grid)?;
    if grid < 1 {
        return Err(ArgError::GridTooSmall { value: grid });
    }
    let grid_dimension = i32::try_from(grid)
        .map_err(|_| ArgError::GridTooLarge { value: grid })? as u32;

    let time = parse_int("SIMULATION_TIME", &time)?;
    if time < 0 {
        return Err(ArgError::NegativeTime { value: time });
    }

    Ok(Command::Run(RunConfig::new(grid_dimension, time as Time)))
}

fn parse_int(name: &'static str, text: &str) -> Result<i64, ArgError> {
    text.trim().parse().map_err(|_| ArgError::NotANumber {
        name,
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, ArgError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn two_positionals_make_a_run() {
        let cmd = parse(&["10", "5"]).unwrap();
        assert_eq!(cmd, Command::Run(RunConfig::new(10, 5.0)));
        let Command::Run(cfg) = cmd else { unreachable!() };
        assert_eq!(cfg.output_path, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn help_flags() {
        assert_eq!(parse(&["-h"]), Ok(Command::Help));
        assert_eq!(parse(&["--help", "junk"]), Ok(Command::Help));
    }

    #[test]
    fn missing_arguments() {
        assert_eq!(
            parse(&[]),
            Err(ArgError::Missing {
                name: "GRID_DIMENSIONS"
            })
        );
        assert_eq!(
            parse(&["3"]),
            Err(ArgError::Missing {
                name: "SIMULATION_TIME"
            })
        );
    }

    #[test]
    fn non_numeric_values() {
        assert!(matches!(
            parse(&["three", "5"]),
            Err(ArgError::NotANumber {
                name: "GRID_DIMENSIONS",
                ..
            })
        ));
        assert!(matches!(
            parse(&["3", "2.5"]),
            Err(ArgError::NotANumber {
                name: "SIMULATION_TIME",
                ..
            })
        ));
    }

    #[test]
    fn range_checks() {
        assert_eq!(parse(&["0", "5"]), Err(ArgError::GridTooSmall { value: 0 }));
        assert_eq!(parse(&["-4", "5"]), Err(ArgError::GridTooSmall { value: -4 }));
        assert_eq!(
            parse(&["3000000000", "5"]),
            Err(ArgError::GridTooLarge { value: 3_000_000_000 })
        );
        assert_eq!(parse(&["3", "-1"]), Err(ArgError::NegativeTime { value: -1 }));
    }

    #[test]
    fn zero_time_is_accepted() {
        assert_eq!(parse(&["1", "0"]), Ok(Command::Run(RunConfig::new(1, 0.0))));
    }

    #[test]
    fn extra_argument_rejected() {
        assert_eq!(
            parse(&["3", "5", "--fast"]),
            Err(ArgError::Unexpected {
                value: "--fast".into()
            })
        );
    }

    #[test]
    fn messages_name_the_argument() {
        assert!(ArgError::GridTooSmall { value: 0 }
            .to_string()
            .contains("GRID_DIMENSIONS"));
        assert!(usage().contains("celldevs-sir GRID_DIMENSIONS SIMULATION_TIME"));
    }
}
