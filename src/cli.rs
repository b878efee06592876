use std::{error::Error, fmt};

pub const USAGE: &str = "usage: pump-predictor [<temperature> <humidity> [light]]";

/// What one invocation should do, decided by the positional arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Score one reading and print the bare integer volume.
    Predict {
        temperature: f64,
        humidity: f64,
        /// Defaults to 50 lux downstream when absent.
        light: Option<f64>,
    },
    /// Retrain from the dataset and print the fit report.
    Report,
}

/// Argument errors reported to stderr with exit code 1.
#[derive(Debug, PartialEq)]
pub enum CliError {
    MissingArgument { name: &'static str },
    InvalidNumber { name: &'static str, value: String },
    TooManyArguments { got: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { name } => {
                write!(f, "missing argument <{name}>\n{USAGE}")
            }
            Self::InvalidNumber { name, value } => {
                write!(f, "invalid number {value:?} for <{name}>\n{USAGE}")
            }
            Self::TooManyArguments { got } => {
                write!(f, "expected at most 3 arguments, got {got}\n{USAGE}")
            }
        }
    }
}

impl Error for CliError {}

/// Parses positional arguments (program name excluded) into a command.
///
/// No arguments selects report mode. Two or three numeric arguments select
/// predict mode as temperature, humidity, and optional light intensity. A
/// literal `--` token is a separator and is skipped.
///
/// # Errors
/// Returns a `CliError` for a lone argument, more than three arguments, or
/// any argument that does not parse as a number.
pub fn parse<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let positional: Vec<String> = args.into_iter().filter(|arg| arg != "--").collect();

    match positional.len() {
        0 => Ok(Command::Report),
        1 => Err(CliError::MissingArgument { name: "humidity" }),
        2 | 3 => {
            let temperature = parse_number("temperature", &positional[0])?;
            let humidity = parse_number("humidity", &positional[1])?;
            let light = positional
                .get(2)
                .map(|value| parse_number("light", value))
                .transpose()?;
            Ok(Command::Predict {
                temperature,
                humidity,
                light,
            })
        }
        got => Err(CliError::TooManyArguments { got }),
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, CliError> {
    value.parse().map_err(|_| CliError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_selects_report_mode() {
        assert_eq!(parse(args(&[])), Ok(Command::Report));
    }

    #[test]
    fn two_arguments_predict_without_light() {
        assert_eq!(
            parse(args(&["22.5", "55"])),
            Ok(Command::Predict {
                temperature: 22.5,
                humidity: 55.0,
                light: None,
            })
        );
    }

    #[test]
    fn three_arguments_predict_with_light() {
        assert_eq!(
            parse(args(&["30", "70", "500"])),
            Ok(Command::Predict {
                temperature: 30.0,
                humidity: 70.0,
                light: Some(500.0),
            })
        );
    }

    #[test]
    fn separator_token_is_skipped() {
        assert_eq!(
            parse(args(&["22.5", "55", "--"])),
            Ok(Command::Predict {
                temperature: 22.5,
                humidity: 55.0,
                light: None,
            })
        );
    }

    #[test]
    fn lone_argument_is_missing_humidity() {
        assert_eq!(
            parse(args(&["22.5"])),
            Err(CliError::MissingArgument { name: "humidity" })
        );
    }

    #[test]
    fn non_numeric_argument_is_rejected() {
        assert_eq!(
            parse(args(&["abc", "55"])),
            Err(CliError::InvalidNumber {
                name: "temperature",
                value: "abc".to_string(),
            })
        );
    }

    #[test]
    fn four_arguments_are_rejected() {
        assert_eq!(
            parse(args(&["1", "2", "3", "4"])),
            Err(CliError::TooManyArguments { got: 4 })
        );
    }
}
