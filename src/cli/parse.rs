use thiserror::Error;

use super::CliFlags;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--strength" => flags.strength = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "-d" | "--digits" => flags.digits = true,
            "-s" | "--symbols" => flags.symbols = true,
            "-a" | "--all" => flags.all = true,
            flag @ ("-l" | "--length") => {
                i += 1;
                flags.length = Some(number_arg(args, i, flag)?);
            }
            flag @ ("-n" | "--number") => {
                i += 1;
                match number_arg(args, i, flag)? {
                    0 => return Err(ParseError::InvalidNumber(args[i].clone())),
                    n => flags.number = Some(n),
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number_arg(args: &[String], i: usize, flag: &str) -> Result<usize, ParseError> {
    let value = args
        .get(i)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passform")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_is_default() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn test_parse_full_command() {
        let flags = parse(&args(&["-l", "12", "-d", "--no-lower", "-n", "3", "-b", "--strength"]))
            .unwrap();
        assert_eq!(flags.length, Some(12));
        assert_eq!(flags.number, Some(3));
        assert!(flags.digits);
        assert!(flags.no_lower);
        assert!(flags.clipboard);
        assert!(flags.strength);
        assert!(!flags.symbols);
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(
            parse(&args(&["--length", "twelve"])),
            Err(ParseError::InvalidNumber("twelve".into()))
        );
    }

    #[test]
    fn test_zero_count_is_rejected() {
        assert_eq!(
            parse(&args(&["-n", "0"])),
            Err(ParseError::InvalidNumber("0".into()))
        );
        assert_eq!(parse(&args(&["--number", "1"])).unwrap().number, Some(1));
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&args(&["-n"])),
            Err(ParseError::MissingValue("-n".into()))
        );
    }

    #[test]
    fn test_unknown_arg() {
        assert_eq!(
            parse(&args(&["--hex"])),
            Err(ParseError::UnknownArg("--hex".into()))
        );
    }
}
