//! Command-line flags.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

pub const USAGE: &str = "\
Usage: lyrics --url <URL> [--output <PATH>]

Options:
  -u, --url <URL>        URL of the song's lyrics page
  -o, --output <PATH>    File where the lyrics will be saved (default: stdout)
  -h, --help             Print this help";

/// Parsed flags
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub url: Option<String>,
    pub output: Option<PathBuf>,
    pub help: bool,
}

impl Args {
    /// Parse flags, excluding the program name.
    ///
    /// Flags take one or two leading dashes and their value either as the
    /// next argument or after `=`.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let Some(flag) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
                bail!("unexpected argument `{}`", arg);
            };

            let (name, inline_value) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (flag, None),
            };

            match name {
                "h" | "help" => parsed.help = true,
                "u" | "url" => {
                    parsed.url = Some(value_for(name, inline_value, &mut args)?);
                }
                "o" | "output" => {
                    parsed.output = Some(PathBuf::from(value_for(name, inline_value, &mut args)?));
                }
                _ => bail!("unknown flag `{}`", arg),
            }
        }

        Ok(parsed)
    }
}

fn value_for<I>(name: &str, inline: Option<String>, rest: &mut I) -> Result<String>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| rest.next())
        .ok_or_else(|| anyhow!("flag `{}` needs a value", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_long_and_short_flags() {
        let args = parse(&["--url", "https://genius.com/x", "-o", "out.txt"]).unwrap();
        assert_eq!(args.url.as_deref(), Some("https://genius.com/x"));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert!(!args.help);
    }

    #[test]
    fn test_single_dash_long_and_equals() {
        let args = parse(&["-url=https://genius.com/x", "--output=lyrics.txt"]).unwrap();
        assert_eq!(args.url.as_deref(), Some("https://genius.com/x"));
        assert_eq!(args.output, Some(PathBuf::from("lyrics.txt")));
    }

    #[test]
    fn test_help() {
        assert!(parse(&["-h"]).unwrap().help);
        assert!(parse(&["--help"]).unwrap().help);
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn test_missing_value() {
        let err = parse(&["--url"]).unwrap_err();
        assert_eq!(err.to_string(), "flag `url` needs a value");
    }

    #[test]
    fn test_unknown_flag_and_positional() {
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["https://genius.com/x"]).is_err());
    }
}
