use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug,Clone,Parser)]
#[command(version, about)]
#[command(after_long_help="Warnings are printed by default.  Logging is controlled via RUST_LOG/RUST_LOG_STYLE\nas described in https://docs.rs/env_logger documentation.")]
pub struct Options {
    /// The BOM export to compare from (usually the older revision)
    #[arg(value_hint=clap::ValueHint::FilePath)]
    pub from : PathBuf,
    /// The BOM export to compare to (usually the newer revision)
    #[arg(value_hint=clap::ValueHint::FilePath)]
    pub to : PathBuf
}

/// What the command line asked for
#[derive(Debug)]
pub enum Invocation {
    /// Compare the two files
    Run(Options),
    /// Wrong number of arguments; print this text and stop without touching
    /// any file
    Usage(String)
}

pub fn usage(program : &str) -> String {
    format!("Usage: {} from.csv to.csv", program)
}

/// Parse the command line (including the program name)
///
/// A wrong argument count is not treated as an error: it produces
/// [Invocation::Usage].  Anything clap wants to report itself (`--help`,
/// `--version`, malformed arguments) is returned as the clap error so that the
/// caller can `exit()` with it.
pub fn parse_args<I, T>(args : I) -> Result<Invocation, clap::Error>
    where I : IntoIterator<Item = T>, T : Into<OsString> + Clone {
    let args : Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args.first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());

    match Options::try_parse_from(&args) {
        Ok(opts) => { Ok(Invocation::Run(opts)) }
        Err(e) => {
            match e.kind() {
                ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
                    Ok(Invocation::Usage(usage(&program)))
                }
                _ => { Err(e) }
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_two_paths() {
        match parse_args(["bom-diff", "a.csv", "b.csv"]) {
            Ok(Invocation::Run(opts)) => {
                assert_eq!(opts.from, PathBuf::from("a.csv"));
                assert_eq!(opts.to, PathBuf::from("b.csv"));
            }
            other => panic!("unexpected parse result {:?}", other)
        }
    }

    #[test]
    fn test_wrong_argument_count_is_usage() {
        for args in [vec!["bomdiff.py"], vec!["bomdiff.py", "a.csv"], vec!["bomdiff.py", "a.csv", "b.csv", "c.csv"]] {
            match parse_args(args) {
                Ok(Invocation::Usage(text)) => { assert_eq!(text, "Usage: bomdiff.py from.csv to.csv") }
                other => panic!("unexpected parse result {:?}", other)
            }
        }
    }

    #[test]
    fn test_help_is_left_to_clap() {
        let err = parse_args(["bom-diff", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
