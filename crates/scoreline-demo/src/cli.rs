#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Flags are parsed by hand. Environment variables with the
//! `SCORELINE_DEMO_*` prefix supply defaults that explicit flags override.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Scoreline Demo: a sidebar panel in your terminal

USAGE:
    scoreline-demo [OPTIONS]

OPTIONS:
    --config=PATH          Load the panel layout from a JSON file
    --server-version=TAG   Pick limits for a server version (v1_8_R3, 1.13.2, ...)
    --ticks=N              Quit after N ticks (default: 0, run until quit)
    --tick-ms=N            Milliseconds per tick (default: 50)
    --help, -h             Show this help message
    --version, -V          Show version

KEYBINDINGS:
    n               Rotate the title now
    c               Clear the status line
    q / Esc / Ctrl+C  Quit

ENVIRONMENT VARIABLES:
    SCORELINE_DEMO_CONFIG     Override --config
    SCORELINE_DEMO_TICKS      Override --ticks
    SCORELINE_DEMO_TICK_MS    Override --tick-ms
    SCORELINE_VERSION         Server version used when --server-version is absent
    SCORELINE_LOG             Log filter, written to stderr (e.g. scoreline_core=debug)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Layout file; the built-in layout is used when absent.
    pub config: Option<PathBuf>,
    /// Server version tag used to pick protocol limits.
    pub server_version: Option<String>,
    /// Quit after this many ticks (0 = never).
    pub ticks: u64,
    /// Tick length in milliseconds.
    pub tick_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            config: None,
            server_version: None,
            ticks: 0,
            tick_ms: 50,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the demo.
    Run(Opts),
    /// Print help and exit.
    Help,
    /// Print version and exit.
    Version,
}

/// A flag that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A numeric flag had a non-numeric value.
    InvalidValue { flag: &'static str, value: String },
    /// The flag is not known.
    Unknown(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
            Self::Unknown(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for CliError {}

fn parse_number(flag: &'static str, value: &str) -> Result<u64, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        flag,
        value: value.to_owned(),
    })
}

impl Opts {
    /// Parse process arguments and environment variables.
    ///
    /// Prints help or version and exits when asked to, and exits with
    /// status 1 on a bad flag.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("scoreline-demo {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("{err}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` with `lookup` standing in for the environment.
    ///
    /// Unparseable environment values are ignored; unparseable flags are
    /// errors.
    pub fn parse_from<I, S, F>(args: I, lookup: F) -> Result<Command, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = lookup("SCORELINE_DEMO_CONFIG") {
            opts.config = Some(PathBuf::from(val));
        }
        if let Some(val) = lookup("SCORELINE_DEMO_TICKS")
            && let Ok(n) = val.parse()
        {
            opts.ticks = n;
        }
        if let Some(val) = lookup("SCORELINE_DEMO_TICK_MS")
            && let Ok(n) = val.parse()
        {
            opts.tick_ms = n;
        }

        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--config=") {
                        opts.config = Some(PathBuf::from(val));
                    } else if let Some(val) = other
                        .strip_prefix("--server-version=")
                        .or_else(|| other.strip_prefix("--version-tag="))
                    {
                        opts.server_version = Some(val.to_owned());
                    } else if let Some(val) = other.strip_prefix("--ticks=") {
                        opts.ticks = parse_number("--ticks", val)?;
                    } else if let Some(val) = other.strip_prefix("--tick-ms=") {
                        opts.tick_ms = parse_number("--tick-ms", val)?;
                    } else {
                        return Err(CliError::Unknown(other.to_owned()));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run(args: &[&str]) -> Opts {
        match Opts::parse_from(args, no_env).unwrap() {
            Command::Run(opts) => opts,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn default_opts() {
        let opts = run(&[]);
        assert_eq!(opts, Opts::default());
        assert_eq!(opts.tick_ms, 50);
        assert_eq!(opts.ticks, 0);
    }

    #[test]
    fn flags_are_parsed() {
        let opts = run(&[
            "--config=panel.json",
            "--server-version=v1_13_R2",
            "--ticks=40",
            "--tick-ms=10",
        ]);
        assert_eq!(opts.config, Some(PathBuf::from("panel.json")));
        assert_eq!(opts.server_version.as_deref(), Some("v1_13_R2"));
        assert_eq!(opts.ticks, 40);
        assert_eq!(opts.tick_ms, 10);
    }

    #[test]
    fn version_tag_alias() {
        let opts = run(&["--version-tag=1.8.8"]);
        assert_eq!(opts.server_version.as_deref(), Some("1.8.8"));
    }

    #[test]
    fn flags_override_env() {
        let env = |key: &str| match key {
            "SCORELINE_DEMO_TICKS" => Some("7".to_owned()),
            "SCORELINE_DEMO_TICK_MS" => Some("junk".to_owned()),
            _ => None,
        };
        let Command::Run(opts) = Opts::parse_from(["--ticks=9"], env).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(opts.ticks, 9);
        assert_eq!(opts.tick_ms, 50);

        let Command::Run(opts) = Opts::parse_from(Vec::<String>::new(), env).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(opts.ticks, 7);
    }

    #[test]
    fn help_and_version() {
        assert_eq!(Opts::parse_from(["-h"], no_env), Ok(Command::Help));
        assert_eq!(Opts::parse_from(["--version"], no_env), Ok(Command::Version));
    }

    #[test]
    fn bad_flags_are_errors() {
        assert_eq!(
            Opts::parse_from(["--ticks=soon"], no_env),
            Err(CliError::InvalidValue {
                flag: "--ticks",
                value: "soon".to_owned()
            })
        );
        let err = Opts::parse_from(["--fast"], no_env).unwrap_err();
        assert_eq!(err.to_string(), "Unknown argument: --fast");
    }

    #[test]
    fn help_text_lists_env_vars() {
        assert!(HELP_TEXT.contains("SCORELINE_DEMO_CONFIG"));
        assert!(HELP_TEXT.contains("SCORELINE_LOG"));
        assert!(!VERSION.is_empty());
    }
}
