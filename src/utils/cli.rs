//! Command-line argument parsing and help for fieldlist.
//!
//! This module handles all CLI flag parsing of the `fl` binary.
//!
//! When invoked with no args/flags (fl), the current directory is listed as a text table.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    List { path: Option<String>, json: bool },
    Check(String),
    InitConfig,
    InitListing(Option<String>),
    /// Help or version was printed.
    Exit,
    /// Bad arguments, the problem was printed.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub action: CliAction,
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Check,
    Init,
    InitListing,
}

impl Mode {
    fn flag(self) -> &'static str {
        match self {
            Mode::Check => "--check",
            Mode::Init => "--init",
            Mode::InitListing => "--init-listing",
        }
    }
}

pub fn handle_args() -> CliArgs {
    parse_args(std::env::args().skip(1))
}

/// Parses the arguments after the program name.
pub fn parse_args<I, S>(args: I) -> CliArgs
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut path: Option<String> = None;
    let mut check_file: Option<String> = None;
    let mut mode: Option<Mode> = None;
    let mut json = false;
    let mut debug = false;

    let invalid = |debug: bool| CliArgs {
        action: CliAction::Invalid,
        debug,
    };

    while let Some(arg) = args.next() {
        let requested = match arg.as_str() {
            "--version" | "-v" => {
                print_version();
                return CliArgs {
                    action: CliAction::Exit,
                    debug,
                };
            }
            "-h" | "--help" => {
                print_help();
                return CliArgs {
                    action: CliAction::Exit,
                    debug,
                };
            }
            "--json" => {
                json = true;
                None
            }
            "-d" | "--debug" => {
                debug = true;
                None
            }
            "--init" => Some(Mode::Init),
            "--init-listing" => Some(Mode::InitListing),
            "--check" => {
                let Some(file) = args.next() else {
                    eprintln!("Error: --check needs a listing config file.");
                    return invalid(debug);
                };
                check_file = Some(file);
                Some(Mode::Check)
            }
            a if !a.starts_with('-') && !a.trim().is_empty() => {
                if path.is_some() {
                    eprintln!("Error: fl accepts only one PATH.");
                    eprintln!("Usage: fl [OPTIONS] [PATH]");
                    return invalid(debug);
                }
                path = Some(a.to_string());
                None
            }
            a => {
                eprintln!("Unknown argument: {}", a);
                eprintln!("Try --help for available options");
                return invalid(debug);
            }
        };

        if let Some(requested) = requested {
            if let Some(current) = mode
                && current != requested
            {
                eprintln!(
                    "Error: {} cannot be combined with {}.",
                    requested.flag(),
                    current.flag()
                );
                return invalid(debug);
            }
            mode = Some(requested);
        }
    }

    let action = match mode {
        None => CliAction::List { path, json },
        Some(Mode::Init) => CliAction::InitConfig,
        Some(Mode::InitListing) => CliAction::InitListing(path),
        Some(Mode::Check) => match check_file {
            Some(file) => CliAction::Check(file),
            None => return invalid(debug),
        },
    };
    CliArgs { action, debug }
}

fn print_version() {
    println!("fieldlist {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"fieldlist - Configurable directory listings

USAGE:
  fl [OPTIONS] [PATH]

PATH:
  Directory to list (defaults to current directory)

OPTIONS:
      --json              Print the listing as JSON instead of a table
      --check <FILE>      Compile a listing config and report the first error
      --init              Generate the default application configuration
      --init-listing      Write a sample .fieldlist.json into PATH
  -d, --debug             Enable debug logging on stderr
  -h, --help              Print help information
  -v, --version           Display the current installed version

FIELD DEFINITIONS:
  `text`                  Literal text, \` for a backtick
  $N                      Capture group N of the last matching pattern (0 = whole match)
  file-name               Entry name
  last-change[:FORMAT]    Modification time, chrono format (default %d.%m.%Y)

ENVIRONMENT:
  FIELDLIST_CONFIG        Override the default config path
  RUST_LOG                Override the log filter
"#
    );
}
