//! Command-line argument parsing and help for lsr.
//!
//! Flags are scanned left to right in the getopt style: grouped short flags
//! are accepted (`-al`), and `-h`/`-v` short-circuit the scan, so anything
//! after them is never processed.

use crate::config::Config;

/// What `main` should do once the arguments have been handled.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    /// List the current directory with the parsed configuration.
    List(Config),
    /// Help or version text has been printed; exit successfully.
    Exit,
}

/// Parses the process arguments into a [CliAction].
pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_flags(&args)
}

/// Scans `args` left to right and folds the recognized flags into a
/// [Config]. Unrecognized flags and positional arguments are reported on
/// standard error and skipped.
pub fn parse_flags(args: &[String]) -> CliAction {
    let mut config = Config::default();

    for arg in args {
        let Some(flags) = arg.strip_prefix('-') else {
            eprintln!("lsr: ignoring '{}' (directory arguments are not supported)", arg);
            continue;
        };

        for flag in flags.chars() {
            match flag {
                'a' => config.show_hidden = true,
                'l' => config.long_format = true,
                'h' => {
                    print_help();
                    return CliAction::Exit;
                }
                'v' => {
                    print_version();
                    return CliAction::Exit;
                }
                other => {
                    eprintln!("lsr: invalid option -- '{}'", other);
                    eprintln!("Try -h for available options");
                }
            }
        }
    }

    CliAction::List(config)
}

fn print_version() {
    println!("lsr {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"lsr - A minimal directory lister for the terminal

USAGE:
  lsr [OPTIONS]

Lists the current working directory. Entries come out in whatever order
the filesystem returns them; nothing is sorted.

OPTIONS:
  -a    Include hidden entries (names starting with '.')
  -l    Long format: permissions, owner, group, size, modification time
  -h    Print help information
  -v    Display the current installed version of lsr
"#
    );
}
