//! Command-line argument parsing and help for navi.
//!
//! When invoked with no arguments (`navi`), navi launches the browser in the current
//! working directory. The few flags below only print information or write a config.

use crate::config::Config;

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    RunApp,
    Exit,
}

#[derive(Debug, PartialEq, Eq)]
enum CliCommand {
    Run,
    Version,
    Help,
    Keybinds,
    Init,
    Invalid(String),
}

pub fn handle_args() -> CliAction {
    match parse_args(std::env::args().skip(1)) {
        CliCommand::Run => CliAction::RunApp,
        CliCommand::Version => {
            println!("navi {}", env!("CARGO_PKG_VERSION"));
            CliAction::Exit
        }
        CliCommand::Help => {
            print_help();
            CliAction::Exit
        }
        CliCommand::Keybinds => {
            println!("{}", KEYBINDS_TEXT);
            CliAction::Exit
        }
        CliCommand::Init => {
            if let Err(e) = Config::generate_default(&Config::default_path()) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        CliCommand::Invalid(msg) => {
            eprintln!("{}", msg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn parse_args<I>(args: I) -> CliCommand
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [] => CliCommand::Run,
        [arg] => match arg.as_str() {
            "-v" | "--version" => CliCommand::Version,
            "-h" | "--help" => CliCommand::Help,
            "--keybinds" => CliCommand::Keybinds,
            "--init" => CliCommand::Init,
            other => CliCommand::Invalid(format!("Unknown argument: {}", other)),
        },
        _ => CliCommand::Invalid("Error: navi accepts at most one option.".into()),
    }
}

fn print_help() {
    println!(
        r#"navi - a small terminal file manager

USAGE:
  navi            Browse the current working directory

OPTIONS:
      --init      Generate a default configuration file
      --keybinds  Display the key bindings
  -h, --help      Print help information
  -v, --version   Display the installed version

ENVIRONMENT:
  NAVI_CONFIG     Override the default config path
  NAVI_LOG        Override the log file path
"#
    );
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
  Up / Down       Move the cursor
  Enter           Enter the selected directory
  o               Open: directories are entered, files go to the default application
  n               New file
  N               New folder
  r               Rename the selected entry
  c               Copy the selected entry to the buffer
  x               Cut the selected entry to the buffer
  v               Paste the buffer into the current directory
  w               Set the process working directory to the current directory
  d               Delete (press twice within the confirmation window)
  p               Toggle the preview pane
  q               Quit

 While typing a name:
  Enter           Confirm (an empty name cancels)
  Esc             Cancel
  Backspace       Erase the last character
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_runs_the_app() {
        assert_eq!(parse_args(args(&[])), CliCommand::Run);
    }

    #[test]
    fn known_flags() {
        assert_eq!(parse_args(args(&["-v"])), CliCommand::Version);
        assert_eq!(parse_args(args(&["--help"])), CliCommand::Help);
        assert_eq!(parse_args(args(&["--keybinds"])), CliCommand::Keybinds);
        assert_eq!(parse_args(args(&["--init"])), CliCommand::Init);
    }

    #[test]
    fn unknown_or_extra_args_are_rejected() {
        assert!(matches!(parse_args(args(&["--bogus"])), CliCommand::Invalid(_)));
        assert!(matches!(parse_args(args(&["-h", "-v"])), CliCommand::Invalid(_)));
    }
}
