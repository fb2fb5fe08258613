//! Process-facing layer: exit codes and command dispatch.
//!
//! [`resolve`] is the testable middle layer; [`main`](crate) wraps it with
//! `std::process::exit`. Keeping the exit out of the library mirrors the
//! split between recoverable resolution failures and the fatal syntax path:
//! both surface here as an exit code, but only the library caller can tell
//! them apart.

use crate::constant::PROGRAM;
use crate::model::{Command, Options};
use crate::resolver::{self, ResolveError};
use crate::ui::UserInterface;
use crate::usage::Usage;

/// Exit status for failed resolution, syntactic or semantic.
pub const EXIT_FAILURE: i32 = 1;

/// Resolve the tokens, printing any failure through the interface.
///
/// On `Err`, the returned code is ready for `std::process::exit`; no
/// configuration, partial or otherwise, is produced.
pub fn resolve(tokens: &[&str], interface: &dyn UserInterface) -> Result<Options, i32> {
    match resolver::resolve(tokens) {
        Ok(options) => Ok(options),
        Err(error) => {
            interface.print_error(&error);

            if error.is_fatal() {
                interface.print(format!(
                    "try '{PROGRAM} --help' for the list of supported options"
                ));
            }

            Err(EXIT_FAILURE)
        }
    }
}

/// Act on the resolved command: print the usage screen, the version banner,
/// or the run header for the compute commands.
pub fn dispatch(options: &Options, interface: &dyn UserInterface) {
    match options.command {
        Command::Help => Usage::terminal().print(interface),
        Command::Version => interface.print(version()),
        Command::Evaluate | Command::Search => {
            interface.print(version());
            interface.print(String::default());
            interface.print(options.to_string());
        }
    }
}

/// The version banner.
pub fn version() -> String {
    format!("{PROGRAM} v{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use crate::ui::InMemoryInterface;

    #[test]
    fn resolve_success_prints_nothing() {
        let interface = InMemoryInterface::default();

        let options = resolve(&["--search", "--msa", "x.fa"], &interface).unwrap();

        assert_eq!(options.command, Command::Search);
        assert_eq!(interface.consume(), (None, None));
    }

    #[test]
    fn resolve_semantic_failure_prints_diagnostic() {
        let interface = InMemoryInterface::default();

        let code = resolve(&["--search"], &interface).unwrap_err();

        assert_eq!(code, EXIT_FAILURE);
        let (message, error) = interface.consume();
        assert_eq!(message, None);
        assert_contains!(error.unwrap(), "--msa");
    }

    #[test]
    fn resolve_syntax_failure_points_at_help() {
        let interface = InMemoryInterface::default();

        let code = resolve(&["--frobnicate"], &interface).unwrap_err();

        assert_eq!(code, EXIT_FAILURE);
        let (message, error) = interface.consume();
        assert_contains!(message.unwrap(), "--help");
        assert_contains!(error.unwrap(), "--frobnicate");
    }

    #[test]
    fn dispatch_help() {
        let interface = InMemoryInterface::default();
        let options = resolve(&[], &interface).unwrap();

        dispatch(&options, &interface);

        assert_contains!(interface.consume_message(), "usage: mltree");
    }

    #[test]
    fn dispatch_version() {
        let interface = InMemoryInterface::default();
        let options = resolve(&["--version"], &interface).unwrap();

        dispatch(&options, &interface);

        assert_eq!(interface.consume_message(), version());
    }

    #[test]
    fn dispatch_search_prints_run_header() {
        let interface = InMemoryInterface::default();
        let options = resolve(&["--search", "--msa", "x.fa"], &interface).unwrap();

        dispatch(&options, &interface);

        let message = interface.consume_message();
        assert_contains!(message, "run mode: search");
        assert_contains!(message, "alignment: x.fa");
    }
}
