//! Where resolver output meets the terminal.

use crate::resolver::ResolveError;

/// Sink for user-facing output.
///
/// The command line front-end writes through this trait so tests can capture
/// everything a run would have printed.
pub trait UserInterface {
    /// Write a message to regular output.
    fn print(&self, message: String);

    /// Write a resolution failure to error output.
    fn print_error(&self, error: &ResolveError);
}

/// Standard out/err implementation.
#[derive(Default)]
pub struct Console {}

impl UserInterface for Console {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &ResolveError) {
        eprintln!("ERROR: {error}");
    }
}

#[cfg(any(test, feature = "unit_test"))]
pub use in_memory::InMemoryInterface;

#[cfg(any(test, feature = "unit_test"))]
mod in_memory {
    use std::cell::RefCell;

    use super::UserInterface;
    use crate::resolver::ResolveError;

    /// Capturing implementation for tests.
    pub struct InMemoryInterface {
        messages: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl Default for InMemoryInterface {
        fn default() -> Self {
            Self {
                messages: RefCell::new(Vec::default()),
                errors: RefCell::new(Vec::default()),
            }
        }
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            self.messages.borrow_mut().push(message);
        }

        fn print_error(&self, error: &ResolveError) {
            self.errors.borrow_mut().push(error.to_string());
        }
    }

    impl InMemoryInterface {
        /// The captured output: joined messages and joined errors, `None`
        /// for an untouched channel.
        pub fn consume(self) -> (Option<String>, Option<String>) {
            let InMemoryInterface { messages, errors } = self;
            (join(messages.take()), join(errors.take()))
        }

        /// The captured messages, asserting nothing went to error output.
        pub fn consume_message(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(error, None);
            message.unwrap()
        }
    }

    fn join(lines: Vec<String>) -> Option<String> {
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::ScanError;

    #[test]
    fn in_memory_captures_messages() {
        let interface = InMemoryInterface::default();
        interface.print("one".to_string());
        interface.print("two".to_string());

        assert_eq!(interface.consume_message(), "one\ntwo");
    }

    #[test]
    fn in_memory_captures_errors() {
        let interface = InMemoryInterface::default();
        interface.print_error(&ResolveError::ConflictingCommands);
        interface.print_error(&ResolveError::Malformed(ScanError::UnknownOption(
            "--moot".to_string(),
        )));

        let (message, error) = interface.consume();
        assert_eq!(message, None);
        assert_eq!(
            error.unwrap(),
            "more than one command specified\nunrecognized option '--moot'"
        );
    }

    #[test]
    fn in_memory_untouched() {
        let interface = InMemoryInterface::default();
        assert_eq!(interface.consume(), (None, None));
    }
}
