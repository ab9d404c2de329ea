//! Output abstraction
//!
//! Lets the CLI write through a trait so tests can capture what it prints.

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal output using stdout
pub struct TerminalIO;

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

pub mod test_utils {
    use super::*;

    /// Output writer that records every line, for tests
    #[derive(Default)]
    pub struct MockOutput {
        pub messages: Vec<String>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn joined(&self) -> String {
            self.messages.concat()
        }
    }

    impl OutputWriter for MockOutput {
        fn writeln(&mut self, message: &str) {
            self.messages.push(format!("{}\n", message));
        }
    }
}
