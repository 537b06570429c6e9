//! Output abstraction
//!
//! Presenters write through [`OutputWriter`] so they can be tested against
//! a mock instead of the terminal.

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Standard output
pub struct Terminal;

impl OutputWriter for Terminal {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
