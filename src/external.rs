//! Free functions standing in for calls into external code

use crate::console::Console;

pub fn external_function(console: &Console) {
    console.write_line("This is an external function call.");
}

/// Print `text` inside a fixed message. Any text is accepted, including empty.
pub fn another_external_function(console: &Console, text: &str) {
    console.write_line(format!("Received string: {text}"));
}
