//! Version command.

use nu_ansi_term::Style;
use std::io::IsTerminal;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the version command
pub fn run() {
    if std::io::stdout().is_terminal() {
        println!("{}", Style::new().bold().paint(VERSION));
    } else {
        println!("{VERSION}");
    }
}
