use anypp::cli::Cli;
use anypp::config::AnyppConfig;
use clap::Parser;
use std::path::PathBuf;

/// Reset SIGPIPE to default behavior on Unix so piping to `head` etc. works correctly.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: resets the SIGPIPE disposition to its default. No memory is touched.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, config_errors) = AnyppConfig::load(&root);
    anypp::logging::init(cli.verbose, config.log.level.as_deref());
    for err in &config_errors {
        eprintln!("warning: ignoring malformed config {err}");
    }

    if let Err(e) = anypp::commands::run(cli.command, &config) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
