//! Texstitch - command-line sprite atlas packer

use std::process::ExitCode;

use texstitch::cli;

fn main() -> ExitCode {
    cli::run()
}
