//! The binary is intentionally thin: the CLI lives in `cli/`, while this
//! file only invokes `cli::run()` and handles process termination. For the
//! overall architecture, see the library documentation.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
