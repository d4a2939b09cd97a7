//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = gymslot_cli::run() {
        eprintln!("gymslot: {err}");
        std::process::exit(1);
    }
}
